use log::trace;

use self::bit::{AdderOutput, Bit, BitString};

pub mod bit;

/// The word type the adder operates on. Additions are fixed-width over this
/// type's bit pattern, so two's-complement operands enter as `x as u32`.
pub type Word = u32;

/// Width of a word in bits, and the number of adder stages chained per
/// addition.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Combine two bits in a half-adder: an XOR gate for the sum line and an AND
/// gate for the carry line. The first stage of the chain, where no carry can
/// come in yet.
///
/// # Examples
/// ```
/// use ripple::adder::bit::Bit;
/// use ripple::adder::half_adder;
///
/// let stage = half_adder(Bit::One, Bit::One);
/// assert_eq!(stage.sum, Bit::Zero);
/// assert_eq!(stage.carry, Bit::One);
/// ```
pub fn half_adder(a: Bit, b: Bit) -> AdderOutput {
    AdderOutput {
        sum: a ^ b,
        carry: a & b,
    }
}

/// Combine two bits and an incoming carry in a full-adder: two chained XOR
/// gates for the sum line, and an OR over the two ways a carry can be
/// produced for the carry line.
///
/// # Examples
/// ```
/// use ripple::adder::bit::Bit;
/// use ripple::adder::full_adder;
///
/// let stage = full_adder(Bit::One, Bit::Zero, Bit::One);
/// assert_eq!(stage.sum, Bit::Zero);
/// assert_eq!(stage.carry, Bit::One);
/// ```
pub fn full_adder(a: Bit, b: Bit, carry_in: Bit) -> AdderOutput {
    let partial = a ^ b;

    AdderOutput {
        sum: partial ^ carry_in,
        carry: (a & b) | (partial & carry_in),
    }
}

/// Add two words the way a ripple-carry adder circuit does: one half-adder on
/// the least significant bits, then a full-adder per remaining bit position,
/// each fed the carry of the stage before it.
///
/// The carry out of the final stage falls off the word, so the sum wraps
/// exactly like native fixed-width addition, overflow and all.
///
/// # Examples
///
/// A simple addition, read back both as a word and as a bit string:
/// ```
/// use ripple::adder::add;
///
/// let sum = add(5, 3);
///
/// assert_eq!(sum.to_word(), 8);
/// assert_eq!(sum.to_string(), "00000000000000000000000000001000");
/// ```
///
/// Two's-complement patterns wrap around just like native arithmetic:
/// ```
/// use ripple::adder::add;
///
/// let sum = add(-1i32 as u32, 1);
/// assert_eq!(sum.to_word(), 0);
/// ```
pub fn add(mut a: Word, mut b: Word) -> BitString {
    let mut bits = [Bit::Zero; WORD_BITS];

    // Stage 0 has no incoming carry, so a half-adder is enough.
    let bit_a = Bit::from_lsb(a);
    let bit_b = Bit::from_lsb(b);
    let stage = half_adder(bit_a, bit_b);
    trace!("stage 0: {} + {} -> sum {}, carry {}", bit_a, bit_b, stage.sum, stage.carry);

    bits[WORD_BITS - 1] = stage.sum;
    let mut carry = stage.carry;
    a >>= 1;
    b >>= 1;

    // Ripple the carry through a full-adder per remaining bit position.
    for i in 1..WORD_BITS {
        let bit_a = Bit::from_lsb(a);
        let bit_b = Bit::from_lsb(b);
        let stage = full_adder(bit_a, bit_b, carry);
        trace!(
            "stage {}: {} + {} + {} -> sum {}, carry {}",
            i,
            bit_a,
            bit_b,
            carry,
            stage.sum,
            stage.carry
        );

        bits[WORD_BITS - 1 - i] = stage.sum;
        carry = stage.carry;
        a >>= 1;
        b >>= 1;
    }

    // The carry left over here is the one past the word width; dropping it is
    // what makes the adder wrap.
    BitString::from_bits(bits)
}

/// Build a human-readable report of one addition, pairing the decimal and
/// binary views of both operands and their sum.
///
/// # Examples
/// ```
/// use ripple::adder::sum_report;
///
/// let report = sum_report(5, 3);
///
/// assert!(report.contains("Decimal version: 5 + 3"));
/// assert!(report.contains("Decimal result: 8"));
/// ```
pub fn sum_report(a: Word, b: Word) -> String {
    let mut out = String::new();

    out.push_str("Result:\n");
    out.push_str(&format!("Decimal version: {} + {}\n", a, b));
    out.push_str(&format!(
        "Binary version: {} + {}\n",
        BitString::from_word(a),
        BitString::from_word(b)
    ));
    out.push_str(&format!("Decimal result: {}\n", a.wrapping_add(b)));
    out.push_str(&format!("Binary result: {}\n", add(a, b)));

    out
}
