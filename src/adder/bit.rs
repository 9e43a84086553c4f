use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor};

use crate::adder::{Word, WORD_BITS};

/// A single binary digit, the value carried on one wire of the adder.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bit {
    Zero = 0,
    One = 1,
}

impl Bit {
    /// Extract bit 0 of a word.
    ///
    /// The summation loop shifts its operands right by one each stage and
    /// re-extracts bit 0 here, rather than walking a shifting mask up the
    /// word.
    ///
    /// # Examples
    /// ```
    /// use ripple::adder::bit::Bit;
    ///
    /// assert_eq!(Bit::from_lsb(5), Bit::One);
    /// assert_eq!(Bit::from_lsb(4), Bit::Zero);
    /// ```
    pub fn from_lsb(word: Word) -> Bit {
        Bit::from(word & 1 == 1)
    }
}

impl From<bool> for Bit {
    fn from(set: bool) -> Bit {
        if set {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

/// The XOR gate.
impl BitXor for Bit {
    type Output = Bit;

    fn bitxor(self, rhs: Bit) -> Bit {
        Bit::from(self != rhs)
    }
}

/// The AND gate.
impl BitAnd for Bit {
    type Output = Bit;

    fn bitand(self, rhs: Bit) -> Bit {
        Bit::from(self == Bit::One && rhs == Bit::One)
    }
}

/// The OR gate.
impl BitOr for Bit {
    type Output = Bit;

    fn bitor(self, rhs: Bit) -> Bit {
        Bit::from(self == Bit::One || rhs == Bit::One)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// The sum and carry lines coming out of an adder stage, half or full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdderOutput {
    pub sum: Bit,
    pub carry: Bit,
}

/// A fixed-width binary number as an ordered sequence of bits, most
/// significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitString {
    bits: [Bit; WORD_BITS],
}

impl BitString {
    /// Wrap an already assembled array of bits, most significant bit first.
    ///
    /// # Examples
    /// ```
    /// use ripple::adder::bit::{Bit, BitString};
    /// use ripple::adder::WORD_BITS;
    ///
    /// let mut bits = [Bit::Zero; WORD_BITS];
    /// bits[WORD_BITS - 1] = Bit::One;
    ///
    /// assert_eq!(BitString::from_bits(bits).to_word(), 1);
    /// ```
    pub fn from_bits(bits: [Bit; WORD_BITS]) -> BitString {
        BitString { bits }
    }

    /// Extract the bit pattern of a word, walking it least significant bit
    /// first and filling the sequence back to front.
    ///
    /// # Examples
    /// ```
    /// use ripple::adder::bit::BitString;
    ///
    /// let bits = BitString::from_word(5);
    /// assert_eq!(bits.to_string(), "00000000000000000000000000000101");
    /// ```
    pub fn from_word(mut word: Word) -> BitString {
        let mut bits = [Bit::Zero; WORD_BITS];

        for slot in bits.iter_mut().rev() {
            *slot = Bit::from_lsb(word);
            word >>= 1;
        }

        BitString { bits }
    }

    /// Reinterpret the bit sequence as an unsigned word.
    ///
    /// # Examples
    /// ```
    /// use ripple::adder::bit::BitString;
    ///
    /// assert_eq!(BitString::from_word(0xDEAD_BEEF).to_word(), 0xDEAD_BEEF);
    /// ```
    pub fn to_word(&self) -> Word {
        self.bits.iter().fold(0, |word, &bit| (word << 1) | bit as Word)
    }

    /// The bit at a significance position, where position 0 is the least
    /// significant bit.
    ///
    /// # Panics
    /// Panics if `position` is `WORD_BITS` or greater.
    ///
    /// # Examples
    /// ```
    /// use ripple::adder::bit::{Bit, BitString};
    ///
    /// let bits = BitString::from_word(6);
    /// assert_eq!(bits.bit(0), Bit::Zero);
    /// assert_eq!(bits.bit(1), Bit::One);
    /// assert_eq!(bits.bit(2), Bit::One);
    /// ```
    pub fn bit(&self, position: usize) -> Bit {
        self.bits[WORD_BITS - 1 - position]
    }

    /// How many bits of the sequence are set.
    ///
    /// # Examples
    /// ```
    /// use ripple::adder::bit::BitString;
    ///
    /// assert_eq!(BitString::from_word(0b1011).count_ones(), 3);
    /// ```
    pub fn count_ones(&self) -> u32 {
        self.bits.iter().filter(|&&bit| bit == Bit::One).count() as u32
    }
}

impl Default for BitString {
    fn default() -> BitString {
        BitString {
            bits: [Bit::Zero; WORD_BITS],
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_extracts_the_low_bit() {
        assert_eq!(Bit::from_lsb(0), Bit::Zero);
        assert_eq!(Bit::from_lsb(1), Bit::One);
        assert_eq!(Bit::from_lsb(6), Bit::Zero);
        assert_eq!(Bit::from_lsb(7), Bit::One);
        assert_eq!(Bit::from_lsb(u32::MAX), Bit::One);
    }

    #[test]
    fn it_implements_the_gate_operations() {
        assert_eq!(Bit::Zero ^ Bit::Zero, Bit::Zero);
        assert_eq!(Bit::One ^ Bit::Zero, Bit::One);
        assert_eq!(Bit::One ^ Bit::One, Bit::Zero);

        assert_eq!(Bit::One & Bit::One, Bit::One);
        assert_eq!(Bit::One & Bit::Zero, Bit::Zero);
        assert_eq!(Bit::Zero & Bit::Zero, Bit::Zero);

        assert_eq!(Bit::Zero | Bit::Zero, Bit::Zero);
        assert_eq!(Bit::Zero | Bit::One, Bit::One);
        assert_eq!(Bit::One | Bit::One, Bit::One);
    }

    #[test]
    fn it_renders_a_word_msb_first() {
        assert_eq!(BitString::from_word(5).to_string(), "00000000000000000000000000000101");
        assert_eq!(BitString::from_word(0).to_string(), "00000000000000000000000000000000");
        assert_eq!(BitString::from_word(1 << 31).to_string(), "10000000000000000000000000000000");
        assert_eq!(BitString::from_word(u32::MAX).to_string(), "11111111111111111111111111111111");
    }

    #[test]
    fn it_always_renders_a_full_word_of_characters() {
        for word in [0, 1, 5, 1 << 31, u32::MAX] {
            assert_eq!(BitString::from_word(word).to_string().len(), WORD_BITS);
        }
    }

    #[test]
    fn it_round_trips_through_a_word() {
        for word in [0, 1, 5, 0xDEAD_BEEF, 1 << 31, u32::MAX] {
            assert_eq!(BitString::from_word(word).to_word(), word);
        }
    }

    #[test]
    fn it_indexes_bits_by_significance() {
        let bits = BitString::from_word(5);

        assert_eq!(bits.bit(0), Bit::One);
        assert_eq!(bits.bit(1), Bit::Zero);
        assert_eq!(bits.bit(2), Bit::One);
        assert_eq!(bits.bit(WORD_BITS - 1), Bit::Zero);
    }

    #[test]
    fn it_counts_set_bits() {
        assert_eq!(BitString::from_word(0).count_ones(), 0);
        assert_eq!(BitString::from_word(5).count_ones(), 2);
        assert_eq!(BitString::from_word(u32::MAX).count_ones(), 32);
        assert_eq!(BitString::default().count_ones(), 0);
    }
}
