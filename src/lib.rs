//! # Ripple
//! A simulated ripple-carry adder: it adds integers the way hardware does,
//! one bit at a time through half-adder and full-adder logic, instead of
//! using native arithmetic.

/// The adder module contains all the logic for the bit-serial adder.
pub mod adder;

#[cfg(test)]
mod tests {
    use crate::adder;

    #[test]
    fn it_works() {
        let sum = adder::add(2, 2);

        assert_eq!(sum.to_word(), 4);
        assert!(adder::sum_report(2, 2).contains("Decimal result: 4"));
    }
}
