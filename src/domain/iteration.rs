// ============================================================================
// Iteration Record
// One step of the digit-by-digit square root, kept for reporting
// ============================================================================

use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of one produced result digit.
///
/// The first record of a trace comes from the initial search over the
/// leading group; for it `guess == digit` and `epsilon == digit²`. Every
/// later record comes from the general step, where
/// `guess = 20 × answer + digit` and `epsilon = guess × digit`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Iteration {
    /// Group brought down for this step (0 for synthetic extra loops)
    pub group: u8,

    /// Result digit produced, 0-9
    pub digit: u8,

    /// Trial divisor with the digit appended
    #[cfg_attr(feature = "serde", serde(with = "biguint_string"))]
    pub guess: BigUint,

    /// Running dividend before subtraction
    #[cfg_attr(feature = "serde", serde(with = "biguint_string"))]
    pub start: BigUint,

    /// Amount subtracted, `guess × digit`
    #[cfg_attr(feature = "serde", serde(with = "biguint_string"))]
    pub epsilon: BigUint,

    /// Remainder carried to the next step
    #[cfg_attr(feature = "serde", serde(with = "biguint_string"))]
    pub partial: BigUint,
}

impl Iteration {
    /// Record for a step that brought down `group` and produced `digit`.
    pub fn new(group: u8, digit: u8, guess: BigUint, start: BigUint, partial: BigUint) -> Self {
        let epsilon = &guess * u32::from(digit);
        Self {
            group,
            digit,
            guess,
            start,
            epsilon,
            partial,
        }
    }
}

/// Big integers travel as decimal strings so JSON consumers keep every digit.
#[cfg(feature = "serde")]
pub(crate) mod biguint_string {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_is_guess_times_digit() {
        let it = Iteration::new(
            0,
            4,
            BigUint::from(24u32),
            BigUint::from(100u32),
            BigUint::from(4u32),
        );
        assert_eq!(it.epsilon, BigUint::from(96u32));
        assert_eq!(&it.start - &it.epsilon, it.partial);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_big_values_as_strings() {
        let it = Iteration::new(
            21,
            4,
            BigUint::from(4u32),
            BigUint::from(21u32),
            BigUint::from(5u32),
        );
        let json = serde_json::to_value(&it).unwrap();
        assert_eq!(json["guess"], "4");
        assert_eq!(json["epsilon"], "16");
        assert_eq!(json["digit"], 4);

        let back: Iteration = serde_json::from_value(json).unwrap();
        assert_eq!(back, it);
    }
}
