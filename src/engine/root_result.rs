// ============================================================================
// Root Result
// Digits, decimal point position and iteration trace of one computation
// ============================================================================

use crate::domain::{Iteration, SqrtResult};
use crate::numeric::ExactDecimal;
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use crate::domain::SqrtError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output of [`DigitRootEngine::compute`](super::DigitRootEngine::compute).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRootResult"))]
pub struct RootResult {
    digits: Vec<u8>,
    answer_decimal_index: usize,
    iterations: Vec<Iteration>,
}

/// Unchecked wire shape of a [`RootResult`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRootResult {
    digits: Vec<u8>,
    answer_decimal_index: usize,
    iterations: Vec<Iteration>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRootResult> for RootResult {
    type Error = SqrtError;

    fn try_from(raw: RawRootResult) -> Result<Self, Self::Error> {
        if raw.digits.is_empty() {
            return Err(SqrtError::InvalidRecord("result has no digits".to_string()));
        }
        if raw.digits.len() != raw.iterations.len() {
            return Err(SqrtError::InvalidRecord(format!(
                "{} digits but {} iterations",
                raw.digits.len(),
                raw.iterations.len()
            )));
        }
        let traced = raw.digits.iter().zip(&raw.iterations);
        if let Some((&digit, _)) = traced.clone().find(|&(&d, _)| d > 9) {
            return Err(SqrtError::InvalidRecord(format!("digit {} exceeds 9", digit)));
        }
        if traced.clone().any(|(&d, it)| d != it.digit) {
            return Err(SqrtError::InvalidRecord(
                "digits disagree with the iteration trace".to_string(),
            ));
        }

        Ok(Self::new(raw.digits, raw.answer_decimal_index, raw.iterations))
    }
}

impl RootResult {
    pub(crate) fn new(digits: Vec<u8>, answer_decimal_index: usize, iterations: Vec<Iteration>) -> Self {
        debug_assert_eq!(digits.len(), iterations.len());
        Self {
            digits,
            answer_decimal_index,
            iterations,
        }
    }

    /// Produced digits, most significant first
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits left of the decimal point
    #[inline]
    pub fn answer_decimal_index(&self) -> usize {
        self.answer_decimal_index
    }

    /// Iteration trace, one record per digit
    #[inline]
    pub fn iterations(&self) -> &[Iteration] {
        &self.iterations
    }

    /// The digits as a plain integer, ignoring the decimal point
    pub fn answer(&self) -> BigUint {
        self.digits
            .iter()
            .fold(BigUint::from(0u32), |acc, &d| acc * 10u32 + u32::from(d))
    }

    /// Remainder left after the last iteration
    pub fn final_partial(&self) -> Option<&BigUint> {
        self.iterations.last().map(|it| &it.partial)
    }

    /// Digits concatenated in order, leading zeros included.
    pub fn digit_string(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// The result with its decimal point, e.g. `1.4142`.
    ///
    /// The point follows the first `answer_decimal_index` digits. If fewer
    /// digits were produced the point trails them, as in `12.`.
    pub fn result_string(&self) -> String {
        let digits = self.digit_string();
        let split = self.answer_decimal_index.min(digits.len());
        format!("{}.{}", &digits[..split], &digits[split..])
    }

    /// The result as an exact decimal
    pub fn estimate(&self) -> SqrtResult<ExactDecimal> {
        Ok(self.result_string().parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_digits(digits: &[u8], index: usize) -> RootResult {
        let iterations = digits
            .iter()
            .map(|&d| {
                Iteration::new(
                    0,
                    d,
                    BigUint::from(d),
                    BigUint::from(0u32),
                    BigUint::from(0u32),
                )
            })
            .collect();
        RootResult::new(digits.to_vec(), index, iterations)
    }

    #[test]
    fn test_result_string_inserts_point() {
        let r = result_with_digits(&[1, 4, 1, 4, 2], 1);
        assert_eq!(r.result_string(), "1.4142");
        assert_eq!(r.answer(), BigUint::from(14142u32));
    }

    #[test]
    fn test_leading_zero_digits_are_kept() {
        let r = result_with_digits(&[0, 4, 9], 1);
        assert_eq!(r.digit_string(), "049");
        assert_eq!(r.result_string(), "0.49");
    }

    #[test]
    fn test_point_trails_short_results() {
        let r = result_with_digits(&[1, 2], 3);
        assert_eq!(r.result_string(), "12.");
        assert_eq!(r.estimate().unwrap().to_string(), "12");
    }

    #[test]
    fn test_estimate_is_exact() {
        let r = result_with_digits(&[2, 0, 0], 1);
        let estimate = r.estimate().unwrap();
        assert_eq!(estimate.to_string(), "2.00");
        assert_eq!(estimate.scale(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_round_trip() {
        let r = result_with_digits(&[1, 4, 1], 1);
        let json = serde_json::to_string(&r).unwrap();
        let back: RootResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
        assert_eq!(back.result_string(), "1.41");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_bad_digits() {
        let mut value = serde_json::to_value(result_with_digits(&[1, 4], 1)).unwrap();
        value["digits"][1] = serde_json::json!(208);
        let err = serde_json::from_value::<RootResult>(value).unwrap_err();
        assert!(err.to_string().contains("digit 208 exceeds 9"), "{}", err);

        let mut value = serde_json::to_value(result_with_digits(&[1, 4], 1)).unwrap();
        value["digits"] = serde_json::json!([1]);
        assert!(serde_json::from_value::<RootResult>(value).is_err());

        let mut value = serde_json::to_value(result_with_digits(&[1, 4], 1)).unwrap();
        value["digits"] = serde_json::json!([1, 5]);
        assert!(serde_json::from_value::<RootResult>(value).is_err());
    }
}
