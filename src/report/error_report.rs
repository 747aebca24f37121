// ============================================================================
// Error Report
// Squares the estimate and expresses its relative error on a named scale
// ============================================================================

use crate::domain::SqrtResult;
use crate::engine::RootResult;
use crate::numeric::{ExactDecimal, NumericResult};
use num_bigint::BigUint;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Scale names, one per factor of a thousand
pub const GROUPINGS: [&str; 10] = [
    "units",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
];

/// Relative error expressed as "`parts` parts per `scale`"
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Magnitude {
    /// Leading digits of the ratio
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_display"))]
    pub parts: BigUint,
    /// Index into [`GROUPINGS`]; the scale is `1000^grouping`
    pub grouping: u64,
}

impl Magnitude {
    /// Derive the magnitude of a non-negative ratio.
    ///
    /// The ratio's leading-digit exponent is floor-divided into thousands:
    /// the quotient picks the scale and the remainder says how many leading
    /// digits form `parts`. `0.00012` is 120 parts per million.
    pub fn of_ratio(ratio: &ExactDecimal) -> Self {
        let adjusted = ratio.adjusted();
        let grouping = adjusted.div_euclid(3).unsigned_abs();
        let parts_size = adjusted.rem_euclid(3) as usize;

        // A short coefficient is padded, so 0.5 reads as 500 per thousand
        let digits = ratio.coefficient_digits();
        let take = (parts_size + 1).min(digits.len());
        let parts = format!("{:0<width$}", &digits[..take], width = parts_size + 1)
            .parse()
            .unwrap_or_default();

        Self { parts, grouping }
    }

    /// Scale name, or `None` past the end of [`GROUPINGS`]
    pub fn scale_name(&self) -> Option<&'static str> {
        usize::try_from(self.grouping)
            .ok()
            .and_then(|index| GROUPINGS.get(index))
            .copied()
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scale_name() {
            Some(name) => write!(f, "{} parts per {}", self.parts, name),
            None => write!(f, "{} parts per 10^{}", self.parts, self.grouping * 3),
        }
    }
}

/// How far the square of an estimate lands from the original value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ErrorReport {
    /// The estimate as printed, e.g. `3.` for a result with no fractional digits
    pub result: String,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_display"))]
    pub estimate: ExactDecimal,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_display"))]
    pub original: ExactDecimal,
    /// `estimate²`, exact
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_display"))]
    pub square: ExactDecimal,
    /// `|estimate² - original|`, exact
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_display"))]
    pub epsilon: ExactDecimal,
    /// `epsilon / original`; None when the original is zero
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_display_opt"))]
    pub ratio: Option<ExactDecimal>,
    pub magnitude: Option<Magnitude>,
}

impl ErrorReport {
    /// Compare `estimate²` against `original`.
    ///
    /// # Errors
    /// Propagates scale overflow from the exact multiplication.
    pub fn new(original: &ExactDecimal, estimate: &ExactDecimal) -> NumericResult<Self> {
        let square = estimate.checked_mul(estimate)?;
        let epsilon = (&square - original).abs();

        let ratio = if original.is_zero() {
            None
        } else {
            Some(epsilon.checked_div(original)?)
        };
        let magnitude = ratio.as_ref().map(Magnitude::of_ratio);

        tracing::debug!(%square, %epsilon, ratio = ?ratio, "error report");

        Ok(Self {
            result: estimate.to_string(),
            estimate: estimate.clone(),
            original: original.clone(),
            square,
            epsilon,
            ratio,
            magnitude,
        })
    }

    /// Report on an engine result, printed with its own decimal point.
    pub fn from_result(original: &ExactDecimal, result: &RootResult) -> SqrtResult<Self> {
        let mut report = Self::new(original, &result.estimate()?)?;
        report.result = result.result_string();
        Ok(report)
    }

    /// True when the estimate squares back to the original exactly
    pub fn is_exact(&self) -> bool {
        self.epsilon.is_zero()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final estimate = {}", self.result)?;
        writeln!(
            f,
            "The estimate**2 = {} - off by {}",
            self.square, self.epsilon
        )?;
        match (&self.ratio, &self.magnitude) {
            (Some(ratio), Some(magnitude)) => writeln!(f, "ratio = {} ( {} )", ratio, magnitude),
            _ => writeln!(f, "ratio = undefined ( original is zero )"),
        }
    }
}

#[cfg(feature = "serde")]
fn serialize_display<T: fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(feature = "serde")]
fn serialize_display_opt<T: fmt::Display, S: serde::Serializer>(
    value: &Option<T>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.collect_str(value),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> ExactDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_report_for_root_of_two() {
        let report = ErrorReport::new(&dec("2.00"), &dec("1.4142")).unwrap();
        assert_eq!(report.square.to_string(), "1.99996164");
        assert_eq!(report.epsilon.to_string(), "0.00003836");
        assert_eq!(report.ratio.as_ref().unwrap().to_string(), "0.00001918");

        let magnitude = report.magnitude.clone().unwrap();
        assert_eq!(magnitude.parts, BigUint::from(19u32));
        assert_eq!(magnitude.scale_name(), Some("million"));
        assert!(!report.is_exact());
    }

    #[test]
    fn test_report_display() {
        let report = ErrorReport::new(&dec("2.00"), &dec("1.4142")).unwrap();
        assert_eq!(
            report.to_string(),
            "Final estimate = 1.4142\n\
             The estimate**2 = 1.99996164 - off by 0.00003836\n\
             ratio = 0.00001918 ( 19 parts per million )\n"
        );
    }

    #[test]
    fn test_report_prints_result_string() {
        let result = crate::engine::compute_root("1234.0", -1).unwrap();
        assert_eq!(result.result_string(), "3.");

        let report = ErrorReport::from_result(&dec("1234.0"), &result).unwrap();
        assert_eq!(report.estimate.to_string(), "3");
        assert_eq!(report.square.to_string(), "9");
        assert!(report.to_string().starts_with("Final estimate = 3.\n"));
    }

    #[test]
    fn test_exact_root() {
        let report = ErrorReport::new(&dec("4.00"), &dec("2.00")).unwrap();
        assert!(report.is_exact());
        assert_eq!(report.square.to_string(), "4.0000");
        assert_eq!(report.ratio.as_ref().unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_zero_original_has_no_ratio() {
        let report = ErrorReport::new(&dec("0.00"), &dec("0.0000")).unwrap();
        assert!(report.ratio.is_none());
        assert!(report.magnitude.is_none());
        assert!(report.to_string().ends_with("ratio = undefined ( original is zero )\n"));
    }

    #[test]
    fn test_magnitude_groupings() {
        let m = Magnitude::of_ratio(&dec("0.0012"));
        assert_eq!(m.to_string(), "1 parts per thousand");

        let m = Magnitude::of_ratio(&dec("0.00012"));
        assert_eq!(m.to_string(), "120 parts per million");

        let m = Magnitude::of_ratio(&dec("15"));
        assert_eq!(m.to_string(), "15 parts per units");

        let m = Magnitude::of_ratio(&dec("0.5"));
        assert_eq!(m.to_string(), "500 parts per thousand");
    }

    #[test]
    fn test_magnitude_past_octillion() {
        let ratio = ExactDecimal::from_parts(3, 40);
        let m = Magnitude::of_ratio(&ratio);
        assert_eq!(m.scale_name(), None);
        assert_eq!(m.to_string(), "300 parts per 10^42");
    }
}
