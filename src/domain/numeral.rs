// ============================================================================
// Numeral
// Validated `<digits>.<digits>` input
// ============================================================================

use super::errors::{NumeralPart, SqrtError, SqrtResult};
use crate::numeric::ExactDecimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-negative decimal numeral with both a whole and a fractional part.
///
/// Both parts must be non-empty strings of ASCII digits. Write `0.5` rather
/// than `.5`, and `7.0` rather than `7`. With the `serde` feature it
/// round-trips as its string form and is re-validated on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Numeral {
    whole: String,
    fraction: String,
}

impl Numeral {
    /// Parse and validate a numeral. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// `MalformedNumeral` naming the offending part when the decimal point is
    /// missing or repeated, a part is empty, or a part holds a non-digit.
    pub fn parse(input: &str) -> SqrtResult<Self> {
        let input = input.trim();

        let (whole, fraction) = input
            .split_once('.')
            .ok_or_else(|| SqrtError::malformed(NumeralPart::Numeral, "has no decimal point"))?;

        if fraction.contains('.') {
            return Err(SqrtError::malformed(
                NumeralPart::Numeral,
                "has more than one decimal point",
            ));
        }

        validate_digits(whole, NumeralPart::Whole)?;
        validate_digits(fraction, NumeralPart::Fraction)?;

        Ok(Self {
            whole: whole.to_string(),
            fraction: fraction.to_string(),
        })
    }

    /// Digits before the decimal point
    #[inline]
    pub fn whole(&self) -> &str {
        &self.whole
    }

    /// Digits after the decimal point
    #[inline]
    pub fn fraction(&self) -> &str {
        &self.fraction
    }

    /// The exact value of the numeral.
    pub fn to_decimal(&self) -> SqrtResult<ExactDecimal> {
        Ok(self.to_string().parse()?)
    }
}

fn validate_digits(digits: &str, part: NumeralPart) -> SqrtResult<()> {
    if digits.is_empty() {
        return Err(SqrtError::malformed(part, "is empty"));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(SqrtError::malformed(
            part,
            format!("contains non-digit character '{}'", bad),
        ));
    }
    Ok(())
}

impl std::str::FromStr for Numeral {
    type Err = SqrtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Numeral {
    type Error = SqrtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Numeral> for String {
    fn from(numeral: Numeral) -> Self {
        numeral.to_string()
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.whole, self.fraction)
    }
}
