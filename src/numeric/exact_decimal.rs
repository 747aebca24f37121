// ============================================================================
// Exact Decimal
// Arbitrary-precision decimal arithmetic without floating point
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Significant digits kept by [`ExactDecimal::checked_div`].
pub const DEFAULT_DIVISION_PRECISION: u32 = 28;

/// Arbitrary-precision decimal number.
///
/// Internally stores `mantissa × 10^-scale`. The scale is the number of
/// fractional digits as written, so `"2.00"` keeps a scale of 2 and prints
/// back as `2.00`. Equality and ordering are numeric: `2.0 == 2.00`.
///
/// # Example
/// ```
/// use digit_sqrt::numeric::ExactDecimal;
///
/// let x: ExactDecimal = "1.41".parse().unwrap();
/// let square = x.checked_mul(&x).unwrap();
/// assert_eq!(square.to_string(), "1.9881");
/// ```
#[derive(Clone)]
pub struct ExactDecimal {
    mantissa: BigInt,
    scale: u32,
}

/// Compute 10^n as a big integer
fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// Number of decimal digits in the magnitude (zero counts as one digit)
fn decimal_len(n: &BigInt) -> u32 {
    n.magnitude().to_string().len() as u32
}

impl ExactDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw mantissa and scale (`mantissa × 10^-scale`).
    pub fn from_parts(mantissa: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            mantissa: mantissa.into(),
            scale,
        }
    }

    /// Create from an integer value.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::from_parts(value, 0)
    }

    /// Zero with no fractional digits.
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unscaled integer value.
    #[inline]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Number of fractional digits.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// Get absolute value.
    pub fn abs(&self) -> Self {
        Self::from_parts(self.mantissa.abs(), self.scale)
    }

    /// Decimal digits of the coefficient, without sign or point.
    pub fn coefficient_digits(&self) -> String {
        self.mantissa.magnitude().to_string()
    }

    /// Exponent of the most significant digit.
    ///
    /// `123.45` gives 2, `0.00012` gives -4. A zero coefficient counts as a
    /// single digit, so `0.00` gives -2.
    pub fn adjusted(&self) -> i64 {
        i64::from(decimal_len(&self.mantissa)) - 1 - i64::from(self.scale)
    }

    /// Mantissa rescaled to a larger scale.
    fn mantissa_at(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);
        &self.mantissa * pow10(scale - self.scale)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact multiplication.
    ///
    /// # Errors
    /// Returns `ScaleOverflow` if the combined scale does not fit in `u32`.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        let scale = self
            .scale
            .checked_add(rhs.scale)
            .ok_or(NumericError::ScaleOverflow)?;
        Ok(Self::from_parts(&self.mantissa * &rhs.mantissa, scale))
    }

    /// Division rounded to [`DEFAULT_DIVISION_PRECISION`] significant digits.
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_div_significant(rhs, DEFAULT_DIVISION_PRECISION)
    }

    /// Division rounded half-even to `digits` significant digits.
    ///
    /// Exact quotients are returned with trailing zeros removed down to the
    /// natural scale `self.scale - rhs.scale`, so `0.0002 / 4.00` yields
    /// `0.00005` rather than a padded coefficient.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `InvalidInput` if `digits` is zero
    pub fn checked_div_significant(&self, rhs: &Self, digits: u32) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if digits == 0 {
            return Err(NumericError::InvalidInput);
        }

        let ideal_exponent = i64::from(rhs.scale) - i64::from(self.scale);
        if self.is_zero() {
            return Self::from_exponent(BigInt::zero(), ideal_exponent);
        }

        let negative = self.is_negative() != rhs.is_negative();
        let numerator = self.mantissa.abs();
        let denominator = rhs.mantissa.abs();

        // Scale the numerator so the integer quotient carries at least `digits` digits
        let shift = (i64::from(digits) + i64::from(decimal_len(&denominator))
            - i64::from(decimal_len(&numerator))
            + 1)
        .max(0) as u32;
        let scaled = numerator * pow10(shift);
        let quotient = &scaled / &denominator;
        let remainder = &scaled % &denominator;

        let excess = decimal_len(&quotient).saturating_sub(digits);
        let divisor = pow10(excess);
        let mut coefficient = &quotient / &divisor;
        let dropped = &quotient % &divisor;

        // Compare the discarded fraction (dropped*den + rem) / (10^excess * den) against one half
        let discarded = dropped * &denominator + &remainder;
        let exact = discarded.is_zero();
        let round_up = match (discarded * 2u32).cmp(&(&divisor * &denominator)) {
            Ordering::Greater => true,
            Ordering::Equal => (&coefficient % 2u32) == BigInt::from(1u32),
            Ordering::Less => false,
        };

        let mut exponent = i64::from(excess) - i64::from(shift) + ideal_exponent;
        if round_up {
            coefficient += 1u32;
            if decimal_len(&coefficient) > digits {
                coefficient /= 10u32;
                exponent += 1;
            }
        }

        if exact {
            let ten = BigInt::from(10u32);
            while exponent < ideal_exponent && (&coefficient % &ten).is_zero() {
                coefficient /= 10u32;
                exponent += 1;
            }
        }

        if negative {
            coefficient = -coefficient;
        }
        Self::from_exponent(coefficient, exponent)
    }

    /// Build `coefficient × 10^exponent`, expanding positive exponents.
    fn from_exponent(coefficient: BigInt, exponent: i64) -> NumericResult<Self> {
        if exponent >= 0 {
            let shift = u32::try_from(exponent).map_err(|_| NumericError::ScaleOverflow)?;
            Ok(Self::from_parts(coefficient * pow10(shift), 0))
        } else {
            let scale = u32::try_from(-exponent).map_err(|_| NumericError::ScaleOverflow)?;
            Ok(Self::from_parts(coefficient, scale))
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for ExactDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for ExactDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactDecimal {}

impl PartialOrd for ExactDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.mantissa_at(scale).cmp(&other.mantissa_at(scale))
    }
}

impl Neg for ExactDecimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(-self.mantissa, self.scale)
    }
}

// Addition and subtraction are exact and cannot fail
impl Add for &ExactDecimal {
    type Output = ExactDecimal;

    fn add(self, rhs: Self) -> Self::Output {
        let scale = self.scale.max(rhs.scale);
        ExactDecimal::from_parts(self.mantissa_at(scale) + rhs.mantissa_at(scale), scale)
    }
}

impl Sub for &ExactDecimal {
    type Output = ExactDecimal;

    fn sub(self, rhs: Self) -> Self::Output {
        let scale = self.scale.max(rhs.scale);
        ExactDecimal::from_parts(self.mantissa_at(scale) - rhs.mantissa_at(scale), scale)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExactDecimal({}, scale={})", self, self.scale)
    }
}

impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient_digits();
        let sign = if self.mantissa.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };

        if self.scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        let scale = self.scale as usize;
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for ExactDecimal {
    type Err = NumericError;

    /// Parse from a plain decimal string.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "123.450" -> 123.450 (scale 3)
    /// - "-.5" -> -0.5
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !int_str
            .chars()
            .chain(frac_str.chars())
            .all(|c| c.is_ascii_digit())
        {
            return Err(NumericError::InvalidInput);
        }

        let digits = format!("{}{}", int_str, frac_str);
        let mut mantissa: BigInt = digits.parse().map_err(|_| NumericError::InvalidInput)?;
        if is_negative {
            mantissa = -mantissa;
        }
        let scale = u32::try_from(frac_str.len()).map_err(|_| NumericError::ScaleOverflow)?;

        Ok(Self::from_parts(mantissa, scale))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> ExactDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_str() {
        let x = dec("123.450");
        assert_eq!(x.mantissa(), &BigInt::from(123450));
        assert_eq!(x.scale(), 3);

        let y = dec("-0.001");
        assert!(y.is_negative());
        assert_eq!(y.scale(), 3);

        let z = dec("42");
        assert_eq!(z.scale(), 0);
        assert_eq!(z.to_string(), "42");
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!("".parse::<ExactDecimal>(), Err(NumericError::InvalidInput));
        assert_eq!(".".parse::<ExactDecimal>(), Err(NumericError::InvalidInput));
        assert_eq!("1e5".parse::<ExactDecimal>(), Err(NumericError::InvalidInput));
        assert_eq!("1.2.3".parse::<ExactDecimal>(), Err(NumericError::InvalidInput));
        assert_eq!("+1".parse::<ExactDecimal>(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_display() {
        assert_eq!(dec("0.05").to_string(), "0.05");
        assert_eq!(dec("-0.05").to_string(), "-0.05");
        assert_eq!(dec("12.3400").to_string(), "12.3400");
        assert_eq!(ExactDecimal::from_parts(5, 4).to_string(), "0.0005");
    }

    #[test]
    fn test_checked_mul_keeps_scale() {
        let x = dec("2.00");
        assert_eq!(x.checked_mul(&x).unwrap().to_string(), "4.0000");

        let y = dec("1.4142");
        assert_eq!(y.checked_mul(&y).unwrap().to_string(), "1.99996164");
    }

    #[test]
    fn test_add_sub_align_scales() {
        let a = dec("4.0000");
        let b = dec("4.00");
        assert_eq!((&a - &b).to_string(), "0.0000");
        assert_eq!((&dec("1.5") + &dec("0.25")).to_string(), "1.75");
        assert_eq!((&dec("1.99996164") - &dec("2.00")).to_string(), "-0.00003836");
    }

    #[test]
    fn test_numeric_equality() {
        assert_eq!(dec("2.0"), dec("2.00"));
        assert!(dec("1.41") < dec("1.5"));
        assert!(dec("-1") < dec("0.0"));
    }

    #[test]
    fn test_abs_and_negation() {
        let x = dec("-3.25");
        assert_eq!(x.abs().to_string(), "3.25");
        assert_eq!((-x).to_string(), "3.25");
    }

    #[test]
    fn test_adjusted() {
        assert_eq!(dec("123.45").adjusted(), 2);
        assert_eq!(dec("0.00012").adjusted(), -4);
        assert_eq!(dec("1").adjusted(), 0);
        assert_eq!(dec("0.00").adjusted(), -2);
    }

    #[test]
    fn test_division_exact_strips_to_natural_scale() {
        let q = dec("0.0002").checked_div(&dec("4.00")).unwrap();
        assert_eq!(q.to_string(), "0.00005");

        let q = dec("10").checked_div(&dec("4")).unwrap();
        assert_eq!(q.to_string(), "2.5");
    }

    #[test]
    fn test_division_rounds_to_significant_digits() {
        let q = dec("1").checked_div_significant(&dec("3"), 5).unwrap();
        assert_eq!(q.to_string(), "0.33333");

        let q = dec("2").checked_div_significant(&dec("3"), 5).unwrap();
        assert_eq!(q.to_string(), "0.66667");

        let q = dec("0.00003836").checked_div(&dec("2.00")).unwrap();
        assert_eq!(q.to_string(), "0.00001918");
    }

    #[test]
    fn test_division_half_even() {
        // 0.125 -> 0.12 and 0.375 -> 0.38 at two significant digits
        let q = dec("1").checked_div_significant(&dec("8"), 2).unwrap();
        assert_eq!(q.to_string(), "0.12");
        let q = dec("3").checked_div_significant(&dec("8"), 2).unwrap();
        assert_eq!(q.to_string(), "0.38");
    }

    #[test]
    fn test_division_carry_into_new_digit() {
        let q = dec("0.99999").checked_div_significant(&dec("1"), 3).unwrap();
        assert_eq!(q, dec("1.00"));
        assert_eq!(q.coefficient_digits().len(), 3);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            dec("1").checked_div(&dec("0.0")),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_zero_operations() {
        let zero = ExactDecimal::zero();
        let one = ExactDecimal::from_integer(1);
        assert_eq!(&zero + &one, one);
        assert!((&one - &one).is_zero());
        assert!(zero.checked_mul(&one).unwrap().is_zero());
        assert!(zero.checked_div(&one).unwrap().is_zero());
    }
}
