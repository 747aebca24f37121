// ============================================================================
// Numeric Module
// Exact arbitrary-precision decimal arithmetic
// ============================================================================
//
// This module provides:
// - ExactDecimal: big-integer mantissa with a decimal scale
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - Multiplication, addition and subtraction are exact
// - Division is the only rounding operation and takes an explicit precision

mod errors;
mod exact_decimal;

pub use errors::{NumericError, NumericResult};
pub use exact_decimal::{ExactDecimal, DEFAULT_DIVISION_PRECISION};
