// ============================================================================
// Engine Module
// Contains the digit-by-digit square root algorithm
// ============================================================================

mod root_engine;
mod root_result;

pub use root_engine::{compute_root, first_digit, next_digit, DigitRootEngine};
pub use root_result::RootResult;
