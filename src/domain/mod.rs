// ============================================================================
// Domain Models Module
// Input numerals, digit groups, iteration records and configuration
// ============================================================================

pub mod config;
pub mod errors;
pub mod groups;
pub mod iteration;
pub mod numeral;

pub use config::{EngineConfig, DEFAULT_EXTRA_LOOPS};
pub use errors::{NumeralPart, SqrtError, SqrtResult};
pub use groups::GroupSequence;
pub use iteration::Iteration;
pub use numeral::Numeral;
