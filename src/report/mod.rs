// ============================================================================
// Report Module
// Consumers of a finished root computation: error ratio and ASCII diagram
// ============================================================================

mod error_report;
mod long_division;

pub use error_report::{ErrorReport, Magnitude, GROUPINGS};
pub use long_division::LongDivisionDiagram;
