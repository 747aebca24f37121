// ============================================================================
// Digit Square Root Library
// Arbitrary-precision square roots by the digit-by-digit method
// ============================================================================

//! # Digit Sqrt
//!
//! Computes decimal square roots the way they are done by hand: the input is
//! split into two-digit groups and one result digit is produced per group,
//! with every intermediate value kept as an exact big integer.
//!
//! ## Features
//!
//! - **Exact arithmetic** - no floating point anywhere in the computation
//! - **Full iteration trace** - every digit comes with its dividend, trial
//!   divisor, subtracted amount and remainder
//! - **Pluggable trace handlers** for logging or collecting iterations live
//! - **Reports** - relative error of the estimate and an ASCII long-division
//!   diagram
//!
//! ## Example
//!
//! ```rust
//! use digit_sqrt::prelude::*;
//!
//! // Group the numeral: "2.00" becomes [2, 0]
//! let groups = GroupSequence::parse("2.00").unwrap();
//!
//! // Two extra loops past the input groups
//! let engine = DigitRootEngine::new(EngineConfig::new(2));
//! let result = engine.compute_with(&groups, &LoggingTraceHandler).unwrap();
//! assert_eq!(result.result_string(), "1.4142");
//!
//! // How close is it?
//! let original = Numeral::parse("2.00").unwrap().to_decimal().unwrap();
//! let report = ErrorReport::from_result(&original, &result).unwrap();
//! println!("{}", report);
//! println!("{}", LongDivisionDiagram::new(&result, "2.00"));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod report;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        EngineConfig, GroupSequence, Iteration, Numeral, NumeralPart, SqrtError, SqrtResult,
        DEFAULT_EXTRA_LOOPS,
    };
    pub use crate::engine::{compute_root, DigitRootEngine, RootResult};
    pub use crate::interfaces::{
        CollectingTraceHandler, LoggingTraceHandler, NoOpTraceHandler, TraceHandler,
    };
    pub use crate::numeric::ExactDecimal;
    pub use crate::report::{ErrorReport, LongDivisionDiagram, Magnitude};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_root() {
        let numeral = Numeral::parse("123.4").unwrap();
        let groups = GroupSequence::from_numeral(&numeral).unwrap();
        assert_eq!(groups.groups(), &[1, 23, 40]);

        let result = DigitRootEngine::new(EngineConfig::new(2))
            .compute(&groups)
            .unwrap();

        // sqrt(123.4) = 11.1085...
        assert_eq!(result.result_string(), "11.1085");

        let report = ErrorReport::from_result(&numeral.to_decimal().unwrap(), &result).unwrap();
        assert_eq!(report.result, "11.1085");
        assert_eq!(report.square.to_string(), "123.39877225");
        assert!(report.square < report.original);

        let diagram = LongDivisionDiagram::new(&result, numeral.to_string());
        assert_eq!(diagram.lines().len(), 3 * result.iterations().len() + 3);
    }

    #[test]
    fn test_monotonic_in_extra_loops() {
        let short = compute_root("7.0", 1).unwrap();
        let long = compute_root("7.0", 6).unwrap();
        assert!(long.digits().starts_with(short.digits()));
        assert_eq!(long.digits().len(), short.digits().len() + 5);
    }

    #[test]
    fn test_malformed_numeral_is_typed() {
        let err = compute_root("12", 2).unwrap_err();
        assert!(matches!(
            err,
            SqrtError::MalformedNumeral {
                part: NumeralPart::Numeral,
                ..
            }
        ));
        assert!(err.to_string().contains("decimal point"));
    }
}
