// ============================================================================
// Digit-by-Digit Root Engine
// Long-division square root over two-digit groups, in exact integers
// ============================================================================

use super::root_result::RootResult;
use crate::domain::{EngineConfig, GroupSequence, Iteration, SqrtError, SqrtResult};
use crate::interfaces::{NoOpTraceHandler, TraceHandler};
use num_bigint::BigUint;

/// Largest `d` in `1..=9` with `d * d <= group`, or 0 when `group` is 0.
///
/// Seeds the first result digit from the leading group.
pub fn first_digit(group: u8) -> u8 {
    (1..=9u8).take_while(|d| d * d <= group).last().unwrap_or(0)
}

/// Largest `d` in `0..=9` with `(kernel + d) * d < start`.
///
/// The comparison is strict. When nothing qualifies (a zero dividend) the
/// digit is 0, whose product is 0 and leaves the dividend untouched.
pub fn next_digit(kernel: &BigUint, start: &BigUint) -> u8 {
    (0..=9u8)
        .rev()
        .find(|&d| (kernel + u32::from(d)) * u32::from(d) < *start)
        .unwrap_or(0)
}

/// Digit-by-digit square root engine
///
/// Carries the digits produced so far (`answer`) and the running remainder
/// (`partial`) from step to step. Each step brings down the next group,
/// doubles the answer into a trial divisor and picks the next digit.
///
/// # Example
/// ```
/// use digit_sqrt::prelude::*;
///
/// let groups = GroupSequence::parse("2.00").unwrap();
/// let engine = DigitRootEngine::new(EngineConfig::new(2));
/// let result = engine.compute(&groups).unwrap();
/// assert_eq!(result.result_string(), "1.4142");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DigitRootEngine {
    config: EngineConfig,
}

impl DigitRootEngine {
    /// Create a new engine
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the root of `groups` without observing the trace
    pub fn compute(&self, groups: &GroupSequence) -> SqrtResult<RootResult> {
        self.compute_with(groups, &NoOpTraceHandler)
    }

    /// Compute the root of `groups`, passing every iteration to `handler`
    /// as soon as it is produced.
    ///
    /// # Errors
    /// - `InvalidConfig` if the configuration does not validate
    /// - `EmptyGroupSequence` if there is no leading group
    pub fn compute_with(
        &self,
        groups: &GroupSequence,
        handler: &dyn TraceHandler,
    ) -> SqrtResult<RootResult> {
        self.config.validate().map_err(SqrtError::InvalidConfig)?;

        let (&leading, rest) = groups
            .groups()
            .split_first()
            .ok_or(SqrtError::EmptyGroupSequence)?;

        let mut digits = Vec::with_capacity(groups.len());
        let mut iterations = Vec::with_capacity(groups.len());

        // Initial digit: bounded search over the leading group
        let digit = first_digit(leading);
        let start = BigUint::from(leading);
        let mut partial = &start - BigUint::from(digit * digit);
        let mut answer = BigUint::from(digit);

        let initial = Iteration::new(leading, digit, BigUint::from(digit), start, partial.clone());
        handler.on_iteration(0, &initial);
        digits.push(digit);
        iterations.push(initial);

        let mut remaining = rest.iter().copied();
        let mut extra_loops = self.config.extra_loops;

        loop {
            if extra_loops < 0 {
                break;
            }
            if let Some(cap) = self.config.max_iterations {
                if iterations.len() >= cap {
                    tracing::debug!(cap, "iteration cap reached");
                    break;
                }
            }

            let group = match remaining.next() {
                Some(group) => group,
                None => {
                    extra_loops -= 1;
                    0
                },
            };

            let start = &partial * 100u32 + u32::from(group);
            let kernel = &answer * 20u32;
            let digit = next_digit(&kernel, &start);
            let guess = kernel + u32::from(digit);

            partial = &start - &guess * u32::from(digit);
            answer = answer * 10u32 + u32::from(digit);

            let iteration = Iteration::new(group, digit, guess, start, partial.clone());
            handler.on_iteration(iterations.len(), &iteration);
            digits.push(digit);
            iterations.push(iteration);
        }

        handler.on_complete(&digits);

        Ok(RootResult::new(
            digits,
            groups.answer_decimal_index(),
            iterations,
        ))
    }
}

/// Group `numeral` and compute its root with `extra_loops` refinement loops.
///
/// # Example
/// ```
/// use digit_sqrt::engine::compute_root;
///
/// let result = compute_root("4.00", 0).unwrap();
/// assert_eq!(result.result_string(), "2.00");
/// ```
pub fn compute_root(numeral: &str, extra_loops: i64) -> SqrtResult<RootResult> {
    let groups = GroupSequence::parse(numeral)?;
    DigitRootEngine::new(EngineConfig::new(extra_loops)).compute(&groups)
}
