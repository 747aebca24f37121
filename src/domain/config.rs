// ============================================================================
// Engine Configuration
// Parameters that bound the digit-by-digit root computation
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of extra loops run after the input groups are exhausted
pub const DEFAULT_EXTRA_LOOPS: i64 = 2;

/// Configuration for a [`DigitRootEngine`](crate::engine::DigitRootEngine)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Extra-loops counter for zero-group refinement steps.
    ///
    /// The counter is checked before every step and decremented each time a
    /// zero group is brought down, so `n >= 0` adds `n + 1` digits after the
    /// input groups and any negative value stops after the first digit.
    pub extra_loops: i64,

    /// Optional: Hard cap on the total number of iterations.
    /// None means the computation is bounded only by the input and extra loops
    pub max_iterations: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            extra_loops: DEFAULT_EXTRA_LOOPS,
            max_iterations: None,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with the given extra loops
    pub fn new(extra_loops: i64) -> Self {
        Self {
            extra_loops,
            ..Self::default()
        }
    }

    /// Builder method: Set the extra loops counter
    pub fn with_extra_loops(mut self, extra_loops: i64) -> Self {
        self.extra_loops = extra_loops;
        self
    }

    /// Builder method: Cap the number of iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == Some(0) {
            return Err("Iteration cap must allow at least the first digit".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl EngineConfig {
    /// Only the initial digit from the leading group
    pub fn single_step() -> Self {
        Self::new(-1)
    }

    /// Continue for `digits` refinement digits past the input groups.
    ///
    /// The counter cannot express zero refinement digits, so `extended(0)`
    /// behaves like [`single_step`](Self::single_step) and stops after the
    /// leading digit without consuming the remaining groups.
    pub fn extended(digits: u32) -> Self {
        Self::new(i64::from(digits) - 1)
    }
}
