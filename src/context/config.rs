// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use crate::error::SolveError;
use crate::geometry::constants::{DEFAULT_DEFICIT_WEIGHT, DEFAULT_SLOTS_WEIGHT};

/// Tunable parameters of a search.
///
/// The weights only change the order faces are tried in, and so the step
/// count; they never change whether a solution is found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Divisor applied to a face's summed vertex deficit when scoring it.
    pub deficit_weight: f64,

    /// Divisor applied to a face's summed open vertex slots when scoring it.
    pub slots_weight: f64,

    /// Give up after this many search steps. `None` searches exhaustively.
    pub step_limit: Option<u64>,

    /// Log a summary of each solve to stderr.
    pub verbose: bool,
}

impl SearchConfig {
    pub fn with_weights(mut self, deficit_weight: f64, slots_weight: f64) -> Self {
        self.deficit_weight = deficit_weight;
        self.slots_weight = slots_weight;
        self
    }

    pub fn with_step_limit(mut self, step_limit: Option<u64>) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Reject weights that would make face scores meaningless.
    pub fn validate(&self) -> Result<(), SolveError> {
        for (name, value) in [
            ("deficit_weight", self.deficit_weight),
            ("slots_weight", self.slots_weight),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SolveError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            deficit_weight: DEFAULT_DEFICIT_WEIGHT,
            slots_weight: DEFAULT_SLOTS_WEIGHT,
            step_limit: None,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.deficit_weight, 12.0);
        assert_eq!(config.slots_weight, 5.0);
        assert_eq!(config.step_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_weights() {
        let config = SearchConfig::default().with_weights(0.0, 5.0);
        assert!(matches!(
            config.validate(),
            Err(SolveError::InvalidWeight {
                name: "deficit_weight",
                ..
            })
        ));
        let config = SearchConfig::default().with_weights(12.0, f64::NAN);
        assert!(config.validate().is_err());
    }
}
