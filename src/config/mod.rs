//! Library configuration.
//!
//! Rates, the default assignment mode and the cosmetic solve delay, loaded
//! from JSON. Missing fields fall back to their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::assignment::AssignmentMode;
use crate::cost::CostModel;
use crate::models::CostRates;

/// Default delay shown before presenting a solve result.
pub const DEFAULT_SOLVE_DELAY_MS: u64 = 800;

fn default_solve_delay_ms() -> u64 {
    DEFAULT_SOLVE_DELAY_MS
}

/// Settings shared by the bindings and the deferred solve wrapper.
///
/// # Examples
///
/// ```
/// use u_ewaste::assignment::AssignmentMode;
/// use u_ewaste::config::Config;
///
/// let cfg = Config::from_json(r#"{"assignmentMode": "hungarian"}"#).unwrap();
/// assert_eq!(cfg.assignment_mode, AssignmentMode::Hungarian);
/// assert_eq!(cfg.rates.collection, 5.0);
/// assert_eq!(cfg.solve_delay_ms, 800);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Unit rates for the cost model.
    #[serde(default)]
    pub rates: CostRates,
    /// Strategy used when a caller doesn't pick one.
    #[serde(default)]
    pub assignment_mode: AssignmentMode,
    /// Cosmetic delay before a deferred solve runs, in milliseconds.
    #[serde(default = "default_solve_delay_ms")]
    pub solve_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates: CostRates::default(),
            assignment_mode: AssignmentMode::default(),
            solve_delay_ms: DEFAULT_SOLVE_DELAY_MS,
        }
    }
}

impl Config {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Cost model using the configured rates.
    pub fn cost_model(&self) -> CostModel {
        CostModel::new(self.rates)
    }

    /// The configured delay as a [`Duration`].
    pub fn solve_delay(&self) -> Duration {
        Duration::from_millis(self.solve_delay_ms)
    }
}
