use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Median and mean of one trial sequence, at report precision.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub median: f64,
    pub mean: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SlotMachineReport {
    /// Rounds survived per trial, in trial order.
    pub rounds_played: Vec<u64>,
    /// Fraction of paying rounds per trial, in trial order.
    pub win_ratios: Vec<f64>,
    pub rounds_summary: SummaryStats,
    pub win_ratio_summary: SummaryStats,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BirthdayReport {
    /// Collision probability indexed by group size, 0..=365.
    pub probability_curve: Vec<f64>,
    pub smallest_n: u32,
    pub proportion: f64,
    /// Draws needed to cover every day, per trial.
    pub fills: Vec<u64>,
    pub fill_summary: SummaryStats,
}

/// Everything one invocation produced, ready for serialization.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub simulations: u32,
    pub initial_balance: i64,
    pub slot_machine: SlotMachineReport,
    pub birthday: BirthdayReport,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("initial balance must be positive, got {0}")]
    NonPositiveBalance(i64),
    #[error("simulation count must be at least 1")]
    ZeroSimulations,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reject parameters outside the supported domain before any trial runs.
pub fn validate_run(simulations: u32, initial_balance: i64) -> ConfigResult<()> {
    if simulations == 0 {
        return Err(ConfigError::ZeroSimulations);
    }
    if initial_balance <= 0 {
        return Err(ConfigError::NonPositiveBalance(initial_balance));
    }
    Ok(())
}
