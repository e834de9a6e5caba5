use crate::bankroll::{self, TrialResult};
use crate::birthday::{self, DAYS_IN_YEAR};
use crate::paytable::Paytable;
use crate::stats;
use rand::Rng;

pub const DEFAULT_SIMULATIONS: u32 = 1000;
pub const DEFAULT_BALANCE: i64 = 10;

// Fixed reporting bounds for the proportion metric. They are not derived
// from the curve; the formula is kept literally.
pub const PROPORTION_LEFT_BOUND: f64 = 10.0;
pub const PROPORTION_RIGHT_BOUND: f64 = 50.0;

/// Median and mean of one trial sequence, already at report precision.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub median: f64,
    pub mean: f64,
}

impl Summary {
    fn at_precision(values: &[f64], decimals: u32) -> Self {
        Self {
            median: stats::round_to(stats::median(values), decimals),
            mean: stats::round_to(stats::mean(values), decimals),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlotExperimentParams {
    pub simulations: u32,
    pub initial_balance: i64,
    pub paytable: Paytable,
}

impl Default for SlotExperimentParams {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
            initial_balance: DEFAULT_BALANCE,
            paytable: Paytable::classic(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlotExperimentOutcome {
    pub rounds_played: Vec<u64>,
    pub win_ratios: Vec<f64>,
    /// Rounds summary at 1 decimal.
    pub rounds_summary: Summary,
    /// Win ratio summary at 3 decimals.
    pub win_ratio_summary: Summary,
}

/// Run the bankroll trial `simulations` times and aggregate the results.
pub fn run_slot_experiment<R: Rng>(
    rng: &mut R,
    params: &SlotExperimentParams,
) -> SlotExperimentOutcome {
    let trials = params.simulations as usize;
    let mut rounds_played = Vec::with_capacity(trials);
    let mut win_ratios = Vec::with_capacity(trials);

    for _ in 0..params.simulations {
        let TrialResult {
            rounds_played: rounds,
            win_ratio,
        } = bankroll::play(rng, &params.paytable, params.initial_balance);
        rounds_played.push(rounds);
        win_ratios.push(win_ratio);
    }

    let rounds_values: Vec<f64> = rounds_played.iter().map(|&r| r as f64).collect();
    SlotExperimentOutcome {
        rounds_summary: Summary::at_precision(&rounds_values, 1),
        win_ratio_summary: Summary::at_precision(&win_ratios, 3),
        rounds_played,
        win_ratios,
    }
}

#[derive(Debug, Clone)]
pub struct BirthdayExperimentParams {
    pub simulations: u32,
}

impl Default for BirthdayExperimentParams {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BirthdayExperimentOutcome {
    /// Collision probability indexed by group size, 0..=365.
    pub probability_curve: Vec<f64>,
    /// Smallest group size whose collision probability exceeds 0.5.
    pub smallest_n: u32,
    /// (right bound - smallest_n) / (right bound - left bound).
    pub proportion: f64,
    pub fills: Vec<u64>,
    /// Fill summary rounded to whole draws.
    pub fill_summary: Summary,
}

/// Collision probability for every group size from 0 through 365.
pub fn probability_curve() -> Vec<f64> {
    (0..=DAYS_IN_YEAR as u32)
        .map(birthday::shared_birthday_probability)
        .collect()
}

/// First index whose probability is strictly above one half.
pub fn smallest_group_over_half(curve: &[f64]) -> Option<u32> {
    curve.iter().position(|&p| p > 0.5).map(|i| i as u32)
}

/// Build the probability curve, derive its threshold statistics, then run
/// the coverage simulation `simulations` times and aggregate the results.
pub fn run_birthday_experiment<R: Rng>(
    rng: &mut R,
    params: &BirthdayExperimentParams,
) -> BirthdayExperimentOutcome {
    let curve = probability_curve();
    let smallest_n =
        smallest_group_over_half(&curve).expect("collision is certain by a group of 365");
    let proportion = (PROPORTION_RIGHT_BOUND - smallest_n as f64)
        / (PROPORTION_RIGHT_BOUND - PROPORTION_LEFT_BOUND);

    let mut fills = Vec::with_capacity(params.simulations as usize);
    for _ in 0..params.simulations {
        fills.push(birthday::fill_group(rng));
    }
    let fill_values: Vec<f64> = fills.iter().map(|&d| d as f64).collect();

    BirthdayExperimentOutcome {
        probability_curve: curve,
        smallest_n,
        proportion,
        fill_summary: Summary::at_precision(&fill_values, 0),
        fills,
    }
}
