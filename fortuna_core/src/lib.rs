pub mod bankroll;
pub mod birthday;
pub mod experiment;
pub mod paytable;
pub mod rng;
pub mod stats;
pub mod symbols;

pub use crate::bankroll::{play, spin, TrialResult};
pub use crate::birthday::{fill_group, shared_birthday_probability, DAYS_IN_YEAR};
pub use crate::experiment::{
    probability_curve, run_birthday_experiment, run_slot_experiment, smallest_group_over_half,
    BirthdayExperimentOutcome, BirthdayExperimentParams, SlotExperimentOutcome,
    SlotExperimentParams, Summary, DEFAULT_BALANCE, DEFAULT_SIMULATIONS,
};
pub use crate::paytable::{Paytable, PaytableEntry, SymbolPattern};
pub use crate::rng::{entropy_rng, seeded_rng};
pub use crate::symbols::{Combination, Symbol};
