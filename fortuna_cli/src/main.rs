use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;

use fortuna_core::{
    entropy_rng, run_birthday_experiment, run_slot_experiment, BirthdayExperimentOutcome,
    BirthdayExperimentParams, Paytable, SlotExperimentOutcome, SlotExperimentParams,
    DEFAULT_BALANCE, DEFAULT_SIMULATIONS,
};
use fortuna_shared::{
    validate_run, BirthdayReport, RunReport, SlotMachineReport, SummaryStats,
};

#[derive(Parser)]
#[command(
    name = "fortuna-cli",
    about = "Monte Carlo slot machine and birthday coincidence experiments"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Trials per experiment
    #[arg(long, default_value_t = DEFAULT_SIMULATIONS)]
    simulations: u32,
    /// Starting bankroll for each slot machine trial
    #[arg(long, default_value_t = DEFAULT_BALANCE)]
    balance: i64,
}

#[derive(Subcommand)]
enum Commands {
    /// Write raw trial sequences as CSV files for external plotting
    ExportCsv {
        /// Output directory, created if missing
        #[arg(long)]
        dir: PathBuf,
    },
    /// Write the full run report as pretty JSON
    ExportJson {
        /// Output file path
        #[arg(long)]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let cli = Cli::parse();
    validate_run(cli.simulations, cli.balance)?;

    let mut rng = entropy_rng();

    info!(simulations = cli.simulations, balance = cli.balance, "running slot machine experiment");
    let slot_params = SlotExperimentParams {
        simulations: cli.simulations,
        initial_balance: cli.balance,
        paytable: Paytable::classic(),
    };
    let slot_outcome = run_slot_experiment(&mut rng, &slot_params);

    info!(simulations = cli.simulations, "running birthday experiment");
    let birthday_params = BirthdayExperimentParams {
        simulations: cli.simulations,
    };
    let birthday_outcome = run_birthday_experiment(&mut rng, &birthday_params);

    print_summary(cli.simulations, &slot_outcome, &birthday_outcome);

    match &cli.command {
        None => {}
        Some(Commands::ExportCsv { dir }) => {
            let report = build_report(&cli, slot_outcome, birthday_outcome);
            export_csv(dir, &report)?;
            println!("Exported CSV files to {}", dir.display());
        }
        Some(Commands::ExportJson { path }) => {
            let report = build_report(&cli, slot_outcome, birthday_outcome);
            let json = serde_json::to_string_pretty(&report)?;
            fs::write(path, json)
                .with_context(|| format!("writing report to {}", path.display()))?;
            println!("Exported report to {}", path.display());
        }
    }

    Ok(())
}

fn print_summary(
    simulations: u32,
    slots: &SlotExperimentOutcome,
    birthday: &BirthdayExperimentOutcome,
) {
    println!("Results after {} simulations:\n", simulations);
    println!(
        "Median number of rounds played before going broke: {}",
        slots.rounds_summary.median
    );
    println!(
        "Mean number of rounds played before going broke: {}",
        slots.rounds_summary.mean
    );
    println!("Mean win_ratio: {}", slots.win_ratio_summary.mean);
    println!();
    println!(
        "Proportion of N where the event happens with at least 50% chance: {}",
        birthday.proportion
    );
    println!(
        "Smallest N where the probability is at least 50%: {}",
        birthday.smallest_n
    );
    println!(
        "Median additions before every date covered: {}",
        birthday.fill_summary.median
    );
    println!(
        "Mean additions before every date covered: {}",
        birthday.fill_summary.mean
    );
}

fn build_report(
    cli: &Cli,
    slots: SlotExperimentOutcome,
    birthday: BirthdayExperimentOutcome,
) -> RunReport {
    RunReport {
        generated_at: Utc::now(),
        simulations: cli.simulations,
        initial_balance: cli.balance,
        slot_machine: SlotMachineReport {
            rounds_played: slots.rounds_played,
            win_ratios: slots.win_ratios,
            rounds_summary: SummaryStats {
                median: slots.rounds_summary.median,
                mean: slots.rounds_summary.mean,
            },
            win_ratio_summary: SummaryStats {
                median: slots.win_ratio_summary.median,
                mean: slots.win_ratio_summary.mean,
            },
        },
        birthday: BirthdayReport {
            probability_curve: birthday.probability_curve,
            smallest_n: birthday.smallest_n,
            proportion: birthday.proportion,
            fills: birthday.fills,
            fill_summary: SummaryStats {
                median: birthday.fill_summary.median,
                mean: birthday.fill_summary.mean,
            },
        },
    }
}

fn export_csv(dir: &Path, report: &RunReport) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut wtr = csv::Writer::from_path(dir.join("slot_trials.csv"))?;
    wtr.write_record(["trial", "rounds_played", "win_ratio"])?;
    for (i, (rounds, ratio)) in report
        .slot_machine
        .rounds_played
        .iter()
        .zip(report.slot_machine.win_ratios.iter())
        .enumerate()
    {
        wtr.write_record(&[i.to_string(), rounds.to_string(), ratio.to_string()])?;
    }
    wtr.flush()?;

    let mut wtr = csv::Writer::from_path(dir.join("birthday_curve.csv"))?;
    wtr.write_record(["n", "probability"])?;
    for (n, probability) in report.birthday.probability_curve.iter().enumerate() {
        wtr.write_record(&[n.to_string(), probability.to_string()])?;
    }
    wtr.flush()?;

    let mut wtr = csv::Writer::from_path(dir.join("birthday_fills.csv"))?;
    wtr.write_record(["trial", "draws"])?;
    for (i, draws) in report.birthday.fills.iter().enumerate() {
        wtr.write_record(&[i.to_string(), draws.to_string()])?;
    }
    wtr.flush()?;

    Ok(())
}
