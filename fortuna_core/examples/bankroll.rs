use fortuna_core::{entropy_rng, play, spin, Paytable};

fn main() {
    // Example end-to-end trial
    let mut rng = entropy_rng();
    let paytable = Paytable::classic();

    let combination = spin(&mut rng);
    println!(
        "single spin: {:?} pays {}",
        combination,
        paytable.payout(&combination)
    );

    let trial = play(&mut rng, &paytable, 10);
    println!(
        "bankroll trial: rounds_played={} win_ratio={:.3}",
        trial.rounds_played, trial.win_ratio
    );
}
