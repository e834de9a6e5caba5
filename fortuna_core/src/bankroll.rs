use crate::paytable::Paytable;
use crate::symbols::{Combination, Symbol};
use rand::Rng;

/// Outcome of one bankroll trial: how long the balance lasted and what
/// fraction of rounds paid anything.
#[derive(Debug, Clone)]
pub struct TrialResult {
    pub rounds_played: u64,
    pub win_ratio: f64,
}

/// Draw one 3-symbol combination, each reel an independent uniform pick.
pub fn spin<R: Rng>(rng: &mut R) -> Combination {
    let mut combination = [Symbol::Bar; 3];
    for reel in combination.iter_mut() {
        *reel = Symbol::ALL[rng.gen_range(0..Symbol::ALL.len())];
    }
    combination
}

/// Play rounds at 1 unit stake each until the balance is exhausted.
///
/// Expects `initial_balance > 0`; the loop then runs at least once, so
/// the win ratio is always well-defined. Termination is almost sure: the
/// stake drains the balance whenever the reels pay nothing.
pub fn play<R: Rng>(rng: &mut R, paytable: &Paytable, initial_balance: i64) -> TrialResult {
    let mut balance = initial_balance;
    let mut rounds_played = 0u64;
    let mut won_rounds = 0u64;

    while balance > 0 {
        let combination = spin(rng);
        let payout = paytable.payout(&combination);
        balance += payout as i64 - 1;
        rounds_played += 1;
        if payout > 0 {
            won_rounds += 1;
        }
    }

    TrialResult {
        rounds_played,
        win_ratio: won_rounds as f64 / rounds_played as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;

    #[test]
    fn test_play_runs_at_least_one_round() {
        let table = Paytable::classic();
        for seed in 0..20 {
            let mut rng = seeded_rng(seed);
            let trial = play(&mut rng, &table, 1);
            assert!(trial.rounds_played >= 1);
        }
    }

    #[test]
    fn test_win_ratio_in_unit_interval() {
        let table = Paytable::classic();
        for seed in 0..20 {
            let mut rng = seeded_rng(seed);
            let trial = play(&mut rng, &table, 10);
            assert!((0.0..=1.0).contains(&trial.win_ratio));
        }
    }

    #[test]
    fn test_spin_draws_from_alphabet() {
        let mut rng = seeded_rng(7);
        for _ in 0..100 {
            let combination = spin(&mut rng);
            for symbol in combination {
                assert!(Symbol::ALL.contains(&symbol));
            }
        }
    }

    #[test]
    fn test_empty_paytable_busts_in_exactly_balance_rounds() {
        // With no winning rule every round is a net -1.
        let table = Paytable(vec![]);
        let mut rng = seeded_rng(1);
        let trial = play(&mut rng, &table, 10);
        assert_eq!(trial.rounds_played, 10);
        assert_eq!(trial.win_ratio, 0.0);
    }
}
