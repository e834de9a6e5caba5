use rand::Rng;

pub const DAYS_IN_YEAR: usize = 365;

/// Closed-form probability that at least two people in a group of `n`
/// share a birthday: 1 - prod_{x=0}^{n-1} (365 - x) / 365.
///
/// The empty product makes `n = 0` come out at 0. From `n = 366` on the
/// zero factor at x = 365 collapses the product, so the result saturates
/// at exactly 1.
pub fn shared_birthday_probability(n: u32) -> f64 {
    let days = DAYS_IN_YEAR as f64;
    let mut no_collision = 1.0;
    for x in 0..n {
        no_collision *= (days - x as f64) / days;
    }
    1.0 - no_collision
}

/// Assign uniform random birthdays until every day of the year is covered,
/// returning how many assignments it took (coupon collector over 365 days).
pub fn fill_group<R: Rng>(rng: &mut R) -> u64 {
    let mut covered = [false; DAYS_IN_YEAR];
    let mut draws = 0u64;
    loop {
        let day = rng.gen_range(0..DAYS_IN_YEAR);
        covered[day] = true;
        draws += 1;
        // Coverage needs at least 365 draws, so the full scan is deferred
        // until the count clears 366.
        if draws > 366 && covered.iter().all(|&seen| seen) {
            return draws;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;

    #[test]
    fn test_probability_edge_values() {
        assert_eq!(shared_birthday_probability(0), 0.0);
        let at_year = shared_birthday_probability(365);
        assert!(at_year > 0.9999 && at_year < 1.0);
        assert_eq!(shared_birthday_probability(366), 1.0);
        assert_eq!(shared_birthday_probability(400), 1.0);
    }

    #[test]
    fn test_probability_monotone() {
        let mut previous = 0.0;
        for n in 0..=366 {
            let p = shared_birthday_probability(n);
            assert!(p >= previous);
            previous = p;
        }
    }

    #[test]
    fn test_fill_group_needs_at_least_a_year() {
        for seed in 0..5 {
            let mut rng = seeded_rng(seed);
            assert!(fill_group(&mut rng) >= DAYS_IN_YEAR as u64);
        }
    }
}
