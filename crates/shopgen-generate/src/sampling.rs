//! Probability helpers shared by the table generators.

use chrono::{Datelike, Duration, NaiveDate};
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::errors::GenerationError;

/// Probability of redrawing a January–March date.
pub const Q1_REJECT_PROBABILITY: f64 = 0.30;

/// Upper bound on seasonal draws before the last one is accepted.
pub const MAX_SEASONAL_DRAWS: u32 = 32;

/// Categorical distribution over a fixed set of values.
#[derive(Debug, Clone)]
pub struct Weighted<T> {
    values: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Copy> Weighted<T> {
    pub fn new(entries: &[(T, f64)]) -> Result<Self, GenerationError> {
        let index = WeightedIndex::new(entries.iter().map(|(_, weight)| *weight))
            .map_err(|err| GenerationError::InvalidConfig(format!("weights: {err}")))?;
        Ok(Self {
            values: entries.iter().map(|(value, _)| *value).collect(),
            index,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[self.index.sample(rng)]
    }
}

/// Uniform pick from a non-empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(
    values: &'a [T],
    rng: &mut R,
) -> Result<&'a T, GenerationError> {
    values
        .choose(rng)
        .ok_or_else(|| GenerationError::InvalidConfig("cannot pick from an empty list".to_string()))
}

/// Index into `len` items drawn as `floor(pareto(alpha)) mod len`.
///
/// The variate is at least 1, so low indices (but not the first) dominate.
pub fn pareto_index<R: Rng + ?Sized>(rng: &mut R, len: usize, alpha: f64) -> usize {
    let u = 1.0 - rng.random::<f64>();
    let variate = u.powf(-1.0 / alpha);
    (variate as usize) % len
}

pub fn uniform_date<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    start + Duration::days(rng.random_range(0..=span))
}

/// Date biased toward Q4 and away from Q1.
///
/// October to December is always accepted; January to March is redrawn
/// with probability [`Q1_REJECT_PROBABILITY`].
pub fn seasonal_date<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let mut date = uniform_date(rng, start, end);
    for _ in 1..MAX_SEASONAL_DRAWS {
        match date.month() {
            10..=12 => return date,
            1..=3 if rng.random_bool(Q1_REJECT_PROBABILITY) => {
                date = uniform_date(rng, start, end);
            }
            _ => return date,
        }
    }
    date
}

pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Independent random stream for one table of a run.
pub fn table_rng(seed: u64, table: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(hash_seed(seed, table))
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
        )
    }

    #[test]
    fn uniform_dates_stay_inside_window() {
        let (start, end) = window();
        let mut rng = table_rng(7, "dates");
        for _ in 0..2000 {
            let date = uniform_date(&mut rng, start, end);
            assert!(date >= start && date <= end);
        }
    }

    #[test]
    fn single_day_window_is_allowed() {
        let (start, _) = window();
        let mut rng = table_rng(7, "dates");
        assert_eq!(uniform_date(&mut rng, start, start), start);
    }

    #[test]
    fn seasonal_sampler_favours_q4_over_q1() {
        let (start, end) = window();
        let mut rng = table_rng(42, "seasonal");
        let mut q1 = 0;
        let mut q4 = 0;
        for _ in 0..20000 {
            match seasonal_date(&mut rng, start, end).month() {
                1..=3 => q1 += 1,
                10..=12 => q4 += 1,
                _ => {}
            }
        }
        assert!(q4 > q1 * 5 / 4, "q4={q4} q1={q1}");
    }

    #[test]
    fn seasonal_sampler_terminates_on_a_q1_only_window() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
        let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap_or_default();
        let mut rng = table_rng(42, "q1_only");
        for _ in 0..5000 {
            let date = seasonal_date(&mut rng, start, end);
            assert!(date >= start && date <= end, "{date} outside window");
        }
    }

    #[test]
    fn pareto_index_is_skewed_and_bounded() {
        let mut rng = table_rng(42, "pareto");
        let mut counts = vec![0_u32; 100];
        for _ in 0..10000 {
            counts[pareto_index(&mut rng, 100, 1.2)] += 1;
        }
        let top = counts
            .iter()
            .enumerate()
            .max_by_key(|(_, count)| **count)
            .map(|(idx, _)| idx);
        assert_eq!(top, Some(1));
        assert!(counts[1] > counts[50] * 10);
    }

    #[test]
    fn weighted_respects_zero_weight() {
        let weighted = Weighted::new(&[("never", 0.0), ("always", 1.0)]).expect("weights");
        let mut rng = table_rng(1, "weighted");
        for _ in 0..200 {
            assert_eq!(weighted.sample(&mut rng), "always");
        }
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round_currency(12.345_6), 12.35);
        assert_eq!(round_currency(7.0), 7.0);
    }

    #[test]
    fn table_streams_differ_by_name() {
        let mut a = table_rng(42, "orders");
        let mut b = table_rng(42, "events");
        assert_ne!(a.random::<u64>(), b.random::<u64>());
    }
}
