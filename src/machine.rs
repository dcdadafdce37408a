//! Draw operations: single pulls and the ten-pull batch.

use rand::Rng;

use crate::error::WeightError;
use crate::menu::{self, MenuItem};
use crate::rarity::Rarity;
use crate::sampler::{CumulativeSampler, UniformSampler};
use crate::table::DrawTable;

/// Draws in one batch.
pub const PULLS: usize = 10;

/// The outcome of a ten-pull: every result in draw order, plus the single
/// best one (highest tier; the earliest draw wins ties).
#[derive(Debug, Clone, Copy)]
pub struct TenPull {
    pub results: [&'static MenuItem; PULLS],
    pub best: &'static MenuItem,
}

/// All draw tables built once at startup and read-only afterwards: the
/// weighted tier table plus one uniform table per tier.
#[derive(Debug)]
pub struct GachaMachine {
    rarity: DrawTable<CumulativeSampler, Rarity>,
    tiers: [DrawTable<UniformSampler, MenuItem>; 4],
}

impl GachaMachine {
    /// # Errors
    /// [`WeightError`] if the tier weights or a tier's item list are
    /// invalid. Unreachable with the shipped catalog; the constructor stays
    /// fallible so ad-hoc tables are checked the same way.
    pub fn new() -> Result<Self, WeightError> {
        let tier_table =
            |tier: Rarity| -> Result<DrawTable<UniformSampler, MenuItem>, WeightError> {
                let items = menu::items(tier);
                Ok(DrawTable::new(UniformSampler::new(items.len())?, items))
            };
        Ok(Self {
            rarity: Rarity::table()?,
            tiers: [
                tier_table(Rarity::N)?,
                tier_table(Rarity::R)?,
                tier_table(Rarity::Sr)?,
                tier_table(Rarity::Ssr)?,
            ],
        })
    }

    /// Draw one item: sample a tier by weight, then pick uniformly within
    /// that tier's list. Consumes entropy and nothing else.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static MenuItem {
        let tier = *self.rarity.draw(rng);
        self.tiers[tier as usize].draw(rng)
    }

    /// Ten independent draws (with replacement), collected in draw order.
    pub fn ten_pull<R: Rng + ?Sized>(&self, rng: &mut R) -> TenPull {
        let results: [&'static MenuItem; PULLS] = std::array::from_fn(|_| self.draw(rng));
        let best = best_of(&results);
        TenPull { results, best }
    }
}

/// Highest-rarity result of a batch; on ties the earliest draw keeps the
/// title, so the champion is only ever replaced by a strictly better one.
fn best_of(results: &[&'static MenuItem; PULLS]) -> &'static MenuItem {
    let mut best = results[0];
    for &candidate in &results[1..] {
        if candidate.rarity > best.rarity {
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TierWeights;
    use rand::{SeedableRng, rngs::StdRng};

    fn entry(tier: Rarity, i: usize) -> &'static MenuItem {
        &menu::items(tier)[i]
    }

    #[test]
    fn draw_returns_member_of_its_tier() {
        let machine = GachaMachine::new().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let item = machine.draw(&mut rng);
            assert!(
                menu::items(item.rarity)
                    .iter()
                    .any(|m| std::ptr::eq(m, item)),
                "{} not found in the {} tier",
                item.name,
                item.rarity
            );
        }
    }

    #[test]
    fn draw_frequencies_match_tier_weights() {
        let machine = GachaMachine::new().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let draws = 100_000usize;
        let mut counts = [0usize; 4];
        for _ in 0..draws {
            counts[machine.draw(&mut rng).rarity as usize] += 1;
        }

        for &(tier, weight) in Rarity::ENTRIES {
            let p = weight as f64 / 100.0;
            let emp = counts[tier as usize] as f64 / draws as f64;
            assert!((emp - p).abs() < 0.01, "{tier} emp={emp} p={p}");
        }
    }

    #[test]
    fn ten_pull_returns_ten_dominated_by_best() {
        let machine = GachaMachine::new().unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let pull = machine.ten_pull(&mut rng);
            assert_eq!(pull.results.len(), PULLS);
            for result in &pull.results {
                assert!(pull.best.rarity >= result.rarity);
            }
        }
    }

    #[test]
    fn best_prefers_first_on_tie() {
        let filler = entry(Rarity::N, 0);
        let first_ssr = entry(Rarity::Ssr, 0);
        let second_ssr = entry(Rarity::Ssr, 1);

        let mut results = [filler; PULLS];
        results[2] = first_ssr;
        results[7] = second_ssr;

        assert!(std::ptr::eq(best_of(&results), first_ssr));
    }

    #[test]
    fn best_of_all_same_tier_is_the_first_draw() {
        let results = [entry(Rarity::R, 3); PULLS];
        assert!(std::ptr::eq(best_of(&results), results[0]));
    }
}
