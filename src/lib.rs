//! # breakfast-gacha
//!
//! What's for breakfast? Let the gacha decide.
//!
//! A weighted four-tier draw over a fixed 20-item breakfast menu: tiers
//! `N`/`R`/`SR`/`SSR` at 50/30/15/5 percent, five dishes per tier picked
//! uniformly, plus a ten-pull batch mode and decorated terminal output.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use breakfast_gacha::GachaMachine;
//!
//! # fn main() -> Result<(), breakfast_gacha::WeightError> {
//! let machine = GachaMachine::new()?;
//! let mut rng = rand::rng();
//!
//! let item = machine.draw(&mut rng);       // &'static MenuItem
//! println!("{} {} ({})", item.emoji, item.name, item.rarity);
//!
//! let pull = machine.ten_pull(&mut rng);   // ten draws + the best of them
//! println!("best of ten: {}", pull.best.name);
//! # Ok(()) }
//! ```
//!
//! ## Weighted tiers from an enum
//!
//! [`Rarity`] derives [`TierWeights`] (from the companion
//! `breakfast_gacha_macros` crate), which records each `(variant, weight)`
//! pair in declaration order and hands back a ready-made table:
//!
//! ```rust,ignore
//! use breakfast_gacha::TierWeights;
//!
//! #[derive(Copy, Clone, Debug, TierWeights)]
//! enum Rarity {
//!     #[weight(50)] N,
//!     #[weight(30)] R,
//!     #[weight(15)] Sr,
//!     #[weight(5)]  Ssr,
//! }
//!
//! let table = Rarity::table()?;
//! ```
//!
//! Sampling walks the buckets cumulatively: one roll in `1..=100`, and the
//! first bucket whose running total reaches the roll wins. Roll 1 always
//! lands in the first tier, roll 100 in the last, so every boundary is
//! pinned by an exact integer.
//!
//! ## Gotchas
//! * Weights are positive integers that must sum to exactly 100; table
//!   construction fails with [`WeightError`] otherwise.
//! * Declaration order is both sampling order and the `Ord` used to rank a
//!   ten-pull, lowest tier first. Declare from common to rare.
//!
//! ## Testing & validation
//! Every draw goes through a caller-supplied `rand::Rng`, so tests drive the
//! machine with a seeded rng and get reproducible pulls. The included tests
//! pin the roll boundaries and check that empirical frequencies track the
//! tier weights.

// The derive macro emits `breakfast_gacha::` paths; this alias makes those
// resolve here too, so the crate can derive its own `Rarity`.
extern crate self as breakfast_gacha;

mod error;
mod machine;
pub mod menu;
mod rarity;
pub mod render;
mod sampler;
mod table;

/// A minimal interface for "index samplers".
/// Implemented by `CumulativeSampler` (weighted) and `UniformSampler` (equal odds).
#[allow(clippy::len_without_is_empty)]
pub trait Sampler {
    fn len(&self) -> usize;
    fn pick<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> usize;
}

pub use error::WeightError;
pub use machine::{GachaMachine, PULLS, TenPull};
pub use menu::MenuItem;
pub use rarity::Rarity;
pub use sampler::{CumulativeSampler, ROLL_MAX, UniformSampler};
pub use table::DrawTable;

/// Derive macro imported from `breakfast_gacha_macros`.
/// See the crate-level example for usage.
pub use breakfast_gacha_macros::TierWeights;

/// Trait implemented by the `TierWeights` derive macro.
///
/// Each variant and its percentage weight is exposed via
/// [`TierWeights::ENTRIES`], which enables building a ready-to-sample
/// [`DrawTable`] over the variants.
pub trait TierWeights: Sized + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// All `(variant, weight)` pairs, in declaration order.
    const ENTRIES: &'static [(Self, u32)];

    /// Convenience constructor that builds a [`DrawTable`] from the enum entries.
    ///
    /// # Errors
    /// See [`CumulativeSampler::new`] and [`WeightError`]: zero length, a zero
    /// weight, or weights not summing to [`ROLL_MAX`] will error.
    fn table() -> Result<DrawTable<CumulativeSampler, Self>, WeightError>
    where
        Self: Copy,
    {
        let weights: Vec<u32> = Self::ENTRIES.iter().map(|&(_, w)| w).collect();
        Ok(DrawTable::new(CumulativeSampler::new(&weights)?, Self::VARIANTS))
    }
}
