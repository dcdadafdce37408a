use std::fmt;

use colored::{ColoredString, Colorize};

use crate::TierWeights;

/// Menu tiers, lowest to highest. Declaration order is both the
/// cumulative-bucket order for sampling and the `Ord` total order used to
/// pick the best result of a batch.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, TierWeights)]
pub enum Rarity {
    /// Normal. Half of all draws land here.
    #[weight(50)]
    N,
    /// Rare.
    #[weight(30)]
    R,
    /// Super rare.
    #[weight(15)]
    Sr,
    /// The jackpot tier.
    #[weight(5)]
    Ssr,
}

impl Rarity {
    /// Display tag, as printed on cards and in the menu listing.
    pub fn label(self) -> &'static str {
        match self {
            Rarity::N => "N",
            Rarity::R => "R",
            Rarity::Sr => "SR",
            Rarity::Ssr => "SSR",
        }
    }

    /// One-line reaction shown under a drawn card.
    pub fn flavor(self) -> &'static str {
        match self {
            Rarity::N => "A simple start to a simple day~",
            Rarity::R => "Nice pick! Today is looking up~",
            Rarity::Sr => "Great luck! Today calls for a proper meal!",
            Rarity::Ssr => "Unbelievable luck! Today is your day!",
        }
    }

    /// Style text in this tier's color: white, blue, magenta, gold.
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Rarity::N => text.white(),
            Rarity::R => text.blue(),
            Rarity::Sr => text.magenta(),
            Rarity::Ssr => text.yellow(),
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
