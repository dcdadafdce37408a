//! The fixed breakfast catalog: four tiers, five items each.

use crate::Rarity;
use crate::TierWeights;

/// One entry on the breakfast menu. Catalog entries live in statics for the
/// process lifetime, so draws hand out plain `&'static MenuItem` references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub rarity: Rarity,
    pub emoji: &'static str,
    pub description: &'static str,
}

const fn item(
    name: &'static str,
    rarity: Rarity,
    emoji: &'static str,
    description: &'static str,
) -> MenuItem {
    MenuItem {
        name,
        rarity,
        emoji,
        description,
    }
}

static TIER_N: [MenuItem; 5] = [
    item(
        "Soy Milk & Youtiao",
        Rarity::N,
        "🥯",
        "The classic pairing, plain and honest",
    ),
    item(
        "Plain Congee with Pickles",
        Rarity::N,
        "🥣",
        "Light and gentle on the stomach",
    ),
    item(
        "Steamed Bun with Egg",
        Rarity::N,
        "🥚",
        "Simple and satisfying",
    ),
    item("Baozi", Rarity::N, "🥟", "Thin skin, generous filling"),
    item("Shaobing", Rarity::N, "🫓", "Crisp and fragrant"),
];

static TIER_R: [MenuItem; 5] = [
    item(
        "Xiaolongbao",
        Rarity::R,
        "🥟",
        "Soup inside, bliss in one bite",
    ),
    item(
        "Beef Noodle Soup",
        Rarity::R,
        "🍜",
        "Rich broth and springy noodles, energy for the day",
    ),
    item("Jianbing Guozi", Rarity::R, "🌯", "Make it two eggs!"),
    item(
        "Wonton Soup",
        Rarity::R,
        "🥣",
        "Delicate wrappers in a savory broth",
    ),
    item(
        "Tofu Pudding",
        Rarity::R,
        "🍮",
        "Sweet or savory, pick a side",
    ),
];

static TIER_SR: [MenuItem; 5] = [
    item(
        "Cantonese Morning Tea",
        Rarity::Sr,
        "🍵",
        "Har gow and siu mai, the refined life",
    ),
    item(
        "Japanese Ramen",
        Rarity::Sr,
        "🍜",
        "Tonkotsu broth, deep and mellow",
    ),
    item(
        "Korean Bibimbap",
        Rarity::Sr,
        "🍚",
        "Sizzling stone bowl, loaded with color",
    ),
    item(
        "French Croissant",
        Rarity::Sr,
        "🥐",
        "Shattering crust outside, soft layers inside",
    ),
    item(
        "Italian Panini",
        Rarity::Sr,
        "🥪",
        "Hot off the press, cheese pull included",
    ),
];

static TIER_SSR: [MenuItem; 5] = [
    item(
        "Seafood Breakfast Buffet",
        Rarity::Ssr,
        "🦞",
        "King crab, salmon, oysters, take it all!",
    ),
    item(
        "Michelin Breakfast",
        Rarity::Ssr,
        "⭐",
        "A master chef cooks just for you",
    ),
    item(
        "Wagyu Steak Breakfast",
        Rarity::Ssr,
        "🥩",
        "A5 wagyu that melts on the tongue",
    ),
    item(
        "Luxury Hotel Brunch",
        Rarity::Ssr,
        "🏨",
        "Champagne, lobster, bottomless refills",
    ),
    item(
        "Mom's Homemade Breakfast",
        Rarity::Ssr,
        "❤️",
        "The warmest taste in the world",
    ),
];

/// The items of one tier, in menu order.
pub fn items(tier: Rarity) -> &'static [MenuItem] {
    match tier {
        Rarity::N => &TIER_N,
        Rarity::R => &TIER_R,
        Rarity::Sr => &TIER_SR,
        Rarity::Ssr => &TIER_SSR,
    }
}

/// Every item on the menu, grouped by tier, lowest tier first.
pub fn all() -> impl Iterator<Item = &'static MenuItem> {
    Rarity::VARIANTS.iter().flat_map(|&tier| items(tier))
}
