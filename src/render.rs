//! Pure text rendering: items in, decorated `String`s out. The CLI decides
//! when to print; nothing here touches an RNG or does I/O.

use crate::TierWeights;
use crate::machine::TenPull;
use crate::menu::{self, MenuItem};
use crate::rarity::Rarity;

const RULE_WIDTH: usize = 50;

fn rule(glyph: &str) -> String {
    glyph.repeat(RULE_WIDTH)
}

/// The title card shown at startup.
pub fn banner() -> String {
    let mut out = String::from("\n");
    out.push_str(
        &[
            "╔════════════════════════════════════════╗",
            "║       🌟 Breakfast Gacha 🌟            ║",
            "║   What's for breakfast? Let fate pick! ║",
            "╚════════════════════════════════════════╝",
        ]
        .join("\n"),
    );
    out
}

/// A single draw, framed as a reveal card with the tier's color and
/// flavor line.
pub fn card(item: &MenuItem) -> String {
    let tier = item.rarity;
    let mut out = String::from("\n");
    out.push_str(&rule("═"));
    out.push('\n');
    out.push_str(&format!("{}\n", tier.paint("★☆★ Draw Result ★☆★")));
    out.push_str(&rule("═"));
    out.push('\n');

    let headline = format!("【{}】{} {}", tier.label(), item.emoji, item.name);
    out.push_str(&format!("\n{}\n", tier.paint(&headline)));
    out.push_str(&format!("    {}\n", item.description));

    out.push('\n');
    out.push_str(&rule("═"));
    out.push('\n');
    out.push_str(&format!("💭 {}\n", tier.flavor()));
    out.push_str(&rule("═"));
    out.push('\n');
    out
}

/// A ten-pull block: the ten results as numbered lines, then the
/// recommendation for the best of the batch.
pub fn batch(pull: &TenPull) -> String {
    let mut out = String::from("\n");
    out.push_str(&rule("◆"));
    out.push('\n');
    out.push_str("🎰 Ten-pull, here we go!\n");
    out.push_str(&rule("◆"));
    out.push_str("\n\n");

    for (i, item) in pull.results.iter().enumerate() {
        let tag = format!("[{}]", item.rarity.label());
        out.push_str(&format!(
            "{}. {} {} {}\n",
            i + 1,
            item.rarity.paint(&tag),
            item.emoji,
            item.name
        ));
    }

    out.push('\n');
    out.push_str(&rule("◆"));
    out.push('\n');

    let best = pull.best;
    let pick = format!("{} {}", best.emoji, best.name);
    out.push_str(&format!("\n🎯 Today's pick: {}\n", best.rarity.paint(&pick)));
    out.push_str(&format!("   {}\n", best.description));
    out.push_str(&rule("◆"));
    out.push('\n');
    out
}

/// The full catalog, grouped by tier, every item exactly once.
pub fn menu_listing() -> String {
    let mut out = String::from("\n");
    out.push_str(&rule("━"));
    out.push('\n');
    out.push_str("📋 Breakfast Gacha Menu\n");
    out.push_str(&rule("━"));
    out.push('\n');

    for &tier in Rarity::VARIANTS {
        let header = format!("【{} Tier】", tier.label());
        out.push_str(&format!("\n{}\n", tier.paint(&header)));
        for item in menu::items(tier) {
            out.push_str(&format!("  • {} {}\n", item.emoji, item.name));
        }
    }

    out.push('\n');
    out.push_str(&rule("━"));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::PULLS;

    #[test]
    fn card_frames_item_with_tier_and_flavor() {
        colored::control::set_override(false);
        let item = &menu::items(Rarity::Ssr)[1];
        let out = card(item);

        assert_eq!(out.matches("★☆★ Draw Result ★☆★").count(), 1);
        assert!(out.contains("【SSR】⭐ Michelin Breakfast"));
        assert!(out.contains(item.description));
        assert!(out.contains(&format!("💭 {}", Rarity::Ssr.flavor())));
        assert_eq!(out.matches(&rule("═")).count(), 4);
    }

    #[test]
    fn batch_numbers_ten_lines_and_recommends_best() {
        colored::control::set_override(false);
        let filler = &menu::items(Rarity::N)[3];
        let star = &menu::items(Rarity::Sr)[0];
        let mut results = [filler; PULLS];
        results[4] = star;
        let pull = TenPull {
            results,
            best: star,
        };

        let out = batch(&pull);
        for i in 1..=PULLS {
            assert!(out.contains(&format!("{i}. [")), "line {i} missing");
        }
        assert!(out.contains("5. [SR] 🍵 Cantonese Morning Tea"));
        assert!(out.contains("🎯 Today's pick: 🍵 Cantonese Morning Tea"));
        assert!(out.contains(star.description));
    }

    #[test]
    fn menu_lists_every_item_once_grouped_by_tier() {
        colored::control::set_override(false);
        let out = menu_listing();

        for &tier in Rarity::VARIANTS {
            assert_eq!(out.matches(&format!("【{} Tier】", tier.label())).count(), 1);
        }
        for item in menu::all() {
            assert_eq!(out.matches(item.name).count(), 1, "{}", item.name);
        }
        assert_eq!(out.matches("  • ").count(), 20);
    }

    #[test]
    fn banner_names_the_program() {
        let out = banner();
        assert!(out.contains("Breakfast Gacha"));
    }
}
