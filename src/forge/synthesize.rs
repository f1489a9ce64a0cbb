//! Turn accumulated stats into a character.
//!
//! Class and background are chosen by weighted heuristics plus a small random
//! tiebreak; everything else is drawn uniformly from the pools. All randomness
//! comes from a single seeded generator consumed in a fixed order, so the same
//! `(stats, seed)` pair always yields the same character.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::pools::{self, ALIGNMENTS, BACKGROUNDS, CLASSES, FLAWS, HOOKS, QUIRKS, RACES};
use crate::models::{Character, Stat, Stats, Tone};

/// Upper bound (inclusive) of the random bonus added to every score.
const TIEBREAK_MAX: u32 = 2;

/// Number of roleplay hooks attached to a character.
const HOOK_COUNT: usize = 2;

/// Number of stats listed as leading.
const TOP_STAT_COUNT: usize = 3;

const CASTER_CLASSES: [&str; 4] = ["Wizard", "Sorcerer", "Warlock", "Bard"];
const MARTIAL_CLASSES: [&str; 4] = ["Fighter", "Paladin", "Barbarian", "Ranger"];

/// Heuristic class scores before the random tiebreak, indexed like `CLASSES`.
pub fn class_scores(stats: &Stats) -> [u32; 12] {
    let s = |stat| stats.get(stat);
    let mut scores = [0u32; 12];
    let mut add = |class: &str, points: u32| {
        if let Some(idx) = CLASSES.iter().position(|c| *c == class) {
            scores[idx] += points;
        }
    };

    if s(Stat::Bravery) >= 3 {
        add("Fighter", 2);
        add("Barbarian", 2);
    }
    if s(Stat::Recklessness) >= 2 {
        add("Barbarian", 2);
        add("Sorcerer", 1);
    }
    if s(Stat::Faith) >= 3 || s(Stat::Honor) >= 3 {
        add("Paladin", 3);
        add("Cleric", 2);
    }
    if s(Stat::Cunning) >= 3 && s(Stat::Mischief) >= 2 {
        add("Rogue", 3);
        add("Warlock", 1);
    }
    if s(Stat::Charm) >= 3 && s(Stat::Mischief) >= 1 {
        add("Bard", 3);
    }
    if s(Stat::Curiosity) >= 3 {
        add("Wizard", 3);
        add("Druid", 1);
    }
    if s(Stat::Empathy) >= 3 && s(Stat::Faith) >= 1 {
        add("Cleric", 2);
        add("Druid", 1);
    }
    if s(Stat::Stoicism) >= 2 && s(Stat::Bravery) >= 2 {
        add("Monk", 2);
        add("Fighter", 1);
    }
    if s(Stat::Cunning) >= 2 && s(Stat::Bravery) >= 1 {
        add("Ranger", 2);
    }
    if s(Stat::Curiosity) >= 2 && s(Stat::Mischief) >= 2 {
        add("Warlock", 2);
    }
    if s(Stat::Charm) >= 2 && s(Stat::Bravery) >= 1 {
        add("Paladin", 1);
        add("Bard", 1);
    }
    if s(Stat::Honor) >= 2 && s(Stat::Faith) >= 1 {
        add("Paladin", 2);
    }

    scores
}

/// Heuristic score for one background before the random tiebreak.
pub fn background_score(background: &str, stats: &Stats) -> u32 {
    let (stat, threshold, points) = match background {
        "Sage" => (Stat::Curiosity, 2, 3),
        "Charlatan" => (Stat::Mischief, 2, 3),
        "Soldier" => (Stat::Bravery, 2, 3),
        "Acolyte" => (Stat::Faith, 2, 3),
        "Urchin" => (Stat::Cunning, 2, 2),
        "Folk Hero" => (Stat::Honor, 2, 2),
        "Guild Artisan" => (Stat::Charm, 2, 1),
        "Noble" => (Stat::Honor, 2, 2),
        "Outlander" => (Stat::Stoicism, 1, 1),
        _ => return 0,
    };
    if stats.get(stat) >= threshold {
        points
    } else {
        0
    }
}

/// Index of the first maximum. Ties go to the earliest entry.
fn first_max(scores: &[u32]) -> usize {
    let mut best = 0;
    for (idx, &score) in scores.iter().enumerate() {
        if score > scores[best] {
            best = idx;
        }
    }
    best
}

fn pick(rng: &mut StdRng, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Mechanical and roleplay pointers for a finished character.
fn tips_for(class: &str, background: &str, quirk: &str) -> Vec<&'static str> {
    let mut tips = Vec::new();
    if CASTER_CLASSES.contains(&class) {
        tips.push(
            "Consider Intelligence/Charisma based spells and keep a few control/utility spells.",
        );
    }
    if MARTIAL_CLASSES.contains(&class) {
        tips.push("Heavy armor and front-line options are your bread and butter.");
    }
    if background == "Sage" {
        tips.push("Look for lore interactions; you might unlock extra dialogue options.");
    }
    if quirk.contains("geese") {
        tips.push("Avoid lakes in roleplay or it will end badly.");
    }
    tips
}

/// Build a character from quiz stats. Deterministic for a given seed.
pub fn synthesize(stats: &Stats, seed: u64) -> Character {
    let mut rng = StdRng::seed_from_u64(seed);
    let stats = stats.clamped();

    let mut scores = class_scores(&stats);
    for score in &mut scores {
        *score += rng.random_range(0..=TIEBREAK_MAX);
    }
    let class = CLASSES[first_max(&scores)];

    let bg_scores: Vec<u32> = BACKGROUNDS
        .iter()
        .map(|(name, _)| background_score(name, &stats) + rng.random_range(0..=TIEBREAK_MAX))
        .collect();
    let (background, background_blurb) = BACKGROUNDS[first_max(&bg_scores)];

    let race = pick(&mut rng, &RACES);
    let alignment = pick(&mut rng, &ALIGNMENTS);
    let subclass = match pools::subclasses(class) {
        [] => "Any",
        list => pick(&mut rng, list),
    };
    let quirk = pick(&mut rng, &QUIRKS);
    let flaw = pick(&mut rng, &FLAWS);
    let tone = Tone::from_stats(&stats);
    let hooks: Vec<&'static str> = HOOKS
        .choose_multiple(&mut rng, HOOK_COUNT)
        .copied()
        .collect();

    tracing::debug!(seed, class, background, "Synthesized character");

    let mut character = Character {
        class,
        subclass,
        background,
        background_blurb,
        race,
        alignment,
        quirk,
        flaw,
        tone,
        hooks,
        top_stats: stats.top(TOP_STAT_COUNT),
        stats,
        summary: String::new(),
        tips: tips_for(class, background, quirk),
        seed,
    };
    character.summary = character.compose_summary();
    character
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with(values: &[(Stat, i32)]) -> Stats {
        let mut stats = Stats::new();
        for &(stat, value) in values {
            stats.set(stat, value);
        }
        stats
    }

    #[test]
    fn test_same_seed_same_character() {
        let stats = stats_with(&[(Stat::Cunning, 5), (Stat::Mischief, 4)]);
        assert_eq!(synthesize(&stats, 1234), synthesize(&stats, 1234));
    }

    #[test]
    fn test_strong_heuristic_beats_tiebreak() {
        // Rogue starts at 3 and Warlock at 1, everything else at 0. With a
        // tiebreak of at most 2, Warlock can only tie Rogue, and ties go to
        // the earlier class.
        let stats = stats_with(&[(Stat::Cunning, 5), (Stat::Mischief, 4)]);
        let scores = class_scores(&stats);
        assert_eq!(scores[CLASSES.iter().position(|c| *c == "Rogue").unwrap()], 3);
        assert_eq!(scores[CLASSES.iter().position(|c| *c == "Warlock").unwrap()], 1);

        for seed in 0..50 {
            let character = synthesize(&stats, seed);
            assert_eq!(character.class, "Rogue", "seed {seed}");
        }
    }

    #[test]
    fn test_class_scores_paladin_stack() {
        let stats = stats_with(&[
            (Stat::Honor, 3),
            (Stat::Faith, 1),
            (Stat::Charm, 2),
            (Stat::Bravery, 1),
        ]);
        let scores = class_scores(&stats);
        let paladin = CLASSES.iter().position(|c| *c == "Paladin").unwrap();
        // faith/honor 3 + charm/bravery 1 + honor/faith 2
        assert_eq!(scores[paladin], 6);
    }

    #[test]
    fn test_background_scores() {
        let stats = stats_with(&[(Stat::Honor, 2), (Stat::Stoicism, 1)]);
        assert_eq!(background_score("Folk Hero", &stats), 2);
        assert_eq!(background_score("Noble", &stats), 2);
        assert_eq!(background_score("Outlander", &stats), 1);
        assert_eq!(background_score("Sage", &stats), 0);
        assert_eq!(background_score("Pirate", &stats), 0);
    }

    #[test]
    fn test_first_max_prefers_earliest() {
        assert_eq!(first_max(&[1, 4, 2, 4]), 1);
        assert_eq!(first_max(&[0, 0, 0]), 0);
    }

    #[test]
    fn test_character_fields_are_consistent() {
        let stats = stats_with(&[(Stat::Bravery, 14), (Stat::Empathy, -8)]);
        for seed in 0..20 {
            let character = synthesize(&stats, seed);

            assert_eq!(character.stats.get(Stat::Bravery), 10);
            assert_eq!(character.stats.get(Stat::Empathy), -3);
            assert_eq!(character.top_stats[0], Stat::Bravery);
            assert_eq!(character.tone, Tone::Bold);

            assert!(pools::subclasses(character.class).contains(&character.subclass));
            assert!(RACES.contains(&character.race));
            assert!(ALIGNMENTS.contains(&character.alignment));
            assert_eq!(character.hooks.len(), 2);
            assert_ne!(character.hooks[0], character.hooks[1]);

            assert_eq!(character.summary.lines().count(), 5);
            assert!(character.summary.starts_with(&format!(
                "You are a {} {} ({})",
                character.race, character.class, character.subclass
            )));
            assert!(character.summary.ends_with("Leading stats: Bravery, Cunning, Faith"));
        }
    }

    #[test]
    fn test_tips() {
        assert!(tips_for("Monk", "Noble", QUIRKS[6]).is_empty());
        let tips = tips_for("Bard", "Sage", QUIRKS[3]);
        assert_eq!(tips.len(), 3);
        assert!(tips[0].starts_with("Consider Intelligence/Charisma"));
        assert!(tips[2].starts_with("Avoid lakes"));
        assert_eq!(tips_for("Ranger", "Urchin", "").len(), 1);
    }

    #[test]
    fn test_serializes_to_json() {
        let character = synthesize(&Stats::new(), 7);
        let value = serde_json::to_value(&character).unwrap();
        assert_eq!(value["seed"], 7);
        assert_eq!(value["stats"]["Bravery"], 0);
        assert_eq!(value["tone"], "balanced");
        assert_eq!(value["top_stats"][0], "Bravery");
    }
}
