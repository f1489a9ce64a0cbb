//! A synthesized character.

use std::fmt;

use serde::Serialize;

use super::stat::{Stat, Stats};

/// Overall voice of the character, derived from dominant stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Mischievous,
    Devout,
    Scholarly,
    Bold,
    Balanced,
}

impl Tone {
    /// Pick a tone from clamped stats. Earlier rules win.
    pub fn from_stats(stats: &Stats) -> Self {
        if stats.get(Stat::Mischief) >= 3 {
            Self::Mischievous
        } else if stats.get(Stat::Faith) >= 3 {
            Self::Devout
        } else if stats.get(Stat::Curiosity) >= 3 {
            Self::Scholarly
        } else if stats.get(Stat::Bravery) >= 3 {
            Self::Bold
        } else {
            Self::Balanced
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mischievous => "mischievous",
            Self::Devout => "devout",
            Self::Scholarly => "scholarly",
            Self::Bold => "bold",
            Self::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the forge produces for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub class: &'static str,
    pub subclass: &'static str,
    pub background: &'static str,
    pub background_blurb: &'static str,
    pub race: &'static str,
    pub alignment: &'static str,
    pub quirk: &'static str,
    pub flaw: &'static str,
    pub tone: Tone,
    pub hooks: Vec<&'static str>,
    /// Clamped stats the character was built from.
    pub stats: Stats,
    pub top_stats: Vec<Stat>,
    pub summary: String,
    pub tips: Vec<&'static str>,
    /// Seed that reproduces this character from the same stats.
    pub seed: u64,
}

impl Character {
    /// Five-line prose summary.
    pub(crate) fn compose_summary(&self) -> String {
        let leading: Vec<&str> = self.top_stats.iter().map(Stat::name).collect();
        [
            format!(
                "You are a {} {} ({}) — {}.",
                self.race, self.class, self.subclass, self.alignment
            ),
            format!("Background: {} — {}", self.background, self.background_blurb),
            format!("Tone: {}. Quirk: {}", self.tone, self.quirk),
            format!(
                "Flaw: {}. Roleplay hooks: {}.",
                self.flaw,
                self.hooks.join(", ")
            ),
            format!("Leading stats: {}", leading.join(", ")),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_precedence() {
        let mut stats = Stats::new();
        assert_eq!(Tone::from_stats(&stats), Tone::Balanced);

        stats.set(Stat::Bravery, 3);
        assert_eq!(Tone::from_stats(&stats), Tone::Bold);

        stats.set(Stat::Curiosity, 3);
        assert_eq!(Tone::from_stats(&stats), Tone::Scholarly);

        stats.set(Stat::Faith, 4);
        assert_eq!(Tone::from_stats(&stats), Tone::Devout);

        stats.set(Stat::Mischief, 3);
        assert_eq!(Tone::from_stats(&stats), Tone::Mischievous);
    }

    #[test]
    fn test_tone_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tone::Devout).unwrap(), r#""devout""#);
    }
}
