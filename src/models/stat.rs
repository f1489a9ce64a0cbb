//! Hidden personality stats accumulated by the quiz.

use std::fmt;

use serde::{Serialize, Serializer};

/// Lowest value a stat may hold after clamping.
pub const STAT_MIN: i32 = -3;
/// Highest value a stat may hold after clamping.
pub const STAT_MAX: i32 = 10;

/// One of the ten hidden stats, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stat {
    Bravery,
    Cunning,
    Faith,
    Charm,
    Curiosity,
    Stoicism,
    Recklessness,
    Empathy,
    Mischief,
    Honor,
}

impl Stat {
    /// All stats in canonical order.
    pub const ALL: [Stat; 10] = [
        Stat::Bravery,
        Stat::Cunning,
        Stat::Faith,
        Stat::Charm,
        Stat::Curiosity,
        Stat::Stoicism,
        Stat::Recklessness,
        Stat::Empathy,
        Stat::Mischief,
        Stat::Honor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bravery => "Bravery",
            Self::Cunning => "Cunning",
            Self::Faith => "Faith",
            Self::Charm => "Charm",
            Self::Curiosity => "Curiosity",
            Self::Stoicism => "Stoicism",
            Self::Recklessness => "Recklessness",
            Self::Empathy => "Empathy",
            Self::Mischief => "Mischief",
            Self::Honor => "Honor",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A signed adjustment to a single stat.
pub type StatDelta = (Stat, i32);

/// Values for every stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats([i32; 10]);

impl Stats {
    /// All stats at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: Stat) -> i32 {
        self.0[stat.index()]
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        self.0[stat.index()] = value;
    }

    /// Add each delta to its stat. No clamping happens here; sums saturate at the i32 bounds.
    pub fn apply(&mut self, deltas: &[StatDelta]) {
        for &(stat, delta) in deltas {
            let value = &mut self.0[stat.index()];
            *value = value.saturating_add(delta);
        }
    }

    /// Bound every stat to `[STAT_MIN, STAT_MAX]`.
    pub fn clamp(&mut self) -> &mut Self {
        for value in &mut self.0 {
            *value = (*value).clamp(STAT_MIN, STAT_MAX);
        }
        self
    }

    /// Copy with every stat clamped.
    pub fn clamped(&self) -> Self {
        let mut copy = *self;
        copy.clamp();
        copy
    }

    /// `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.iter().map(move |&stat| (stat, self.get(stat)))
    }

    /// Stats ordered by value, highest first. Equal values keep canonical order.
    pub fn ranked(&self) -> Vec<(Stat, i32)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` leading stats.
    pub fn top(&self, n: usize) -> Vec<Stat> {
        self.ranked().into_iter().take(n).map(|(stat, _)| stat).collect()
    }
}

impl Serialize for Stats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Stat::ALL.len()))?;
        for (stat, value) in self.iter() {
            map.serialize_entry(stat.name(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_zero() {
        assert!(Stats::new().iter().all(|(_, v)| v == 0));
    }

    #[test]
    fn test_apply_accumulates_and_allows_negative() {
        let mut stats = Stats::new();
        stats.apply(&[(Stat::Empathy, 2), (Stat::Stoicism, -1)]);
        stats.apply(&[(Stat::Empathy, 2)]);
        assert_eq!(stats.get(Stat::Empathy), 4);
        assert_eq!(stats.get(Stat::Stoicism), -1);
    }

    #[test]
    fn test_apply_saturates_at_extremes() {
        let mut stats = Stats::new();
        stats.set(Stat::Bravery, i32::MAX);
        stats.set(Stat::Honor, i32::MIN);
        stats.apply(&[(Stat::Bravery, 3), (Stat::Honor, -2)]);
        assert_eq!(stats.get(Stat::Bravery), i32::MAX);
        assert_eq!(stats.get(Stat::Honor), i32::MIN);
        assert_eq!(stats.clamped().get(Stat::Bravery), STAT_MAX);
    }

    #[test]
    fn test_clamp_bounds() {
        let mut stats = Stats::new();
        stats.set(Stat::Bravery, 42);
        stats.set(Stat::Faith, -9);
        stats.set(Stat::Charm, 5);
        stats.clamp();
        assert_eq!(stats.get(Stat::Bravery), STAT_MAX);
        assert_eq!(stats.get(Stat::Faith), STAT_MIN);
        assert_eq!(stats.get(Stat::Charm), 5);
    }

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let mut stats = Stats::new();
        stats.set(Stat::Honor, 3);
        stats.set(Stat::Cunning, 3);
        stats.set(Stat::Charm, 1);
        assert_eq!(stats.top(3), vec![Stat::Cunning, Stat::Honor, Stat::Charm]);

        // All-zero stats fall back to canonical order.
        assert_eq!(
            Stats::new().top(3),
            vec![Stat::Bravery, Stat::Cunning, Stat::Faith]
        );
    }

    #[test]
    fn test_serializes_in_canonical_order() {
        let mut stats = Stats::new();
        stats.set(Stat::Honor, 2);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.starts_with(r#"{"Bravery":0,"Cunning":0"#));
        assert!(json.ends_with(r#""Honor":2}"#));
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:12}|", Stat::Faith), "Faith       |");
    }
}
