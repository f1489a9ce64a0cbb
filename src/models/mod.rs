//! Data models for the character forge.

mod character;
mod stat;

pub use character::{Character, Tone};
pub use stat::{Stat, StatDelta, Stats, STAT_MAX, STAT_MIN};
