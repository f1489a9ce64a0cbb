//! Name pools the synthesizer draws from.

pub const CLASSES: [&str; 12] = [
    "Fighter",
    "Barbarian",
    "Paladin",
    "Ranger",
    "Rogue",
    "Bard",
    "Cleric",
    "Druid",
    "Wizard",
    "Sorcerer",
    "Warlock",
    "Monk",
];

/// `(name, blurb)` pairs.
pub const BACKGROUNDS: [(&str, &str); 9] = [
    (
        "Sage",
        "You spent years in study, seeking knowledge above all.",
    ),
    (
        "Charlatan",
        "You learned deception to survive; silver tongue included.",
    ),
    ("Soldier", "Trained with discipline and battlefield experience."),
    ("Acolyte", "Raised in service to a faith and its rituals."),
    (
        "Urchin",
        "You know the streets, the shortcuts, and the smells.",
    ),
    (
        "Folk Hero",
        "You saved people who couldn't save themselves; beloved locally.",
    ),
    ("Guild Artisan", "Crafts and commerce are your trade."),
    ("Noble", "Born to rank; duty and pride define you."),
    (
        "Outlander",
        "You grew up far from civilized centers; hunter, forager.",
    ),
];

/// Subclass suggestions for a class name. Unknown classes get none.
pub fn subclasses(class: &str) -> &'static [&'static str] {
    match class {
        "Fighter" => &[
            "Battle Master (tactical)",
            "Champion (simple and reliable)",
            "Eldritch Knight (magic-armored)",
        ],
        "Barbarian" => &["Berserker (rage pure)", "Totem (spiritual flavors)"],
        "Paladin" => &["Oath of Devotion", "Oath of Vengeance", "Oath of the Ancients"],
        "Ranger" => &["Gloom Stalker", "Hunter", "Beast Master"],
        "Rogue" => &["Thief", "Assassin", "Arcane Trickster"],
        "Bard" => &["College of Lore", "College of Valor", "College of Satire"],
        "Cleric" => &["Life Domain", "War Domain", "Trickery Domain"],
        "Druid" => &["Circle of the Land", "Circle of the Moon"],
        "Wizard" => &[
            "School of Evocation",
            "School of Illusion",
            "School of Divination",
        ],
        "Sorcerer" => &["Draconic Bloodline", "Wild Magic", "Divine Soul"],
        "Warlock" => &["The Fiend", "The Great Old One", "The Archfey"],
        "Monk" => &[
            "Way of the Open Hand",
            "Way of Shadow",
            "Way of the Four Elements",
        ],
        _ => &[],
    }
}

pub const RACES: [&str; 9] = [
    "Human",
    "Elf (High/Eladrin/Drow flavor)",
    "Half-Elf",
    "Dwarf",
    "Halfling",
    "Githyanki/Githzerai (BG3-specific flavor)",
    "Tiefling",
    "Half-Orc",
    "Gnome",
];

pub const ALIGNMENTS: [&str; 9] = [
    "Lawful Good",
    "Neutral Good",
    "Chaotic Good",
    "Lawful Neutral",
    "True Neutral",
    "Chaotic Neutral",
    "Lawful Evil",
    "Neutral Evil",
    "Chaotic Evil",
];

pub const QUIRKS: [&str; 8] = [
    "You loudly narrate your actions like a bard in training.",
    "You keep a pet rock you believe is an omen.",
    "You whisper to your weapons as if they are old friends.",
    "You have an unreasonable hatred of geese.",
    "You compulsively organize coins by size and smell.",
    "You misquote ancient proverbs with hilarious results.",
    "You break into rhymes when nervous.",
    "You always carry a folded map of a place you've never visited.",
];

pub const FLAWS: [&str; 5] = [
    "Tells awful jokes at bad moments.",
    "Has a tiny, embarrassing secret (e.g., loves knitting).",
    "Is wildly superstitious about something mundane.",
    "Trust issues with authority figures.",
    "Compulsively hoards small trinkets.",
];

pub const HOOKS: [&str; 4] = [
    "You once failed spectacularly at something famous; it's a private shame.",
    "You have a mysterious benefactor whose motives are unclear.",
    "Someone from your past seeks your help—and owes you nothing.",
    "A small symbol you carry attracts the attention of cultists.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_subclasses() {
        for class in CLASSES {
            assert!(!subclasses(class).is_empty(), "{class} has no subclasses");
        }
        assert!(subclasses("Artificer").is_empty());
    }
}
