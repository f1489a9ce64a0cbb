//! Plain-text character sheet.

use std::io::{self, Write};

use crate::models::Character;

const RULE_WIDTH: usize = 60;

/// Write the character sheet framed by `=` rules.
pub fn write_character(out: &mut impl Write, character: &Character) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "\n{rule}")?;
    writeln!(out, "CHARACTER SUMMARY")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", character.summary)?;

    writeln!(out, "\nStats:")?;
    for (stat, value) in character.stats.iter() {
        writeln!(out, "  {:12}: {:+}", stat, value)?;
    }

    writeln!(out, "\nMechanical tips & roleplay pointers:")?;
    for tip in &character.tips {
        writeln!(out, " - {tip}")?;
    }

    writeln!(out, "\nSuggested roleplay hooks:")?;
    for hook in &character.hooks {
        writeln!(out, " - {hook}")?;
    }
    writeln!(out, "{rule}\n")
}
