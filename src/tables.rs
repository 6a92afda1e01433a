// src/tables.rs
//
// Static 5e lookup tables. Unknown class names fall back to d8 / none
// rather than failing — homebrew classes show up on sheets all the time.

use crate::record::{Ability, Spellcasting};

/// Class name → hit die.
pub fn hit_die(class: &str) -> &'static str {
    match class.to_ascii_lowercase().as_str() {
        "barbarian" => "d12",
        "fighter" | "paladin" | "ranger" => "d10",
        "bard" | "cleric" | "druid" | "monk" | "rogue" | "warlock" => "d8",
        "sorcerer" | "wizard" => "d6",
        _ => "d8",
    }
}

/// Class name → spellcasting type. Eldritch Knight and Arcane Trickster
/// are third-casters but that never shows at the class-name level, so
/// Fighter and Rogue stay "none".
pub fn spellcasting(class: &str) -> Spellcasting {
    match class.to_ascii_lowercase().as_str() {
        "bard" | "cleric" | "druid" | "sorcerer" | "wizard" => Spellcasting::Full,
        "paladin" | "ranger" => Spellcasting::Half,
        "warlock" => Spellcasting::Pact,
        _ => Spellcasting::None,
    }
}

/// Ability abbreviation (STR/DEX/...) → ability, case-insensitive.
pub fn ability_from_abbr(abbr: &str) -> Option<Ability> {
    match abbr.trim().to_ascii_uppercase().as_str() {
        "STR" => Some(Ability::Strength),
        "DEX" => Some(Ability::Dexterity),
        "CON" => Some(Ability::Constitution),
        "INT" => Some(Ability::Intelligence),
        "WIS" => Some(Ability::Wisdom),
        "CHA" => Some(Ability::Charisma),
        _ => None,
    }
}
