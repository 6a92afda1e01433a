// src/record.rs
//
// The one output entity of this tool. Field order is the payload key
// order the downstream tracker expects, so serde must see the fields
// exactly as declared here.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The six canonical abilities, in sheet order.
/// `Ord` follows declaration order, which keeps `ability_scores`
/// keys in STR→CHA order inside a `BTreeMap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub fn name(self) -> &'static str {
        match self {
            Ability::Strength => "strength",
            Ability::Dexterity => "dexterity",
            Ability::Constitution => "constitution",
            Ability::Intelligence => "intelligence",
            Ability::Wisdom => "wisdom",
            Ability::Charisma => "charisma",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spellcasting {
    None,
    Half,
    Full,
    Pact,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassEntry {
    pub name: String,
    pub level: u32,
    pub subclass: String, // not exposed on the primary sheet view
    pub hit_die: String,
    pub spellcasting: Spellcasting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Proficiencies {
    pub armor: Vec<String>,   // not extracted
    pub weapons: Vec<String>, // not extracted
    pub tools: Vec<String>,   // not extracted
    pub saving_throws: Vec<String>, // lowercase ability names
    pub skills: Vec<String>,        // proficient skill names, page order
}

/// Boolean flags detected by full-page text search. `bear_spirit_active`
/// is a local toggle in the tracker and never comes from the sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClassFeatures {
    pub mighty_summoner: bool,
    pub guardian_spirit: bool,
    pub faithful_summons: bool,
    pub bear_spirit_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SyncMetadata {
    pub source_id: String,
    pub source_url: String,
    pub extracted_at: DateTime<Utc>,
    pub origin_tag: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CharacterRecord {
    pub name: String,
    pub race: String,
    pub background: String,
    pub alignment: String, // always empty — not extracted
    pub classes: Vec<ClassEntry>,
    pub total_level: u32,
    pub ability_scores: BTreeMap<Ability, i32>,
    pub max_hp: i32,
    pub current_hp: i32,
    pub temp_hp: i32,
    pub ac: i32,
    pub speed: String, // "<number> ft"
    pub proficiency_bonus: i32,
    pub proficiencies: Proficiencies,
    pub class_features: ClassFeatures,
    pub inspiration: i32, // placeholder
    pub experience: i32,  // placeholder
    pub features: String,  // placeholder for manual entry downstream
    pub equipment: String, // placeholder for manual entry downstream
    pub sync_metadata: SyncMetadata,
}

impl CharacterRecord {
    /// Class/level summary, e.g. "Druid 8 / Monk 1".
    pub fn summary(&self) -> String {
        self.classes
            .iter()
            .map(|c| format!("{} {}", c.name, c.level))
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Pretty-printed payload text (2-space indent, stable key order).
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
