// src/extract/mod.rs
//! # Field extractors
//!
//! One submodule per field family, each encoding *where the ground truth
//! lives on the sheet* and *how to read it robustly*:
//!
//! - `identity` — name/race/background, page-URL preconditions, character id.
//! - `abilities` — ability scores, including score-vs-modifier disambiguation.
//! - `classes` — the "Druid 8 / Monk 1" summary string.
//! - `combat` — HP, AC, speed, proficiency bonus.
//! - `features` — class-feature flags, skill and saving-throw proficiencies.
//!
//! ## Conventions & invariants
//! - Every extractor is independent and degrades to a documented default;
//!   only a missing character id aborts (a record without an identity
//!   cannot be correlated to its source).
//! - Field lookups are ordered selector-strategy lists (see `core::dom`),
//!   never a single fixed path — the sheet markup changes between page
//!   versions.
//! - Extractors read the parsed document fresh; nothing is cached between
//!   runs.

pub mod abilities;
pub mod classes;
pub mod combat;
pub mod features;
pub mod identity;

use chrono::Utc;
use scraper::Html;
use url::Url;

use crate::error::ScrapeError;
use crate::params::ORIGIN_TAG;
use crate::record::{CharacterRecord, Proficiencies, SyncMetadata};

/// Assemble the full record from one parsed sheet.
///
/// Pure composition: each extractor runs exactly once. The class list is
/// computed before anything derived from it (total level).
pub fn character(doc: &Html, page_url: &Url) -> Result<CharacterRecord, ScrapeError> {
    let source_id = identity::character_id(page_url)
        .ok_or_else(|| ScrapeError::MissingCharacterId(page_url.to_string()))?;

    let classes = classes::extract(doc);
    let total_level = classes.iter().map(|c| c.level).sum();
    let hp = combat::hit_points(doc);

    Ok(CharacterRecord {
        name: identity::name(doc),
        race: identity::race(doc),
        background: identity::background(doc),
        alignment: s!(),
        classes,
        total_level,
        ability_scores: abilities::extract(doc),
        max_hp: hp.max,
        current_hp: hp.current,
        temp_hp: hp.temp,
        ac: combat::armor_class(doc),
        speed: combat::speed(doc),
        proficiency_bonus: combat::proficiency_bonus(doc),
        proficiencies: Proficiencies {
            armor: Vec::new(),
            weapons: Vec::new(),
            tools: Vec::new(),
            saving_throws: features::saving_throws(doc),
            skills: features::skills(doc),
        },
        class_features: features::class_features(doc),
        inspiration: 0,
        experience: 0,
        features: s!(),
        equipment: s!(),
        sync_metadata: SyncMetadata {
            source_id,
            source_url: page_url.to_string(),
            extracted_at: Utc::now(),
            origin_tag: s!(ORIGIN_TAG),
        },
    })
}
