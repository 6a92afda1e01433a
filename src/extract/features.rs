// src/extract/features.rs
//
// Class-feature flags plus skill and saving-throw proficiencies.
//
// Feature detection is a case-insensitive substring search over the
// whole visible page. Known limitation: a tooltip that merely
// *mentions* "Mighty Summoner" flips the flag too. Left as-is; the
// downstream app treats these as suggestions the player can untick.

use scraper::Html;

use crate::core::dom;
use crate::record::ClassFeatures;
use crate::tables;

const SKILL_ROWS: &[&str] = &[".ct-skills__item", ".ddbc-skills__item"];
const SKILL_NAME: &[&str] = &[".ct-skills__col--skill", ".ddbc-skills__col--skill"];
const SKILL_PROF: &[&str] = &[
    ".ct-skills__col--proficiency",
    ".ddbc-skills__col--proficiency",
];
const FILLED_MARK: &[&str] = &["[class*=\"filled\"]"];

const SAVE_ROWS: &[&str] = &[
    ".ddbc-saving-throws-summary__ability",
    ".ct-saving-throws-summary__ability",
];
const SAVE_ABBR: &[&str] = &[
    ".ddbc-saving-throws-summary__ability-name",
    ".ct-saving-throws-summary__ability-name",
];

const FEATURE_PHRASES: [(&str, fn(&mut ClassFeatures)); 3] = [
    ("mighty summoner", |f| f.mighty_summoner = true),
    ("guardian spirit", |f| f.guardian_spirit = true),
    ("faithful summons", |f| f.faithful_summons = true),
];

/// Shepherd-druid feature flags from full-page text search.
/// Independent of the computed class level on purpose.
pub fn class_features(doc: &Html) -> ClassFeatures {
    let text = dom::page_text(doc).to_lowercase();
    let mut flags = ClassFeatures::default();
    for (phrase, set) in FEATURE_PHRASES {
        if text.contains(phrase) {
            set(&mut flags);
        }
    }
    flags
}

/// Proficient skill names, page order. A skill counts as proficient
/// when its indicator cell carries a "proficient" marker class or
/// contains a filled indicator element.
pub fn skills(doc: &Html) -> Vec<String> {
    let mut out = Vec::new();
    for row in dom::select_all(doc, SKILL_ROWS) {
        let Some(indicator) = dom::select_first_in(row, SKILL_PROF) else { continue };
        let proficient = dom::class_contains(indicator, "proficient")
            || dom::select_first_in(indicator, FILLED_MARK).is_some();
        if !proficient {
            continue;
        }
        if let Some(name_el) = dom::select_first_in(row, SKILL_NAME) {
            let name = dom::text_of(name_el);
            if !name.is_empty() {
                out.push(name);
            }
        }
    }
    out
}

/// Proficient saving throws as lowercase ability names. Unlike skills,
/// proficiency is a modifier class on the row element itself.
pub fn saving_throws(doc: &Html) -> Vec<String> {
    let mut out = Vec::new();
    for row in dom::select_all(doc, SAVE_ROWS) {
        if !dom::class_contains(row, "proficient") {
            continue;
        }
        if let Some(ability) = dom::select_first_in(row, SAVE_ABBR)
            .and_then(|el| tables::ability_from_abbr(&dom::text_of(el)))
        {
            out.push(s!(ability.name()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn feature_phrases_flip_flags() {
        let d = doc("<p>Mighty Summoner. Your conjured beasts hit harder.</p>");
        let f = class_features(&d);
        assert!(f.mighty_summoner);
        assert!(!f.guardian_spirit);
        assert!(!f.faithful_summons);
        assert!(!f.bear_spirit_active);
    }

    #[test]
    fn bear_spirit_is_never_set_from_the_page() {
        let d = doc("<p>bear spirit active everywhere</p>");
        assert!(!class_features(&d).bear_spirit_active);
    }

    #[test]
    fn skill_proficiency_via_marker_class() {
        let d = doc(r#"
            <div class="ct-skills__item">
              <div class="ct-skills__col--proficiency ct-skills__col--proficiency--proficient"></div>
              <div class="ct-skills__col--skill">Animal Handling</div>
            </div>
            <div class="ct-skills__item">
              <div class="ct-skills__col--proficiency"></div>
              <div class="ct-skills__col--skill">Athletics</div>
            </div>
        "#);
        assert_eq!(skills(&d), vec!["Animal Handling"]);
    }

    #[test]
    fn skill_proficiency_via_filled_indicator() {
        let d = doc(r#"
            <div class="ddbc-skills__item">
              <div class="ddbc-skills__col--proficiency">
                <span class="ddbc-proficiency-icon__filled"></span>
              </div>
              <div class="ddbc-skills__col--skill">Nature</div>
            </div>
        "#);
        assert_eq!(skills(&d), vec!["Nature"]);
    }

    #[test]
    fn saving_throw_proficiency_is_a_row_modifier() {
        let d = doc(r#"
            <div class="ddbc-saving-throws-summary__ability ddbc-saving-throws-summary__ability--proficient">
              <span class="ddbc-saving-throws-summary__ability-name">INT</span>
            </div>
            <div class="ddbc-saving-throws-summary__ability">
              <span class="ddbc-saving-throws-summary__ability-name">STR</span>
            </div>
            <div class="ddbc-saving-throws-summary__ability ddbc-saving-throws-summary__ability--proficient">
              <span class="ddbc-saving-throws-summary__ability-name">WIS</span>
            </div>
        "#);
        assert_eq!(saving_throws(&d), vec!["intelligence", "wisdom"]);
    }

    #[test]
    fn empty_page_yields_empty_lists() {
        let d = doc("<p>nothing</p>");
        assert!(skills(&d).is_empty());
        assert!(saving_throws(&d).is_empty());
    }
}
