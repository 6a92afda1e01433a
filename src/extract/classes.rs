// src/extract/classes.rs
//
// The sheet renders the class list as one free-text summary string,
// "Druid 8 / Monk 1". Each (name, level) pair is matched in turn;
// class names may be one or two words ("Blood Hunter 5"). Subclass
// needs a detail view the summary doesn't expose, so it stays empty.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::core::dom;
use crate::record::ClassEntry;
use crate::tables;

const CLASS_SUMMARY: &[&str] = &[
    ".ddbc-character-summary__classes",
    ".ct-character-summary__classes",
];

static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]+(?:\s+[A-Za-z]+)?)\s*(\d+)").expect("class pattern")
});

/// Class entries from the summary line; empty when the line is missing.
pub fn extract(doc: &Html) -> Vec<ClassEntry> {
    dom::select_first(doc, CLASS_SUMMARY)
        .map(|el| parse_class_string(&dom::text_of(el)))
        .unwrap_or_default()
}

/// Parse "<Class> <level> / <Class> <level> / ...". Unrecognized class
/// names still parse; the lookup tables supply d8/none defaults.
pub fn parse_class_string(s: &str) -> Vec<ClassEntry> {
    CLASS_RE
        .captures_iter(s)
        .filter_map(|cap| {
            let name = cap[1].trim().to_string();
            let level: u32 = cap[2].parse().ok()?;
            Some(ClassEntry {
                hit_die: s!(tables::hit_die(&name)),
                spellcasting: tables::spellcasting(&name),
                subclass: s!(),
                name,
                level,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Spellcasting;

    #[test]
    fn parses_multiclass_summary() {
        let classes = parse_class_string("Druid 8 / Monk 1");
        assert_eq!(classes.len(), 2);

        assert_eq!(classes[0].name, "Druid");
        assert_eq!(classes[0].level, 8);
        assert_eq!(classes[0].hit_die, "d8");
        assert_eq!(classes[0].spellcasting, Spellcasting::Full);

        assert_eq!(classes[1].name, "Monk");
        assert_eq!(classes[1].level, 1);
        assert_eq!(classes[1].hit_die, "d8");
        assert_eq!(classes[1].spellcasting, Spellcasting::None);

        let total: u32 = classes.iter().map(|c| c.level).sum();
        assert_eq!(total, 9);
    }

    #[test]
    fn parses_two_word_class_names() {
        let classes = parse_class_string("Blood Hunter 5");
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Blood Hunter");
        assert_eq!(classes[0].level, 5);
        // Unknown to the tables → defaults.
        assert_eq!(classes[0].hit_die, "d8");
        assert_eq!(classes[0].spellcasting, Spellcasting::None);
    }

    #[test]
    fn subclass_is_never_populated() {
        for entry in parse_class_string("Warlock 3 / Paladin 7") {
            assert!(entry.subclass.is_empty());
        }
    }

    #[test]
    fn empty_or_garbage_input_yields_no_entries() {
        assert!(parse_class_string("").is_empty());
        assert!(parse_class_string("no levels here").is_empty());
    }

    #[test]
    fn extracts_from_summary_element() {
        let doc = Html::parse_document(
            r#"<span class="ct-character-summary__classes">Ranger 4 / Rogue 2</span>"#,
        );
        let classes = extract(&doc);
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].hit_die, "d10");
        assert_eq!(classes[0].spellcasting, Spellcasting::Half);
    }
}
