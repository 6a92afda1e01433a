// src/extract/abilities.rs
//
// Ability *scores*, not modifiers. The sheet renders both in the same
// visual slot depending on a user preference, and the markup has been
// through at least one class-prefix redesign, so this extractor is a
// pile of ordered fallbacks:
//
//   1. named score element, rejected when its text carries a sign
//      (that's the modifier),
//   2. leaf-descendant scan for a bare 1–2 digit value in 8..=30,
//   3. a generic "ability/stat block" second pass for anything missed,
//   4. a whole-map modifier→score rescue when the collected values can
//      only have been modifiers.

use std::collections::BTreeMap;

use scraper::{ElementRef, Html};

use crate::core::{dom, sanitize};
use crate::record::Ability;
use crate::tables;

const PRIMARY_BLOCKS: &[&str] = &[
    ".ddbc-ability-summary",
    ".ct-ability-summary",
    ".ct-quick-info__ability",
    ".ddbc-quick-info__ability",
];
const FALLBACK_BLOCKS: &[&str] = &[
    "[class*=\"ability\"]",
    "[class*=\"stat-block\"]",
];
const ABBR: &[&str] = &[
    ".ddbc-ability-summary__abbr",
    ".ct-ability-summary__abbr",
    "[class*=\"__abbr\"]",
];
const SCORE: &[&str] = &[
    ".ddbc-ability-summary__secondary",
    ".ct-ability-summary__secondary",
    ".ddbc-ability-summary__primary",
    "[class*=\"__score\"]",
];

// Plausible score range for a player character. Values below 8 in a
// score slot are taken for unsigned modifiers.
const SCORE_MIN: i32 = 8;
const SCORE_MAX: i32 = 30;

// Range a 5e modifier can realistically occupy.
const MOD_MIN: i32 = -5;
const MOD_MAX: i32 = 10;

/// Up to six ability scores. Absent abilities are simply absent;
/// this never fails.
pub fn extract(doc: &Html) -> BTreeMap<Ability, i32> {
    let mut scores = BTreeMap::new();
    harvest(doc, PRIMARY_BLOCKS, false, &mut scores);
    if scores.len() < 6 {
        // Second pass over generic stat blocks, only filling gaps and
        // only trusting in-range values.
        harvest(doc, FALLBACK_BLOCKS, true, &mut scores);
    }
    rescue_modifier_layout(&mut scores);
    scores
}

fn harvest(
    doc: &Html,
    blocks: &[&str],
    range_gate: bool,
    out: &mut BTreeMap<Ability, i32>,
) {
    for block in dom::select_all(doc, blocks) {
        let Some(ability) = dom::select_first_in(block, ABBR)
            .and_then(|el| tables::ability_from_abbr(&dom::text_of(el)))
        else {
            continue;
        };
        if out.contains_key(&ability) {
            continue; // first hit wins
        }
        let Some(value) = block_score(block) else { continue };
        if range_gate && !(SCORE_MIN..=SCORE_MAX).contains(&value) {
            continue;
        }
        out.insert(ability, value);
    }
}

/// Score for one ability block: named score element first, leaf scan
/// as last resort.
fn block_score(block: ElementRef) -> Option<i32> {
    if let Some(el) = dom::select_first_in(block, SCORE) {
        let txt = dom::text_of(el);
        // A signed value is the modifier sitting in the score slot.
        if !(txt.starts_with('+') || txt.starts_with('-')) {
            if let Some(v) = sanitize::parse_int_opt(&txt) {
                return Some(v);
            }
        }
    }
    leaf_scan(block)
}

/// Scan childless descendants for a bare 1–2 digit score in range.
/// Out-of-range candidates (lone unsigned modifiers like "3") are
/// skipped, not accepted.
fn leaf_scan(block: ElementRef) -> Option<i32> {
    for leaf in dom::leaf_elements(block) {
        let txt = dom::text_of(leaf);
        if txt.is_empty() || txt.len() > 2 || !txt.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        if let Ok(v) = txt.parse::<i32>() {
            if (SCORE_MIN..=SCORE_MAX).contains(&v) {
                return Some(v);
            }
        }
    }
    None
}

/// Known-approximate heuristic: when every collected value fits the
/// modifier range, or none fits the score range, the page was showing
/// modifiers. `10 + 2*mod` inverts the floor-based modifier formula at
/// the lower bound of each bracket. Do not "improve" this without
/// evidence of actual page structure; the downstream app relies on the
/// exact behavior.
fn rescue_modifier_layout(scores: &mut BTreeMap<Ability, i32>) {
    if scores.is_empty() {
        return;
    }
    let all_modifier_like = scores.values().all(|v| (MOD_MIN..=MOD_MAX).contains(v));
    let none_score_like = !scores.values().any(|v| (SCORE_MIN..=SCORE_MAX).contains(v));
    if all_modifier_like || none_score_like {
        for v in scores.values_mut() {
            *v = 10 + *v * 2;
        }
    }
}
