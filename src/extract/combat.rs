// src/extract/combat.rs
//
// HP, AC, speed and proficiency bonus. Each is an independent
// selector lookup with a numeric default; HP also understands the
// mobile layout's combined "current/max" display.

use scraper::Html;

use crate::core::{dom, sanitize};

const HP_CURRENT: &[&str] = &[
    ".ct-health-summary__hp-number",
    ".ddbc-health-summary__hp-number",
];
const HP_MAX: &[&str] = &[
    ".ct-health-summary__hp-max",
    ".ddbc-health-summary__hp-max",
];
const HP_COMBINED: &[&str] = &[
    ".ct-status-summary-mobile__hp",
    ".ddbc-combat-mobile__hp",
];
const HP_TEMP: &[&str] = &["[class*=\"temp-hp\"] [class*=\"value\"]"];

const AC: &[&str] = &[
    ".ddbc-armor-class-box__value",
    ".ct-armor-class-box__value",
];
const SPEED: &[&str] = &[
    ".ddbc-speed-box__box-value",
    ".ct-speed-box__box-value",
];
const PROF_BONUS: &[&str] = &[
    ".ddbc-proficiency-bonus-box__value",
    ".ct-proficiency-bonus-box__value",
];

pub const DEFAULT_AC: i32 = 10;
pub const DEFAULT_SPEED: i32 = 30;
pub const DEFAULT_PROF_BONUS: i32 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
    pub temp: i32,
}

pub fn hit_points(doc: &Html) -> HitPoints {
    let mut hp = HitPoints::default();

    if let Some(el) = dom::select_first(doc, HP_CURRENT) {
        hp.current = sanitize::parse_int(&dom::text_of(el), 0);
    }
    if let Some(el) = dom::select_first(doc, HP_MAX) {
        hp.max = sanitize::parse_int(&dom::text_of(el), 0);
    }
    // Mobile layout shows one "45/52" cell; it overrides the desktop
    // boxes when present.
    if let Some(el) = dom::select_first(doc, HP_COMBINED) {
        if let Some((current, max)) = split_combined_hp(&dom::text_of(el)) {
            hp.current = current;
            hp.max = max;
        }
    }
    if let Some(el) = dom::select_first(doc, HP_TEMP) {
        hp.temp = sanitize::parse_int(&dom::text_of(el), 0);
    }
    hp
}

/// "45/52" → (45, 52). None without a '/'.
pub fn split_combined_hp(s: &str) -> Option<(i32, i32)> {
    let (current, max) = s.split_once('/')?;
    Some((sanitize::parse_int(current, 0), sanitize::parse_int(max, 0)))
}

pub fn armor_class(doc: &Html) -> i32 {
    dom::select_first(doc, AC)
        .map(|el| sanitize::parse_int(&dom::text_of(el), DEFAULT_AC))
        .unwrap_or(DEFAULT_AC)
}

/// Always "<number> ft", whatever suffix the page used.
pub fn speed(doc: &Html) -> String {
    let n = dom::select_first(doc, SPEED)
        .map(|el| sanitize::parse_int(&dom::text_of(el), DEFAULT_SPEED))
        .unwrap_or(DEFAULT_SPEED);
    format!("{n} ft")
}

pub fn proficiency_bonus(doc: &Html) -> i32 {
    dom::select_first(doc, PROF_BONUS)
        .map(|el| sanitize::parse_int(&dom::text_of(el), DEFAULT_PROF_BONUS))
        .unwrap_or(DEFAULT_PROF_BONUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn reads_desktop_hp_boxes() {
        let d = doc(r#"
            <span class="ct-health-summary__hp-number">31</span>
            <span class="ct-health-summary__hp-max">40</span>
        "#);
        assert_eq!(hit_points(&d), HitPoints { current: 31, max: 40, temp: 0 });
    }

    #[test]
    fn combined_display_overrides_boxes() {
        let d = doc(r#"
            <span class="ct-health-summary__hp-number">1</span>
            <div class="ct-status-summary-mobile__hp">45/52</div>
        "#);
        let hp = hit_points(&d);
        assert_eq!(hp.current, 45);
        assert_eq!(hp.max, 52);
    }

    #[test]
    fn split_combined_requires_slash() {
        assert_eq!(split_combined_hp("45/52"), Some((45, 52)));
        assert_eq!(split_combined_hp("45 of 52"), None);
    }

    #[test]
    fn temp_hp_from_loose_selector() {
        let d = doc(r#"<div class="ct-temp-hp"><span class="ct-temp-hp__value">7</span></div>"#);
        assert_eq!(hit_points(&d).temp, 7);
    }

    #[test]
    fn speed_normalizes_suffix() {
        let d = doc(r#"<div class="ddbc-speed-box__box-value">30 ft.</div>"#);
        assert_eq!(speed(&d), "30 ft");
    }

    #[test]
    fn defaults_when_nothing_matches() {
        let d = doc("<p>bare page</p>");
        assert_eq!(hit_points(&d), HitPoints::default());
        assert_eq!(armor_class(&d), 10);
        assert_eq!(speed(&d), "30 ft");
        assert_eq!(proficiency_bonus(&d), 2);
    }

    #[test]
    fn ac_parses_with_digit_strip() {
        let d = doc(r#"<div class="ct-armor-class-box__value">AC 17</div>"#);
        assert_eq!(armor_class(&d), 17);
    }
}
