// src/core/dom.rs
//
// Selector-strategy helpers over a parsed `scraper` tree.
//
// The sheet site renames its element classes between page versions
// (ddbc- vs ct- prefixes, and whatever comes next), so a field lookup
// is never a single fixed path. Every helper here takes an ordered
// slice of selector strings: strategies are tried in order and the
// first one that matches wins. An invalid selector string is skipped,
// not an error — a bad strategy must never take down the run.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// First element in the document matching any of `selectors`, in
/// priority order.
pub fn select_first<'a>(doc: &'a Html, selectors: &[&str]) -> Option<ElementRef<'a>> {
    select_first_in(doc.root_element(), selectors)
}

/// Same, scoped to the descendants of `scope`.
pub fn select_first_in<'a>(scope: ElementRef<'a>, selectors: &[&str]) -> Option<ElementRef<'a>> {
    for s in selectors {
        let Ok(sel) = Selector::parse(s) else { continue };
        if let Some(el) = scope.select(&sel).next() {
            return Some(el);
        }
    }
    None
}

/// All elements matching the strategy list, selector-priority order
/// first, document order within each selector. Elements matching more
/// than one strategy appear more than once; callers dedupe by field.
pub fn select_all<'a>(doc: &'a Html, selectors: &[&str]) -> Vec<ElementRef<'a>> {
    let root = doc.root_element();
    let mut out = Vec::new();
    for s in selectors {
        let Ok(sel) = Selector::parse(s) else { continue };
        out.extend(root.select(&sel));
    }
    out
}

/// Whitespace-normalized text content of an element's subtree.
pub fn text_of(el: ElementRef) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of the first match, or a default when no strategy hits.
pub fn text_or<'a>(doc: &Html, selectors: &[&str], default: &'a str) -> String {
    select_first(doc, selectors)
        .map(text_of)
        .unwrap_or_else(|| s!(default))
}

/// Leaf descendants: elements of the subtree with no element children.
/// Last-resort structural scan when no named selector matched.
pub fn leaf_elements<'a>(el: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.descendants()
        .skip(1) // self
        .filter_map(ElementRef::wrap)
        .filter(|e| e.children().filter_map(ElementRef::wrap).next().is_none())
        .collect()
}

/// True if the element's class attribute contains `needle` (ASCII
/// case-insensitive), e.g. a "--proficient" modifier class.
pub fn class_contains(el: ElementRef, needle: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|c| c.to_ascii_lowercase().contains(needle))
}

/// Visible page text: everything except script/style/noscript subtrees.
/// The coarse substring searches (class features) run over this.
pub fn page_text(doc: &Html) -> String {
    let mut out = String::new();
    collect_text(doc.root_element(), &mut out);
    normalize_ws(&out)
}

fn collect_text(el: ElementRef, out: &mut String) {
    if matches!(el.value().name(), "script" | "style" | "noscript") {
        return;
    }
    for node in el.children() {
        if let Some(child) = ElementRef::wrap(node) {
            collect_text(child, out);
        } else if let Some(t) = node.value().as_text() {
            out.push_str(&t.text);
            out.push(' ');
        }
    }
}
