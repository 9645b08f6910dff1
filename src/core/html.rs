// src/core/html.rs
// Small helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// Compile a selector known at compile time.
/// Only ever called with literals, which are checked by the spec tests.
pub fn sel(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e}"))
}

/// Visible text of an element, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of every direct `<td>`/`<th>` cell in a row.
pub fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "td" | "th"))
        .map(text_of)
        .collect()
}

/// Case-insensitive attribute comparison (`bgcolor="#CC9966"` vs `#cc9966`).
pub fn attr_is(el: ElementRef<'_>, name: &str, value: &str) -> bool {
    el.value()
        .attr(name)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(value))
}
