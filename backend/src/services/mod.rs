//! HTTP services of the tracking backend, one sub-module per API scope:
//! - `cartellini`: read-only lookups against the factory tag catalog.
//! - `link_types`: the small registry of relationship categories.
//! - `links`: the link store itself (bulk creation, lot edit, deletion)
//!   and the tag → type → lots tree reconstruction.

pub mod cartellini;
pub mod link_types;
pub mod links;

/// First page is 1; anything absent or below 1 falls back to it.
pub(crate) fn page_or_first(page: Option<i64>) -> i64 {
    page.filter(|p| *p >= 1).unwrap_or(1)
}

pub(crate) fn page_size_or(page_size: Option<i64>, default: i64) -> i64 {
    page_size.filter(|s| *s >= 1).unwrap_or(default)
}

pub(crate) fn total_pages(total: i64, page_size: i64) -> i64 {
    if total == 0 {
        0
    } else {
        (total + page_size - 1) / page_size
    }
}

/// Wraps a search term in `%`, escaping the SQLite `LIKE` specials so
/// user text cannot act as a wildcard. Queries using the result must
/// carry `ESCAPE '\'`.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
