//! Item name suggestions with fuzzy matching.

use manor_core::ItemId;
use strsim::jaro_winkler;

/// Minimum similarity score for a suggestion (0.0-1.0).
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// The candidate closest to `input`, if any scores at least
/// [`FUZZY_THRESHOLD`]. An exact match is never suggested since it would not
/// have failed.
pub fn suggest<'a>(input: &str, candidates: impl IntoIterator<Item = &'a ItemId>) -> Option<ItemId> {
    let mut best: Option<(&ItemId, f64)> = None;
    for candidate in candidates {
        if candidate == input {
            continue;
        }
        let score = jaro_winkler(input, candidate.as_str());
        if score >= FUZZY_THRESHOLD && best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best.map(|(id, _)| id.clone())
}
