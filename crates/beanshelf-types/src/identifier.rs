//! Stable identifiers for beans.
//!
//! A bean's identifier is its own id when the source supplied one. Without
//! one, the identifier is synthesized from the name and the bean's position
//! in the list currently on screen, so the same bean can resolve to
//! different identifiers in two independently ordered lists. Producers and
//! consumers of a navigation must derive identifiers from the same ordered
//! collection.

use crate::Bean;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Lower-case, collapse every run of non-alphanumerics into one hyphen,
/// and strip hyphens from both ends.
///
/// `slug("Jelly Bean!! #2") == "jelly-bean-2"`
pub fn slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_ALPHANUMERIC_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Identifier of `bean` at position `index` of the rendered collection.
pub fn stable_id(bean: &Bean, index: usize) -> String {
    let id = bean.id.trim();
    if !id.is_empty() {
        return id.to_string();
    }
    format!("name-{}-{}", slug(&bean.name), index)
}

/// Identifiers for every bean of an ordered collection.
pub fn identifier_list(beans: &[Bean]) -> Vec<String> {
    beans
        .iter()
        .enumerate()
        .map(|(index, bean)| stable_id(bean, index))
        .collect()
}

/// Position of `id` in `beans`, comparing against identifiers recomputed
/// over that same collection.
pub fn position_of(beans: &[Bean], id: &str) -> Option<usize> {
    beans
        .iter()
        .enumerate()
        .position(|(index, bean)| stable_id(bean, index) == id)
}
