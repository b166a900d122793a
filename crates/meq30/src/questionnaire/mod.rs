//! Static MEQ-30 item catalog, response scale, and raw answer sets.
//!
//! Canonical item ids are the numbering of the original 100-item questionnaire and never
//! change; `order` only controls presentation.

mod answers;
mod items;
mod scale;

pub use answers::{AnswerSet, AnswerValue};
pub use items::{item, items, subscale_of, Item, Subscale, ITEM_COUNT};
pub use scale::{ResponseAnchor, ResponseScale, MAX_RESPONSE, MIN_RESPONSE};

/// Locale every catalog lookup falls back to.
pub const FALLBACK_LOCALE: &str = "en";

pub(crate) fn localized<'a>(texts: &'a [(&'a str, &'a str)], locale: &str) -> &'a str {
    texts
        .iter()
        .find(|(code, text)| *code == locale && !text.is_empty())
        .or_else(|| texts.iter().find(|(code, _)| *code == FALLBACK_LOCALE))
        .map(|(_, text)| *text)
        .unwrap_or_default()
}
