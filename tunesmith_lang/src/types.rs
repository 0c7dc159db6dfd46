// Core locale types: the localization tag and the JSON-loadable word banks.
//
// A `Locale` is pure data: genre labels, filler words for titles and reviews,
// gendered person-name pools, and the localized literal used for single
// releases. It carries no RNG state; `text.rs` pairs a `&Locale` with a
// `SongRng` to produce text.
//
// Determinism constraint: entry order is preserved from the JSON file (plain
// `Vec`s, no hash maps) so that index-based draws are stable across builds.

use serde::{Deserialize, Serialize};

/// Which built-in locale to generate text in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Localization {
    English,
    Russian,
}

impl Localization {
    /// Resolve a request tag such as `"en"` or `"ru"`.
    ///
    /// Matching is case-insensitive on the primary subtag (`"ru-RU"` is
    /// Russian). Every other tag falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("ru") {
            Localization::Russian
        } else {
            if !primary.eq_ignore_ascii_case("en") {
                log::warn!("unknown localization tag '{tag}', falling back to English");
            }
            Localization::English
        }
    }

    /// Short tag for this localization.
    pub fn tag(self) -> &'static str {
        match self {
            Localization::English => "en",
            Localization::Russian => "ru",
        }
    }
}

/// First/last name pools, split by grammatical gender.
///
/// Russian surnames inflect for gender (Иванов / Иванова), so a name is
/// always drawn from a single gender's pair of pools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeopleNames {
    pub male_first: Vec<String>,
    pub male_last: Vec<String>,
    pub female_first: Vec<String>,
    pub female_last: Vec<String>,
}

/// A loaded locale: everything the text generator draws from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locale {
    /// Short tag, e.g. "en".
    pub tag: String,
    /// Replacement album title for single releases.
    pub single_label: String,
    /// Music genre labels.
    pub genres: Vec<String>,
    /// Filler vocabulary for titles, album names, and review sentences.
    pub words: Vec<String>,
    pub people: PeopleNames,
}
