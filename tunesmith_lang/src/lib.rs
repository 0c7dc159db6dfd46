// Shared localized text crate.
//
// Provides the word banks and the seeded text generator used by
// `tunesmith_catalog` for genre labels, song/album titles, artist names, and
// review prose. No music logic lives here.
//
// Architecture:
// - `types.rs`: `Localization` tag resolution and the `Locale` data model
// - `names.rs`: Person-name generator (gendered first/last pools)
// - `text.rs`: `TextSource` capability trait and the `TextGenerator` impl
// - `lib.rs` (this file): locale loading from JSON and the built-in locales
//
// Locales are loaded from `data/locale_<tag>.json` via `Locale::from_json()`.
// The built-in English and Russian locales are embedded at compile time with
// `include_str!` and parsed once into process-wide immutable statics.
//
// Determinism constraint: all randomness goes through
// `tunesmith_prng::SongRng`, and every generator owns its own stream.

pub mod names;
pub mod text;
pub mod types;

pub use text::{TextGenerator, TextSource};
pub use types::{Locale, Localization, PeopleNames};

use std::sync::OnceLock;
use thiserror::Error;

/// Failure to load a locale file.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("malformed locale JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("locale '{tag}' has an empty '{field}' list")]
    Empty { tag: String, field: &'static str },
}

impl Locale {
    /// Parse a locale from a JSON string.
    ///
    /// Rejects locales whose genre or word lists are empty, since every page
    /// draws from both.
    pub fn from_json(json: &str) -> Result<Self, LocaleError> {
        let locale: Locale = serde_json::from_str(json)?;
        for (field, list) in [("genres", &locale.genres), ("words", &locale.words)] {
            if list.is_empty() {
                return Err(LocaleError::Empty {
                    tag: locale.tag.clone(),
                    field,
                });
            }
        }
        Ok(locale)
    }
}

static ENGLISH: OnceLock<Locale> = OnceLock::new();
static RUSSIAN: OnceLock<Locale> = OnceLock::new();

/// The embedded locale for a localization.
///
/// Parsed on first use. Panics if the embedded JSON is malformed (should
/// never happen in a released build; covered by tests).
pub fn builtin_locale(localization: Localization) -> &'static Locale {
    match localization {
        Localization::English => ENGLISH.get_or_init(|| {
            Locale::from_json(include_str!("../../data/locale_en.json"))
                .expect("embedded locale_en.json is malformed")
        }),
        Localization::Russian => RUSSIAN.get_or_init(|| {
            Locale::from_json(include_str!("../../data/locale_ru.json"))
                .expect("embedded locale_ru.json is malformed")
        }),
    }
}

/// A fresh, isolated text generator for `localization`, seeded with `seed`.
pub fn text_generator(localization: Localization, seed: i64) -> TextGenerator<'static> {
    TextGenerator::new(builtin_locale(localization), seed)
}
