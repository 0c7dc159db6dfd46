// Seeded localized text generation.
//
// `TextSource` is the capability the catalogue needs from a text generator:
// reseed, then draw genres, filler words, person names, and sentences.
// `TextGenerator` implements it over a borrowed `Locale` and an owned
// `SongRng`, so every caller gets an isolated instance. There is no shared
// global seed; two generators never observe each other's draws.
//
// The draw order of each method is documented because callers (the
// catalogue) interleave several methods on one stream and rely on that order
// for reproducible pages.

use crate::names::{capitalize, generate_name, pick};
use crate::types::Locale;
use tunesmith_prng::SongRng;

/// Word count bounds for a generated sentence.
const SENTENCE_WORDS: (usize, usize) = (3, 10);

/// A reseedable source of localized text.
pub trait TextSource {
    /// Reset the stream to the state derived from `seed`.
    fn reseed(&mut self, seed: i64);
    /// One filler word.
    fn word(&mut self) -> String;
    /// Between `min` and `max` (inclusive) filler words joined by spaces.
    fn words(&mut self, min: usize, max: usize) -> String;
    /// "First Last".
    fn full_name(&mut self) -> String;
    /// A music genre label.
    fn genre(&mut self) -> String;
    /// A capitalized sentence ending in a period.
    fn sentence(&mut self) -> String;
    /// Between `min` and `max` (inclusive) sentences joined by spaces.
    fn sentences(&mut self, min: usize, max: usize) -> String;
    /// `true` with probability `p`, consuming one draw from the text stream.
    fn chance(&mut self, p: f64) -> bool;
    /// The localized replacement title for single releases.
    fn single_label(&self) -> &str;
}

/// Text generator over a locale's word banks.
#[derive(Debug, Clone)]
pub struct TextGenerator<'a> {
    locale: &'a Locale,
    rng: SongRng,
}

impl<'a> TextGenerator<'a> {
    /// Create a generator seeded with `seed`.
    pub fn new(locale: &'a Locale, seed: i64) -> Self {
        TextGenerator {
            locale,
            rng: SongRng::from_i64(seed),
        }
    }

    /// The locale this generator draws from.
    pub fn locale(&self) -> &'a Locale {
        self.locale
    }
}

impl TextSource for TextGenerator<'_> {
    fn reseed(&mut self, seed: i64) {
        self.rng = SongRng::from_i64(seed);
    }

    fn word(&mut self) -> String {
        pick(&self.locale.words, &mut self.rng)
            .unwrap_or_default()
            .to_string()
    }

    /// Draws the count first, then one draw per word.
    fn words(&mut self, min: usize, max: usize) -> String {
        let count = self.rng.range_usize_inclusive(min, max.max(min));
        (0..count)
            .map(|_| self.word())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn full_name(&mut self) -> String {
        generate_name(self.locale, &mut self.rng).full()
    }

    fn genre(&mut self) -> String {
        pick(&self.locale.genres, &mut self.rng)
            .unwrap_or_default()
            .to_string()
    }

    fn sentence(&mut self) -> String {
        let (min, max) = SENTENCE_WORDS;
        format!("{}.", capitalize(&self.words(min, max)))
    }

    fn sentences(&mut self, min: usize, max: usize) -> String {
        let count = self.rng.range_usize_inclusive(min, max.max(min));
        (0..count)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    fn single_label(&self) -> &str {
        &self.locale.single_label
    }
}
