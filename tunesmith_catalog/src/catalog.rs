// Page generation: the catalogue entry point.
//
// A page is built in two passes:
//
// 1. Text pass (sequential). One `TextSource` seeded with the page's base
//    seed yields, for each item in order: genre, title, artist, album title,
//    then the single/album decision. This is the only stream shared between
//    items, so it must be consumed in item order.
// 2. Item pass (parallel, rayon). Likes, musical content, cover URL, and
//    review depend only on the item seed and the item's own text fields, so
//    items are computed independently and collected back in order.
//
// Reviews come from a dedicated text generator per item, seeded by the first
// draw of the `"review" + seed` stream; they never touch the shared page
// stream.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tunesmith_lang::names::capitalize;
use tunesmith_lang::{Locale, Localization, TextGenerator, TextSource, builtin_locale};
use tunesmith_music::{AudioData, assemble};

use crate::config::CatalogConfig;
use crate::cover::cover_url;
use crate::likes::generate_likes;
use crate::seed::{PAGE_SIZE, base_seed, item_seed, review_stream, sequence_index};

/// One catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub sequence_index: i64,
    pub title: String,
    pub artist: String,
    pub album_title: String,
    pub genre: String,
    pub likes: u32,
    pub audio_data: AudioData,
    pub cover: String,
    pub review: String,
}

/// Text fields drawn from the shared page stream.
#[derive(Debug, Clone)]
struct ItemText {
    genre: String,
    title: String,
    artist: String,
    album_title: String,
}

/// Page generator bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: CatalogConfig,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Catalog { config }
    }

    /// Generate one page of exactly `PAGE_SIZE` songs.
    pub fn page(
        &self,
        seed: i64,
        page: i64,
        localization: Localization,
        avg_likes: f64,
    ) -> Vec<Song> {
        let locale = builtin_locale(localization);
        let base = base_seed(seed, page);
        log::debug!(
            "generating page {page} (seed {seed}, base {base}, {}, likes {avg_likes})",
            localization.tag()
        );

        let mut text = TextGenerator::new(locale, base);
        let texts: Vec<ItemText> = (0..PAGE_SIZE)
            .map(|_| self.item_text(&mut text))
            .collect();

        texts
            .into_par_iter()
            .enumerate()
            .map(|(index, text)| {
                let item = item_seed(base, index);
                Song {
                    sequence_index: sequence_index(page, index),
                    likes: generate_likes(avg_likes, item),
                    audio_data: assemble(item, &text.genre),
                    cover: cover_url(&self.config, &text.title, &text.artist, item),
                    review: self.review(locale, item),
                    title: text.title,
                    artist: text.artist,
                    album_title: text.album_title,
                    genre: text.genre,
                }
            })
            .collect()
    }

    /// Draws one item's text fields; the order here is observable.
    fn item_text(&self, text: &mut impl TextSource) -> ItemText {
        let c = &self.config;
        let genre = text.genre();
        let title = capitalize(&text.words(c.title_words.min, c.title_words.max));
        let artist = text.full_name();
        let album = capitalize(&text.words(c.album_words.min, c.album_words.max));
        let album_title = if text.chance(c.single_probability) {
            text.single_label().to_string()
        } else {
            album
        };
        ItemText {
            genre,
            title,
            artist,
            album_title,
        }
    }

    fn review(&self, locale: &Locale, item_seed: i64) -> String {
        let review_seed = (review_stream(item_seed).next_f64() * 1_000_000.0).floor() as i64;
        let range = self.config.review_sentences;
        TextGenerator::new(locale, review_seed).sentences(range.min, range.max)
    }
}

/// Generate one page with the default configuration.
pub fn get_page(seed: i64, page: i64, localization: Localization, avg_likes: f64) -> Vec<Song> {
    Catalog::default().page(seed, page, localization, avg_likes)
}
