// Seed derivation for catalogue pages.
//
// A request's (seed, page) pair collapses to one base seed; each of the
// page's items gets its own item seed by offset. Item seeds key the
// independent per-purpose streams (`SongRng::from_key`): the bare decimal
// text drives likes and musical content, `"review" + seed` drives reviews.
//
// All arithmetic wraps on i64 overflow so every integer input is accepted.
// Note that adjacent pages overlap in item seeds (page p item 1 equals page
// p+1 item 0); only the text stream, reseeded per page, differs.

use tunesmith_music::song::song_rng;
use tunesmith_prng::SongRng;

/// Songs per page.
pub const PAGE_SIZE: usize = 20;

/// Base seed for one page: `seed + page`.
pub fn base_seed(seed: i64, page: i64) -> i64 {
    seed.wrapping_add(page)
}

/// Seed for the item at `index` on a page.
pub fn item_seed(base: i64, index: usize) -> i64 {
    base.wrapping_add(index as i64)
}

/// 1-based position of an item in the unpaginated catalogue.
pub fn sequence_index(page: i64, index: usize) -> i64 {
    page.wrapping_sub(1)
        .wrapping_mul(PAGE_SIZE as i64)
        .wrapping_add(index as i64 + 1)
}

/// Stream keyed by an item seed's decimal text; the same key the song
/// assembler uses for musical content.
pub fn item_stream(item_seed: i64) -> SongRng {
    song_rng(item_seed)
}

/// Stream for an item's review text.
pub fn review_stream(item_seed: i64) -> SongRng {
    SongRng::from_key(&format!("review{item_seed}"))
}
