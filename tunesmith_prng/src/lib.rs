// Deterministic, portable pseudo-random number generator.
//
// Implements xoshiro256++ (Blackman & Vigna, 2019) with SplitMix64 seeding.
// The core generator is hand-rolled so that output is identical across all
// platforms and compiler versions.
//
// Streams are usually built from a string key (`SongRng::from_key`): the key
// is hashed with BLAKE3 and the first 8 bytes of the digest become the
// SplitMix64 seed. Distinct keys ("1042", "review1042") therefore give
// uncorrelated streams, which is how the catalogue keeps likes, musical
// content, and review text from perturbing one another.
//
// This crate is the single PRNG used across Tunesmith: `tunesmith_lang`
// (localized text), `tunesmith_music` (melody and song assembly), and
// `tunesmith_catalog` (likes, reviews).
//
// **Critical constraint: determinism.** Every method on `SongRng` must produce
// identical output given the same prior state. Draw order is part of the
// observable contract; callers must never reorder draws within one stream.

use serde::{Deserialize, Serialize};

/// Xoshiro256++ PRNG — the project's sole source of randomness.
///
/// Each consumer owns its own `SongRng`, constructed deterministically from a
/// key or seed. There is no global or thread-local generator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SongRng {
    s: [u64; 4],
}

impl SongRng {
    /// Create a new PRNG seeded from a `u64`.
    ///
    /// Uses SplitMix64 to expand the seed into the 256-bit internal state.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Create a PRNG from a signed seed, reinterpreting its two's-complement bits.
    pub fn from_i64(seed: i64) -> Self {
        Self::new(seed as u64)
    }

    /// Create an independent stream from a string key.
    ///
    /// The key is hashed with BLAKE3; the first 8 digest bytes (little-endian)
    /// seed the generator. Any key is accepted, including the empty string.
    pub fn from_key(key: &str) -> Self {
        Self::new(derive_key_seed(key))
    }

    /// Generate the next `u64` in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a uniform `f64` in [0, 1).
    ///
    /// Uses the upper 53 bits of a `u64` to fill the mantissa of an f64.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Pick an index in `[0, len)` as `floor(next_f64() * len)`.
    ///
    /// This is the scaled-draw selection used by the music generator: exactly
    /// one draw per call. Panics if `len == 0`.
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "index: len must be positive");
        let idx = (self.next_f64() * len as f64) as usize;
        // next_f64 < 1.0, so this only guards against float rounding at huge len.
        idx.min(len - 1)
    }

    /// Generate a uniform random integer in `[low, high)`.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        let threshold = range.wrapping_neg() % range; // = (2^64 - range) % range
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Generate a uniform random `usize` in `[low, high]` (inclusive on both ends).
    ///
    /// Panics if `low > high`. The full `u64` span takes one raw draw.
    pub fn range_usize_inclusive(&mut self, low: usize, high: usize) -> usize {
        assert!(low <= high, "range_usize_inclusive: low must be <= high");
        let span = (high - low) as u64;
        match span.checked_add(1) {
            Some(len) => low + self.range_u64(0, len) as usize,
            None => self.next_u64() as usize,
        }
    }

    /// Return `true` with probability `p`, `false` otherwise.
    ///
    /// Always consumes exactly one draw. `p <= 0.0` always returns false,
    /// `p >= 1.0` always returns true.
    pub fn random_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Hash a string key down to a 64-bit seed.
pub fn derive_key_seed(key: &str) -> u64 {
    let hash = blake3::hash(key.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// SplitMix64 — used only for seeding xoshiro256++ from a single `u64`.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
