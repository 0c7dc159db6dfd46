// Song assembly: the musical content of one catalogue entry.
//
// `assemble` turns an item seed and a genre label into `AudioData`: key,
// tempo, one chord progression shared by every section, and a melody per
// section laid end to end on a single clock. Everything is drawn from one
// stream keyed by the decimal text of the item seed, in this order:
//
//   key (1 draw), tempo (1), progression (1), then each section's melody
//   in layout order (see melody.rs for its per-call draws)
//
// The resolved chord list is allocated once and every section holds a
// reference to the same `Arc<[String]>`. Downstream consumers treat it as a
// song-wide progression; it is not re-derived per section.
//
// The serialized shape (camelCase field names) is consumed by the player,
// gallery, and audio export; do not rename fields.

use crate::duration::{NoteValue, beat_duration};
use crate::genre::params_for;
use crate::melody::generate_melody;
use crate::theory::{Key, resolve_chord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tunesmith_prng::SongRng;

/// Every generated song is in common time.
pub const TIME_SIGNATURE: &str = "4/4";

/// Beats in one bar of 4/4.
pub const BEATS_PER_BAR: u32 = 4;

/// One melody note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Scale note name plus octave, e.g. "F#4".
    pub pitch: String,
    pub duration: NoteValue,
    /// Seconds from the start of the song.
    pub time: f64,
}

/// One structural block of a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSection {
    pub name: String,
    pub bars: u32,
    /// Shared with every other section of the same song.
    pub chords: Arc<[String]>,
    pub melody: Vec<Note>,
}

/// The musical content of a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioData {
    pub tempo: u32,
    pub key: Key,
    pub time_signature: String,
    pub structure: Vec<SongSection>,
}

impl AudioData {
    /// Seconds per beat.
    pub fn beat_duration(&self) -> f64 {
        beat_duration(self.tempo)
    }

    /// Start time of each section, in seconds, accumulated the same way the
    /// assembler lays sections out.
    pub fn section_starts(&self) -> Vec<f64> {
        let beat = self.beat_duration();
        let mut starts = Vec::with_capacity(self.structure.len());
        let mut current = 0.0;
        for section in &self.structure {
            starts.push(current);
            current += (section.bars * BEATS_PER_BAR) as f64 * beat;
        }
        starts
    }

    /// Length of the whole song in seconds.
    pub fn total_duration(&self) -> f64 {
        let beat = self.beat_duration();
        self.structure
            .iter()
            .fold(0.0, |acc, s| acc + (s.bars * BEATS_PER_BAR) as f64 * beat)
    }
}

/// The stream that drives a song's musical content.
pub fn song_rng(item_seed: i64) -> SongRng {
    SongRng::from_key(&item_seed.to_string())
}

/// Build the musical content for one catalogue item.
pub fn assemble(item_seed: i64, genre: &str) -> AudioData {
    let mut rng = song_rng(item_seed);
    let params = params_for(genre);

    let key = Key::ALL[rng.index(Key::ALL.len())];
    let scale = key.scale_notes();

    let (low, high) = params.tempo_range;
    let tempo = low + rng.index((high - low) as usize) as u32;

    let progression = params.progressions[rng.index(params.progressions.len())];
    let chords: Arc<[String]> = progression
        .iter()
        .map(|&degree| resolve_chord(degree, key))
        .collect();

    let beat = beat_duration(tempo);
    let mut current_time = 0.0;
    let structure = params
        .structure
        .iter()
        .map(|plan| {
            let beats = plan.bars * BEATS_PER_BAR;
            let melody = generate_melody(
                &mut rng,
                &scale,
                beats,
                current_time,
                beat,
                params.rhythm_style,
            );
            current_time += beats as f64 * beat;
            SongSection {
                name: plan.name.to_string(),
                bars: plan.bars,
                chords: Arc::clone(&chords),
                melody,
            }
        })
        .collect();

    log::trace!("assembled item {item_seed} ({genre}): {key}, {tempo} BPM, {chords:?}");

    AudioData {
        tempo,
        key,
        time_signature: TIME_SIGNATURE.to_string(),
        structure,
    }
}
