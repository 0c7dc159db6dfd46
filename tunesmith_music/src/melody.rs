// Melody and rhythm generation for one song section.
//
// A section's melody is a walk over `beats` steps. One rhythm pattern (a
// cycle of note lengths) is chosen per call from the feel's candidate set;
// each step then picks a scale note and octave, takes the next length from
// the pattern, and keeps or drops the note with a feel-dependent probability.
// Dropped notes are rests: they still advance the clock.
//
// Draw order per call (part of the reproducibility contract):
//   1 draw  pattern index (always, even for zero beats)
//   per step: note index, octave index, keep/drop
//
// Consumed by song.rs. Duration math lives in duration.rs.

use crate::duration::NoteValue;
use crate::genre::Feel;
use crate::song::Note;
use tunesmith_prng::SongRng;

use crate::duration::NoteValue::{Eighth as E, Half as H, Quarter as Q, Sixteenth as S};

const SMOOTH_PATTERNS: &[&[NoteValue]] = &[&[Q, Q, H], &[Q, E, E, Q]];
const ENERGETIC_PATTERNS: &[&[NoteValue]] = &[&[E, E, E, E], &[S, S, E, E]];
const STEADY_PATTERNS: &[&[NoteValue]] = &[&[Q, Q, Q, Q]];

/// Octaves a melody note may land in.
const OCTAVES: [u8; 2] = [4, 5];

/// Candidate rhythm patterns for a feel.
pub fn rhythm_patterns(feel: Feel) -> &'static [&'static [NoteValue]] {
    match feel {
        Feel::Smooth => SMOOTH_PATTERNS,
        Feel::Energetic => ENERGETIC_PATTERNS,
        Feel::Heavy => STEADY_PATTERNS,
    }
}

/// Probability that a step sounds rather than rests.
pub fn play_probability(feel: Feel) -> f64 {
    match feel {
        Feel::Energetic => 0.9,
        Feel::Smooth | Feel::Heavy => 0.7,
    }
}

/// Generate the melody for one section.
///
/// `start_time` is the section's offset from the start of the song in
/// seconds; emitted notes carry absolute times. Panics if `scale` is empty
/// and `beats > 0`.
pub fn generate_melody(
    rng: &mut SongRng,
    scale: &[&str],
    beats: u32,
    start_time: f64,
    beat_duration: f64,
    feel: Feel,
) -> Vec<Note> {
    let patterns = rhythm_patterns(feel);
    let pattern = patterns[rng.index(patterns.len())];
    let keep = play_probability(feel);

    let mut melody = Vec::new();
    let mut time = start_time;

    for step in 0..beats as usize {
        let name = scale[rng.index(scale.len())];
        let octave = OCTAVES[rng.index(OCTAVES.len())];
        let duration = pattern[step % pattern.len()];

        if rng.random_bool(keep) {
            melody.push(Note {
                pitch: format!("{name}{octave}"),
                duration,
                time,
            });
        }

        time += duration.seconds(beat_duration);
    }

    melody
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::Key;

    const SCALE: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

    #[test]
    fn test_zero_beats_still_draws_pattern() {
        let mut rng = SongRng::new(1);
        let mut mirror = SongRng::new(1);
        let melody = generate_melody(&mut rng, &SCALE, 0, 0.0, 0.5, Feel::Smooth);
        assert!(melody.is_empty());
        mirror.next_f64();
        assert_eq!(rng.next_u64(), mirror.next_u64());
    }

    #[test]
    fn test_draw_count_per_step() {
        let mut rng = SongRng::new(2);
        let mut mirror = SongRng::new(2);
        generate_melody(&mut rng, &SCALE, 16, 0.0, 0.5, Feel::Energetic);
        for _ in 0..(1 + 16 * 3) {
            mirror.next_f64();
        }
        assert_eq!(rng.next_u64(), mirror.next_u64());
    }

    #[test]
    fn test_notes_within_span_and_ordered() {
        for seed in 0..50 {
            let mut rng = SongRng::new(seed);
            let start = 3.0;
            let beat = 0.5;
            let beats = 32;
            let melody = generate_melody(&mut rng, &SCALE, beats, start, beat, Feel::Smooth);
            // Smooth patterns never exceed two beats per step.
            let max_end = start + beats as f64 * 2.0 * beat;
            for pair in melody.windows(2) {
                assert!(pair[0].time < pair[1].time, "times must increase");
            }
            for note in &melody {
                assert!(note.time >= start && note.time < max_end, "note at {}", note.time);
            }
        }
    }

    #[test]
    fn test_pitches_come_from_scale() {
        let scale = Key::DMajor.scale_notes();
        let mut rng = SongRng::new(77);
        let melody = generate_melody(&mut rng, &scale, 64, 0.0, 0.4, Feel::Heavy);
        for note in &melody {
            let (name, octave) = note.pitch.split_at(note.pitch.len() - 1);
            assert!(scale.contains(&name), "{} not in D major", note.pitch);
            assert!(octave == "4" || octave == "5", "bad octave in {}", note.pitch);
            assert_eq!(note.duration, NoteValue::Quarter);
        }
    }

    #[test]
    fn test_energetic_is_denser_than_smooth() {
        let mut kept_energetic = 0;
        let mut kept_smooth = 0;
        for seed in 0..40 {
            kept_energetic +=
                generate_melody(&mut SongRng::new(seed), &SCALE, 100, 0.0, 0.5, Feel::Energetic).len();
            kept_smooth +=
                generate_melody(&mut SongRng::new(seed), &SCALE, 100, 0.0, 0.5, Feel::Smooth).len();
        }
        assert!(kept_energetic > kept_smooth);
        // ~90% of 4000 steps.
        assert!((3400..3800).contains(&kept_energetic), "got {kept_energetic}");
    }

    #[test]
    fn test_rests_advance_time() {
        // With a fixed quarter-note pattern each step is exactly one beat, so
        // every emitted note sits on a whole-beat offset even after rests.
        let mut rng = SongRng::new(5);
        let melody = generate_melody(&mut rng, &SCALE, 40, 0.0, 1.0, Feel::Heavy);
        assert!(melody.len() < 40, "expected some rests");
        for note in &melody {
            assert_eq!(note.time.fract(), 0.0);
        }
    }
}
