// MIDI export of generated songs.
//
// Converts `AudioData` into a Standard MIDI File (SMF Format 1) so the export
// path can re-render a catalogue entry from the same data the player uses.
// Track 0 carries the tempo, track 1 the melody, track 2 the progression as
// one triad per bar (cycling the shared chord list within each section).
//
// Note times are absolute seconds in `AudioData`; they are converted back to
// beats with the song's beat duration and quantized to ticks. Events are
// collected per track, sorted by tick (note-offs first at equal ticks), and
// written as deltas.
//
// Uses the `midly` crate for MIDI writing.

use crate::error::{ExportError, TheoryError};
use crate::song::{AudioData, BEATS_PER_BAR};
use crate::theory::pitch_to_midi;
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;

/// Ticks per quarter note in MIDI output.
const TICKS_PER_QUARTER: u16 = 480;

/// Octave chord roots are voiced in.
const CHORD_OCTAVE: i8 = 3;

const MELODY_CHANNEL: u8 = 0;
const CHORD_CHANNEL: u8 = 1;

/// General MIDI programs: acoustic grand piano, string ensemble.
const MELODY_PROGRAM: u8 = 0;
const CHORD_PROGRAM: u8 = 48;

/// Write a song to a `.mid` file.
pub fn write_midi(audio: &AudioData, path: &Path) -> Result<(), ExportError> {
    let smf = song_to_smf(audio)?;
    smf.save(path)?;
    Ok(())
}

/// Encode a song as SMF bytes.
pub fn midi_bytes(audio: &AudioData) -> Result<Vec<u8>, ExportError> {
    let smf = song_to_smf(audio)?;
    let mut buf = Vec::new();
    smf.write_std(&mut buf)?;
    Ok(buf)
}

/// A note-on or note-off at an absolute tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Event {
    tick: u32,
    /// 0 = note-off, 1 = note-on; orders offs before ons at the same tick.
    on: u8,
    key: u8,
}

fn seconds_to_ticks(seconds: f64, beat_duration: f64) -> u32 {
    (seconds / beat_duration * TICKS_PER_QUARTER as f64).round() as u32
}

fn song_to_smf(audio: &AudioData) -> Result<Smf<'static>, ExportError> {
    let micros_per_quarter = 60_000_000u32
        .checked_div(audio.tempo)
        .filter(|&m| m <= 0xFF_FFFF)
        .ok_or(ExportError::Tempo(audio.tempo))?;

    let mut smf = Smf::new(Header::new(
        Format::Parallel,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));

    smf.tracks.push(vec![
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(micros_per_quarter))),
        },
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::TimeSignature(4, 2, 24, 8)),
        },
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        },
    ]);

    smf.tracks
        .push(events_to_track(b"Melody", MELODY_CHANNEL, MELODY_PROGRAM, melody_events(audio)?));
    smf.tracks
        .push(events_to_track(b"Chords", CHORD_CHANNEL, CHORD_PROGRAM, chord_events(audio)?));

    Ok(smf)
}

/// Melody note-on/off pairs.
///
/// Smooth melodies can run past their section and overlap the next one. A
/// note is cut at the next onset of the same key, and a second onset of a
/// key at the same tick is dropped, so a key is never switched on twice.
fn melody_events(audio: &AudioData) -> Result<Vec<Event>, TheoryError> {
    let beat = audio.beat_duration();
    let mut notes = Vec::new();
    for note in audio.structure.iter().flat_map(|s| &s.melody) {
        let key = pitch_to_midi(&note.pitch)?;
        let start = seconds_to_ticks(note.time, beat);
        let length = (note.duration.beats() * TICKS_PER_QUARTER as f64).round() as u32;
        notes.push((key, start, start + length));
    }
    notes.sort_unstable();
    notes.dedup_by_key(|&mut (key, start, _)| (key, start));

    let mut events = Vec::with_capacity(notes.len() * 2);
    for (i, &(key, start, end)) in notes.iter().enumerate() {
        let end = match notes.get(i + 1) {
            Some(&(next_key, next_start, _)) if next_key == key => end.min(next_start),
            _ => end,
        };
        events.push(Event { tick: start, on: 1, key });
        events.push(Event { tick: end, on: 0, key });
    }
    Ok(events)
}

/// Triad pitches for a chord symbol such as "F#m".
fn triad(symbol: &str) -> Result<[u8; 3], TheoryError> {
    let (root, third) = match symbol.strip_suffix('m') {
        Some(root) => (root, 3),
        None => (symbol, 4),
    };
    let root = pitch_to_midi(&format!("{root}{CHORD_OCTAVE}"))?;
    Ok([root, root + third, root + 7])
}

fn chord_events(audio: &AudioData) -> Result<Vec<Event>, TheoryError> {
    let bar_ticks = BEATS_PER_BAR * TICKS_PER_QUARTER as u32;
    let beat = audio.beat_duration();
    let mut events = Vec::new();
    for (section, start) in audio.structure.iter().zip(audio.section_starts()) {
        if section.chords.is_empty() {
            continue;
        }
        let section_tick = seconds_to_ticks(start, beat);
        for bar in 0..section.bars {
            let tick = section_tick + bar * bar_ticks;
            let chord = &section.chords[bar as usize % section.chords.len()];
            for key in triad(chord)? {
                events.push(Event { tick, on: 1, key });
                events.push(Event {
                    tick: tick + bar_ticks,
                    on: 0,
                    key,
                });
            }
        }
    }
    Ok(events)
}

fn events_to_track(
    name: &'static [u8],
    channel: u8,
    program: u8,
    mut events: Vec<Event>,
) -> Track<'static> {
    events.sort_unstable();
    let channel = u4::new(channel);

    let mut track: Track<'static> = vec![
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::TrackName(name)),
        },
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Midi {
                channel,
                message: MidiMessage::ProgramChange {
                    program: u7::new(program),
                },
            },
        },
    ];

    let mut last_tick = 0;
    for event in events {
        let key = u7::new(event.key);
        let message = if event.on == 1 {
            MidiMessage::NoteOn { key, vel: u7::new(80) }
        } else {
            MidiMessage::NoteOff { key, vel: u7::new(0) }
        };
        track.push(TrackEvent {
            delta: u28::new(event.tick - last_tick),
            kind: TrackEventKind::Midi { channel, message },
        });
        last_tick = event.tick;
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    track
}
