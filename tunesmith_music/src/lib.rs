// Tunesmith Music Generator
//
// Produces the musical content of a catalogue entry from an item seed and a
// free-text genre label: key, tempo, a chord progression shared by every
// section, and a rhythmically varied melody per section laid out on a single
// clock. Output is plain data (`AudioData`) that a player or the MIDI
// exporter renders; no audio is synthesized here.
//
// Architecture:
// - theory.rs: Keys, scales, roman-numeral chord resolution, pitch parsing
// - genre.rs: Genre label classification into tempo/progression/form profiles
// - duration.rs: Symbolic note lengths ("4n", "16n") and their length in seconds
// - melody.rs: Per-section melody walk (rhythm pattern, scale notes, rests)
// - song.rs: Song assembly from a seeded stream; the `AudioData` shape
// - midi.rs: Standard MIDI File export of assembled songs
// - error.rs: Theory parse and export errors
//
// The generator is deterministic given an item seed, supporting reproducible
// output across processes and threads.

pub mod duration;
pub mod error;
pub mod genre;
pub mod melody;
pub mod midi;
pub mod song;
pub mod theory;

pub use error::{ExportError, TheoryError};
pub use song::{AudioData, Note, SongSection, assemble};
pub use theory::Key;
