// Symbolic note lengths and their conversion to seconds.
//
// Note lengths use the "Nn" notation downstream players understand: "1n" is a
// whole note, "4n" a quarter note (one beat), "16n" a sixteenth. A beat lasts
// `60 / tempo` seconds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A symbolic note length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteValue {
    #[serde(rename = "1n")]
    Whole,
    #[serde(rename = "2n")]
    Half,
    #[serde(rename = "4n")]
    Quarter,
    #[serde(rename = "8n")]
    Eighth,
    #[serde(rename = "16n")]
    Sixteenth,
}

impl NoteValue {
    pub fn symbol(self) -> &'static str {
        match self {
            NoteValue::Whole => "1n",
            NoteValue::Half => "2n",
            NoteValue::Quarter => "4n",
            NoteValue::Eighth => "8n",
            NoteValue::Sixteenth => "16n",
        }
    }

    /// Length in beats (quarter note = 1).
    pub fn beats(self) -> f64 {
        match self {
            NoteValue::Whole => 4.0,
            NoteValue::Half => 2.0,
            NoteValue::Quarter => 1.0,
            NoteValue::Eighth => 0.5,
            NoteValue::Sixteenth => 0.25,
        }
    }

    /// Length in seconds for the given beat duration.
    pub fn seconds(self, beat_duration: f64) -> f64 {
        match self {
            NoteValue::Whole => beat_duration * 4.0,
            NoteValue::Half => beat_duration * 2.0,
            NoteValue::Quarter => beat_duration,
            NoteValue::Eighth => beat_duration / 2.0,
            NoteValue::Sixteenth => beat_duration / 4.0,
        }
    }
}

impl fmt::Display for NoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned for symbols outside the duration table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSymbol;

impl FromStr for NoteValue {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1n" => Ok(NoteValue::Whole),
            "2n" => Ok(NoteValue::Half),
            "4n" => Ok(NoteValue::Quarter),
            "8n" => Ok(NoteValue::Eighth),
            "16n" => Ok(NoteValue::Sixteenth),
            _ => Err(UnknownSymbol),
        }
    }
}

/// Seconds for a symbolic length; unrecognized symbols last one beat.
pub fn duration_seconds(symbol: &str, beat_duration: f64) -> f64 {
    symbol
        .parse::<NoteValue>()
        .map_or(beat_duration, |value| value.seconds(beat_duration))
}

/// Seconds per beat at `tempo` BPM.
pub fn beat_duration(tempo: u32) -> f64 {
    60.0 / tempo as f64
}
