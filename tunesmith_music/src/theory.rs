// Key and chord resolution for song generation.
//
// Songs are written in one of five fixed keys. Each key exposes its seven
// scale notes in ascending order from the tonic; chords are resolved from
// roman-numeral scale degrees against that scale. Upper-case numerals give
// major chords (bare root), lower-case numerals give minor chords ("m").
//
// This module provides:
// - `Key` with its scale table
// - `Degree`, a parsed roman numeral
// - `resolve_chord` / `resolve_chord_symbol` for chord symbols
// - `pitch_to_midi` for the MIDI exporter
//
// Used by genre.rs (progression tables), song.rs (assembly), and midi.rs.

use crate::error::TheoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The keys a generated song can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    #[serde(rename = "C major")]
    CMajor,
    #[serde(rename = "G major")]
    GMajor,
    #[serde(rename = "D major")]
    DMajor,
    #[serde(rename = "A minor")]
    AMinor,
    #[serde(rename = "E minor")]
    EMinor,
}

impl Key {
    /// All keys in draw order. The song assembler indexes into this list.
    pub const ALL: [Key; 5] = [Key::CMajor, Key::GMajor, Key::DMajor, Key::AMinor, Key::EMinor];

    /// Display name, e.g. "C major".
    pub fn name(self) -> &'static str {
        match self {
            Key::CMajor => "C major",
            Key::GMajor => "G major",
            Key::DMajor => "D major",
            Key::AMinor => "A minor",
            Key::EMinor => "E minor",
        }
    }

    /// The seven scale notes, ascending from the tonic.
    pub fn scale_notes(self) -> [&'static str; 7] {
        match self {
            Key::CMajor => ["C", "D", "E", "F", "G", "A", "B"],
            Key::GMajor => ["G", "A", "B", "C", "D", "E", "F#"],
            Key::DMajor => ["D", "E", "F#", "G", "A", "B", "C#"],
            Key::AMinor => ["A", "B", "C", "D", "E", "F", "G"],
            Key::EMinor => ["E", "F#", "G", "A", "B", "C", "D"],
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = TheoryError;

    /// Case-insensitive; surrounding and repeated whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        Key::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| TheoryError::UnknownKey(s.to_string()))
    }
}

/// A roman-numeral scale degree: position 0-6 plus chord quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Degree {
    index: u8,
    minor: bool,
}

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

impl Degree {
    /// Major chord on scale position `index` (0 = tonic).
    pub const fn major(index: u8) -> Self {
        assert!(index < 7, "scale degree index out of range");
        Degree { index, minor: false }
    }

    /// Minor chord on scale position `index` (0 = tonic).
    pub const fn minor(index: u8) -> Self {
        assert!(index < 7, "scale degree index out of range");
        Degree { index, minor: true }
    }

    /// Scale position, 0-6.
    pub fn index(self) -> usize {
        self.index as usize
    }

    pub fn is_minor(self) -> bool {
        self.minor
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = NUMERALS[self.index()];
        if self.minor {
            f.write_str(&numeral.to_lowercase())
        } else {
            f.write_str(numeral)
        }
    }
}

impl FromStr for Degree {
    type Err = TheoryError;

    /// Accepts `I`..`VII` in all upper case (major) or all lower case (minor).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        let minor = if s == upper {
            false
        } else if s == s.to_ascii_lowercase() {
            true
        } else {
            return Err(TheoryError::UnknownNumeral(s.to_string()));
        };
        let index = NUMERALS
            .iter()
            .position(|&n| n == upper)
            .ok_or_else(|| TheoryError::UnknownNumeral(s.to_string()))?;
        Ok(Degree {
            index: index as u8,
            minor,
        })
    }
}

/// Resolve a scale degree to a chord symbol in `key`.
///
/// Root is the key's scale note at the degree's position; the symbol is the
/// root followed by "m" for minor degrees.
pub fn resolve_chord(degree: Degree, key: Key) -> String {
    let root = key.scale_notes()[degree.index()];
    if degree.is_minor() {
        format!("{root}m")
    } else {
        root.to_string()
    }
}

/// Resolve a roman-numeral string to a chord symbol in `key`.
///
/// Errors if `numeral` is not one of `I..VII` (see `Degree::from_str`).
pub fn resolve_chord_symbol(numeral: &str, key: Key) -> Result<String, TheoryError> {
    Ok(resolve_chord(numeral.parse()?, key))
}

/// Semitone offset from C for a note name such as "C", "F#", or "Bb".
fn pitch_class(name: &str) -> Option<u8> {
    let mut chars = name.chars();
    let base: i8 = match chars.next()? {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };
    let mut pc = base;
    for c in chars {
        pc = match c {
            '#' => (pc + 1).rem_euclid(12),
            'b' => (pc - 1).rem_euclid(12),
            _ => return None,
        };
    }
    Some(pc as u8)
}

/// Convert a pitch such as "F#5" to a MIDI note number (C4 = 60).
pub fn pitch_to_midi(pitch: &str) -> Result<u8, TheoryError> {
    let bad = || TheoryError::BadPitch(pitch.to_string());
    let split = pitch
        .find(|c: char| c.is_ascii_digit() || c == '-')
        .ok_or_else(bad)?;
    let (name, octave) = pitch.split_at(split);
    let pc = pitch_class(name).ok_or_else(bad)?;
    let octave: i8 = octave.parse().map_err(|_| bad())?;
    let midi = (octave as i16 + 1) * 12 + pc as i16;
    u8::try_from(midi)
        .ok()
        .filter(|&m| m <= 127)
        .ok_or_else(bad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_notes() {
        assert_eq!(Key::CMajor.scale_notes(), ["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(Key::EMinor.scale_notes()[1], "F#");
        assert_eq!(Key::DMajor.scale_notes()[6], "C#");
    }

    #[test]
    fn test_resolve_chord_examples() {
        assert_eq!(resolve_chord_symbol("vi", Key::CMajor).unwrap(), "Am");
        assert_eq!(resolve_chord_symbol("IV", Key::CMajor).unwrap(), "F");
        assert_eq!(resolve_chord_symbol("V", Key::GMajor).unwrap(), "D");
        assert_eq!(resolve_chord_symbol("ii", Key::DMajor).unwrap(), "Em");
        assert_eq!(resolve_chord_symbol("VII", Key::EMinor).unwrap(), "D");
    }

    #[test]
    fn test_unknown_numeral_is_an_error() {
        for bad in ["VIII", "", "X", "Iv", "iV", "IIII"] {
            assert_eq!(
                resolve_chord_symbol(bad, Key::CMajor),
                Err(TheoryError::UnknownNumeral(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_degree_display_roundtrip() {
        for s in ["I", "ii", "iii", "IV", "V", "vi", "VII"] {
            let degree: Degree = s.parse().unwrap();
            assert_eq!(degree.to_string(), s);
        }
    }

    #[test]
    fn test_key_parse() {
        assert_eq!("C major".parse::<Key>().unwrap(), Key::CMajor);
        assert_eq!("  a   MINOR ".parse::<Key>().unwrap(), Key::AMinor);
        assert!(matches!("H major".parse::<Key>(), Err(TheoryError::UnknownKey(_))));
    }

    #[test]
    fn test_key_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Key::GMajor).unwrap(), "\"G major\"");
    }

    #[test]
    fn test_pitch_to_midi() {
        assert_eq!(pitch_to_midi("C4").unwrap(), 60);
        assert_eq!(pitch_to_midi("A4").unwrap(), 69);
        assert_eq!(pitch_to_midi("F#5").unwrap(), 78);
        assert_eq!(pitch_to_midi("Bb3").unwrap(), 58);
        assert!(pitch_to_midi("H4").is_err());
        assert!(pitch_to_midi("C").is_err());
        assert!(pitch_to_midi("C99").is_err());
    }
}
