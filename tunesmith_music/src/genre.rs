// Genre classification: maps a free-text genre label to a structural profile.
//
// Before generating any notes, the song assembler needs the piece's form:
// tempo range, candidate chord progressions, the ordered section layout, and
// the rhythmic feel. Those come from a fixed table of four profiles selected
// by case-insensitive substring rules, checked in order (first match wins,
// so "Jazz-Rock" is a rock song). Anything unrecognized gets the ambient
// profile; classification never fails.
//
// Consumed by song.rs (tempo/progression/section choices) and melody.rs
// (via `Feel`).

use crate::theory::Degree;
use serde::{Deserialize, Serialize};

/// Coarse rhythmic style controlling rhythm patterns and note density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feel {
    Smooth,
    Energetic,
    /// No built-in profile uses this yet; it takes the fallback rhythm set.
    Heavy,
}

/// One planned section of a song's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionPlan {
    pub name: &'static str,
    /// Bars of 4/4.
    pub bars: u32,
}

/// The structural profile for a genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreParams {
    /// Tempo bounds in BPM, `[low, high)`.
    pub tempo_range: (u32, u32),
    /// Candidate progressions; the assembler picks one per song.
    pub progressions: &'static [&'static [Degree]],
    /// Section layout in playing order.
    pub structure: &'static [SectionPlan],
    pub rhythm_style: Feel,
}

/// The four built-in genre profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenreProfile {
    Rock,
    Jazz,
    Pop,
    Ambient,
}

const I: Degree = Degree::major(0);
const II_MIN: Degree = Degree::minor(1);
const IV: Degree = Degree::major(3);
const V: Degree = Degree::major(4);
const VI_MIN: Degree = Degree::minor(5);

const fn section(name: &'static str, bars: u32) -> SectionPlan {
    SectionPlan { name, bars }
}

static ROCK: GenreParams = GenreParams {
    tempo_range: (120, 160),
    progressions: &[&[I, V, VI_MIN, IV], &[I, IV, V, V]],
    structure: &[
        section("intro", 4),
        section("verse", 8),
        section("chorus", 8),
        section("verse", 8),
        section("chorus", 8),
        section("bridge", 4),
        section("chorus", 8),
    ],
    rhythm_style: Feel::Energetic,
};

static JAZZ: GenreParams = GenreParams {
    tempo_range: (80, 120),
    progressions: &[&[I, IV, I, V], &[I, VI_MIN, II_MIN, V]],
    structure: &[
        section("intro", 4),
        section("verse", 12),
        section("chorus", 8),
        section("verse", 12),
    ],
    rhythm_style: Feel::Smooth,
};

static POP: GenreParams = GenreParams {
    tempo_range: (100, 130),
    progressions: &[&[I, V, VI_MIN, IV], &[VI_MIN, IV, I, V]],
    structure: &[
        section("intro", 4),
        section("verse", 8),
        section("chorus", 8),
        section("verse", 8),
        section("chorus", 8),
    ],
    rhythm_style: Feel::Energetic,
};

static AMBIENT: GenreParams = GenreParams {
    tempo_range: (60, 100),
    progressions: &[&[I, IV, V, I], &[I, VI_MIN, IV, V]],
    structure: &[section("intro", 8), section("main", 16), section("outro", 8)],
    rhythm_style: Feel::Smooth,
};

/// Classification rules in priority order.
const RULES: [(&[&str], GenreProfile); 3] = [
    (&["rock", "metal"], GenreProfile::Rock),
    (&["jazz", "blues"], GenreProfile::Jazz),
    (&["pop", "dance"], GenreProfile::Pop),
];

impl GenreProfile {
    /// Classify a genre label. Total: unknown labels are `Ambient`.
    pub fn classify(label: &str) -> Self {
        let lower = label.to_lowercase();
        RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
            .map_or(GenreProfile::Ambient, |&(_, profile)| profile)
    }

    pub fn params(self) -> &'static GenreParams {
        match self {
            GenreProfile::Rock => &ROCK,
            GenreProfile::Jazz => &JAZZ,
            GenreProfile::Pop => &POP,
            GenreProfile::Ambient => &AMBIENT,
        }
    }
}

/// Structural profile for a free-text genre label.
pub fn params_for(label: &str) -> &'static GenreParams {
    GenreProfile::classify(label).params()
}

impl GenreParams {
    /// Total bars across all sections.
    pub fn total_bars(&self) -> u32 {
        self.structure.iter().map(|s| s.bars).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_labels() {
        assert_eq!(params_for("Death Metal").rhythm_style, Feel::Energetic);
        assert_eq!(params_for("Smooth Jazz").rhythm_style, Feel::Smooth);
        assert_eq!(params_for("xyz-unknown").tempo_range, (60, 100));
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(GenreProfile::classify("ROCK"), GenreProfile::Rock);
        assert_eq!(GenreProfile::classify("Delta Blues"), GenreProfile::Jazz);
        assert_eq!(GenreProfile::classify("Synth Pop"), GenreProfile::Pop);
        assert_eq!(GenreProfile::classify("Dance"), GenreProfile::Pop);
        assert_eq!(GenreProfile::classify(""), GenreProfile::Ambient);
        // Cyrillic labels match no rule.
        assert_eq!(GenreProfile::classify("Рок"), GenreProfile::Ambient);
    }

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(GenreProfile::classify("jazz-rock"), GenreProfile::Rock);
        assert_eq!(GenreProfile::classify("Blues Pop"), GenreProfile::Jazz);
        assert_eq!(GenreProfile::classify("Pop Metal"), GenreProfile::Rock);
    }

    #[test]
    fn test_profile_shapes() {
        assert_eq!(ROCK.structure.len(), 7);
        assert_eq!(JAZZ.structure.len(), 4);
        assert_eq!(POP.structure.len(), 5);
        assert_eq!(AMBIENT.structure.len(), 3);
        assert_eq!(JAZZ.total_bars(), 36);
        assert_eq!(AMBIENT.total_bars(), 32);
        for profile in [GenreProfile::Rock, GenreProfile::Jazz, GenreProfile::Pop, GenreProfile::Ambient] {
            let params = profile.params();
            assert_eq!(params.progressions.len(), 2);
            assert!(params.tempo_range.0 < params.tempo_range.1);
            assert!(params.progressions.iter().all(|p| p.len() == 4));
        }
    }

    #[test]
    fn test_progression_numerals() {
        let rendered: Vec<String> = JAZZ.progressions[1].iter().map(|d| d.to_string()).collect();
        assert_eq!(rendered, ["I", "vi", "ii", "V"]);
        let rendered: Vec<String> = POP.progressions[1].iter().map(|d| d.to_string()).collect();
        assert_eq!(rendered, ["vi", "IV", "I", "V"]);
    }
}
