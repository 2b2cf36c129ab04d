// Scales: a root pitch class plus a mode's interval pattern.
//
// The mode set covers the chromatic scale, the seven church modes, and
// the major pentatonic. Membership is strict: a chord is diatonic to a
// scale only when every one of its notes is, not merely its root.
// `diatonic_chords` enumerates the full diatonic chord inventory by
// crossing every scale degree with every quality.

use crate::chord::Chord;
use crate::error::TheoryError;
use crate::pitch::PitchClass;
use crate::quality::Quality;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named interval pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Chromatic,
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
    Pentatonic,
}

impl Mode {
    pub const ALL: [Mode; 9] = [
        Mode::Chromatic,
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
        Mode::Pentatonic,
    ];

    /// Semitone offsets from the root to each scale degree.
    pub fn offsets(self) -> &'static [u8] {
        match self {
            Mode::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            Mode::Ionian => &[0, 2, 4, 5, 7, 9, 11],
            Mode::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Mode::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Mode::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Mode::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Mode::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
            Mode::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            Mode::Pentatonic => &[0, 2, 4, 7, 9],
        }
    }

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Chromatic => "Chromatic",
            Mode::Ionian => "Ionian",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Aeolian",
            Mode::Locrian => "Locrian",
            Mode::Pentatonic => "Pentatonic",
        }
    }

    /// Case-insensitive lookup, including the conventional aliases
    /// (major/maj for Ionian, minor/min for Aeolian, penta for
    /// Pentatonic) and the "mixolidian" spelling some sources use.
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        let mode = match name.trim().to_ascii_lowercase().as_str() {
            "chromatic" => Mode::Chromatic,
            "ionian" | "major" | "maj" => Mode::Ionian,
            "dorian" => Mode::Dorian,
            "phrygian" => Mode::Phrygian,
            "lydian" => Mode::Lydian,
            "mixolydian" | "mixolidian" => Mode::Mixolydian,
            "aeolian" | "minor" | "min" => Mode::Aeolian,
            "locrian" => Mode::Locrian,
            "pentatonic" | "penta" => Mode::Pentatonic,
            _ => {
                return Err(TheoryError::InvalidScaleSpec(format!(
                    "unknown mode '{name}'"
                )));
            }
        };
        Ok(mode)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scale: every pitch class reachable from `root` through the mode's
/// offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scale {
    pub root: PitchClass,
    pub mode: Mode,
}

impl Scale {
    pub fn new(root: PitchClass, mode: Mode) -> Self {
        Scale { root, mode }
    }

    /// Parse `"<root>"` (mode defaults to Ionian) or `"<root> <mode>"`,
    /// whitespace-delimited.
    pub fn parse(text: &str) -> Result<Self, TheoryError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [root] => Ok(Scale::new(PitchClass::from_name(root)?, Mode::Ionian)),
            [root, mode] => Ok(Scale::new(
                PitchClass::from_name(root)?,
                Mode::from_name(mode)?,
            )),
            _ => Err(TheoryError::InvalidScaleSpec(format!(
                "expected '<root>' or '<root> <mode>', got '{text}'"
            ))),
        }
    }

    /// The scale's pitch classes in degree order.
    pub fn notes(&self) -> Vec<PitchClass> {
        self.mode
            .offsets()
            .iter()
            .map(|&offset| self.root.add(offset as i64))
            .collect()
    }

    /// Whether the pitch class is a scale degree.
    pub fn contains(&self, pc: PitchClass) -> bool {
        self.notes().contains(&pc)
    }

    /// Whether every note of the chord is a scale degree. A chord whose
    /// root fits but whose upper notes leave the scale is not diatonic.
    pub fn contains_chord(&self, chord: &Chord) -> bool {
        let notes = self.notes();
        chord.notes().iter().all(|note| notes.contains(note))
    }

    /// Every diatonic chord: each scale degree as a candidate root,
    /// crossed with every quality, kept when the whole chord fits.
    /// Ordered by degree, then by quality enumeration order.
    pub fn diatonic_chords(&self) -> Vec<Chord> {
        let mut chords = Vec::new();
        for root in self.notes() {
            for quality in Quality::ALL {
                let chord = Chord::new(root, quality);
                if self.contains_chord(&chord) {
                    chords.push(chord);
                }
            }
        }
        chords
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.mode)
    }
}

impl FromStr for Scale {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::parse(s)
    }
}
