// The twelve equal-tempered pitch classes.
//
// A pitch class identifies a tone independent of octave, so the whole
// space is the integers mod 12. Transposition is addition in that space;
// equality is equality of the underlying value, which makes enharmonic
// spellings ("Bb" and "A#") the same pitch class by construction.
//
// Display names use the flat/sharp dual form ("Bb/A#") throughout the
// system. Engraving names are the lowercase LilyPond forms in the English
// note language, where flats take an "f" suffix ("bf").

use crate::error::TheoryError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the twelve pitch classes, discriminants 0-11.
///
/// Immutable `Copy` value type. Two values constructed from different
/// spellings of the same tone compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    Ab = 0,
    A = 1,
    Bb = 2,
    B = 3,
    C = 4,
    Db = 5,
    D = 6,
    Eb = 7,
    E = 8,
    F = 9,
    Gb = 10,
    G = 11,
}

impl PitchClass {
    /// All twelve pitch classes in discriminant order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::Ab,
        PitchClass::A,
        PitchClass::Bb,
        PitchClass::B,
        PitchClass::C,
        PitchClass::Db,
        PitchClass::D,
        PitchClass::Eb,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Gb,
        PitchClass::G,
    ];

    /// Construct from an index in 0..12.
    pub fn from_index(index: i64) -> Result<Self, TheoryError> {
        if (0..12).contains(&index) {
            Ok(Self::ALL[index as usize])
        } else {
            Err(TheoryError::InvalidPitchClass(format!(
                "index {index} outside 0..12"
            )))
        }
    }

    /// Construct from a spelling: a natural letter ("A"), a flat ("Bb"),
    /// a sharp ("A#"), or the canonical dual form ("Bb/A#"). The letter's
    /// case is normalized.
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        // The dual form names the flat spelling first; either half works
        // on its own.
        let token = name.trim();
        let token = token.split('/').next().unwrap_or(token);
        let normalized = normalize_spelling(token);
        match normalized.as_str() {
            "A" => Ok(Self::A),
            "Bb" | "A#" => Ok(Self::Bb),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "Db" | "C#" => Ok(Self::Db),
            "D" => Ok(Self::D),
            "Eb" | "D#" => Ok(Self::Eb),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            "Gb" | "F#" => Ok(Self::Gb),
            "G" => Ok(Self::G),
            "Ab" | "G#" => Ok(Self::Ab),
            _ => Err(TheoryError::InvalidPitchClass(format!(
                "no spelling matches '{name}'"
            ))),
        }
    }

    /// Uniform draw over the twelve values.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// The value in 0..12.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Transpose by `offset` semitones, wrapping mod 12. Negative offsets
    /// are fine; the result is always a valid pitch class.
    pub fn add(self, offset: i64) -> Self {
        let value = (self as i64 + offset).rem_euclid(12);
        Self::ALL[value as usize]
    }

    /// Canonical display name, using the flat/sharp dual form where the
    /// tone has two common spellings.
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Bb => "Bb/A#",
            Self::B => "B",
            Self::C => "C",
            Self::Db => "Db/C#",
            Self::D => "D",
            Self::Eb => "Eb/D#",
            Self::E => "E",
            Self::F => "F",
            Self::Gb => "Gb/F#",
            Self::G => "G",
            Self::Ab => "Ab/G#",
        }
    }

    /// Engraving name for LilyPond's English note language: lowercase
    /// letter, flats spelled with an "f" suffix.
    pub fn ly_name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::Bb => "bf",
            Self::B => "b",
            Self::C => "c",
            Self::Db => "df",
            Self::D => "d",
            Self::Eb => "ef",
            Self::E => "e",
            Self::F => "f",
            Self::Gb => "gf",
            Self::G => "g",
            Self::Ab => "af",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uppercase the letter, lowercase any accidental letter ("bb" -> "Bb",
/// "a#" -> "A#").
fn normalize_spelling(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(letter) => {
            let mut out = String::new();
            out.push(letter.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}
