// Chords: a root pitch class plus a quality.
//
// The note set is a pure function of (root, quality) and is re-derived on
// demand rather than cached. Equality is by (root, quality) only: two
// chords that happen to share notes are still different chords, which
// callers must respect (C diminished and Eb diminished stay distinct).

use crate::error::TheoryError;
use crate::pitch::PitchClass;
use crate::quality::{Quality, QualityPool};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A chord, compared and hashed by (root, quality).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub root: PitchClass,
    pub quality: Quality,
}

impl Chord {
    pub fn new(root: PitchClass, quality: Quality) -> Self {
        Chord { root, quality }
    }

    /// Parse `"<root>"` (quality defaults to dominant) or
    /// `"<root> <quality>"`, whitespace-delimited.
    pub fn parse(text: &str) -> Result<Self, TheoryError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [root] => Ok(Chord::new(PitchClass::from_name(root)?, Quality::Dom)),
            [root, quality] => Ok(Chord::new(
                PitchClass::from_name(root)?,
                Quality::from_name(quality)?,
            )),
            _ => Err(TheoryError::InvalidChordSpec(format!(
                "expected '<root>' or '<root> <quality>', got '{text}'"
            ))),
        }
    }

    /// Random root crossed with a random quality from the pool.
    pub fn random(pool: QualityPool, rng: &mut impl Rng) -> Self {
        Chord::new(PitchClass::random(rng), Quality::random(pool, rng))
    }

    /// The chord's pitch classes in the quality's offset order, root
    /// first. Pure and deterministic.
    pub fn notes(&self) -> Vec<PitchClass> {
        self.quality
            .offsets()
            .iter()
            .map(|&offset| self.root.add(offset as i64))
            .collect()
    }

    /// Whether the pitch class sounds in this chord.
    pub fn contains(&self, pc: PitchClass) -> bool {
        self.notes().contains(&pc)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.quality)
    }
}

impl FromStr for Chord {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn notes_start_at_the_root() {
        for root in PitchClass::ALL {
            for quality in Quality::ALL {
                let chord = Chord::new(root, quality);
                assert_eq!(chord.notes()[0], root, "{chord} should be rooted");
                assert_eq!(chord.notes().len(), quality.offsets().len());
            }
        }
    }

    #[test]
    fn c_major_spells_c_e_g_b() {
        let chord = Chord::parse("C Maj").unwrap();
        assert_eq!(
            chord.notes(),
            vec![PitchClass::C, PitchClass::E, PitchClass::G, PitchClass::B]
        );
    }

    #[test]
    fn contains_is_note_membership() {
        let chord = Chord::parse("C Maj").unwrap();
        assert!(chord.contains(PitchClass::E));
        assert!(chord.contains(PitchClass::B));
        assert!(!chord.contains(PitchClass::F));
    }

    #[test]
    fn bare_root_defaults_to_dominant() {
        let chord = Chord::parse("G").unwrap();
        assert_eq!(chord, Chord::new(PitchClass::G, Quality::Dom));
    }

    #[test]
    fn malformed_specs_are_rejected() {
        for bad in ["", "C Maj extra", "  "] {
            assert!(
                matches!(
                    Chord::parse(bad),
                    Err(TheoryError::InvalidChordSpec(_))
                ),
                "expected rejection of '{bad}'"
            );
        }
        // Bad tokens fail with the underlying taxonomy entry.
        assert!(matches!(
            Chord::parse("H Maj"),
            Err(TheoryError::InvalidPitchClass(_))
        ));
        assert!(matches!(
            Chord::parse("C blues"),
            Err(TheoryError::UnknownQuality(_))
        ));
    }

    #[test]
    fn display_round_trips_for_every_chord() {
        for root in PitchClass::ALL {
            for quality in Quality::ALL {
                let chord = Chord::new(root, quality);
                let reparsed: Chord = chord.to_string().parse().unwrap();
                assert_eq!(reparsed, chord, "'{chord}' should round-trip");
            }
        }
    }

    #[test]
    fn equality_is_by_root_and_quality_not_note_set() {
        // C dim and Eb dim share a diminished-seventh pitch collection up
        // to rotation; they must still be distinct chords.
        let c_dim = Chord::new(PitchClass::C, Quality::Dim);
        let eb_dim = Chord::new(PitchClass::Eb, Quality::Dim);
        assert_ne!(c_dim, eb_dim);
        assert_eq!(c_dim, Chord::new(PitchClass::C, Quality::Dim));
    }

    #[test]
    fn random_draws_stay_in_the_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let chord = Chord::random(QualityPool::Main, &mut rng);
            assert!(Quality::MAIN.contains(&chord.quality));
        }
    }

    #[test]
    fn serde_round_trip() {
        let chord = Chord::new(PitchClass::Bb, Quality::HalfDim);
        let json = serde_json::to_string(&chord).unwrap();
        let back: Chord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chord);
    }
}
