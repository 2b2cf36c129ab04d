// Chord qualities and their sampling pools.
//
// A quality is the harmonic flavor of a chord, defined entirely by its
// ordered semitone offsets from the root (always starting at 0). The set
// is closed: seven variants, of which the first four (major, minor,
// dominant, suspended) form the default "main" sampling pool.
//
// Text lookup tries the short enumerated names first ("Maj", "min",
// "half-dim"), then the full descriptive names ("major",
// "half-diminished"), both case-insensitively.

use crate::error::TheoryError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven chord qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Maj,
    Min,
    Dom,
    Sus,
    HalfDim,
    Dim,
    Aug,
}

impl Quality {
    /// The default sampling pool: the four qualities random progressions
    /// draw from unless the full set is requested.
    pub const MAIN: [Quality; 4] = [Quality::Maj, Quality::Min, Quality::Dom, Quality::Sus];

    /// Every quality, in enumeration order.
    pub const ALL: [Quality; 7] = [
        Quality::Maj,
        Quality::Min,
        Quality::Dom,
        Quality::Sus,
        Quality::HalfDim,
        Quality::Dim,
        Quality::Aug,
    ];

    /// Semitone offsets from the root, in sounding order. The first
    /// offset is always 0 (the root itself).
    pub fn offsets(self) -> &'static [u8] {
        match self {
            Quality::Maj => &[0, 4, 7, 11],
            Quality::Min => &[0, 3, 7, 10],
            Quality::Dom => &[0, 4, 7, 10],
            Quality::Sus => &[0, 5, 7],
            Quality::HalfDim => &[0, 3, 6, 10],
            Quality::Dim => &[0, 3, 6, 9],
            Quality::Aug => &[0, 4, 8],
        }
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Quality::Maj => "Maj",
            Quality::Min => "min",
            Quality::Dom => "dom",
            Quality::Sus => "sus",
            Quality::HalfDim => "half-dim",
            Quality::Dim => "dim",
            Quality::Aug => "aug",
        }
    }

    /// Full descriptive name.
    pub fn full_name(self) -> &'static str {
        match self {
            Quality::Maj => "major",
            Quality::Min => "minor",
            Quality::Dom => "dominant",
            Quality::Sus => "suspended",
            Quality::HalfDim => "half-diminished",
            Quality::Dim => "diminished",
            Quality::Aug => "augmented",
        }
    }

    /// Chord-symbol suffix for the LilyPond renderer ("c1:maj7").
    pub fn ly_suffix(self) -> &'static str {
        match self {
            Quality::Maj => "maj7",
            Quality::Min => "m7",
            Quality::Dom => "7",
            Quality::Sus => "sus4",
            Quality::HalfDim => "m7.5-",
            Quality::Dim => "dim",
            Quality::Aug => "aug",
        }
    }

    /// Case-insensitive lookup: short enumerated names first, then full
    /// descriptive names.
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        let token = name.trim();
        for quality in Quality::ALL {
            if token.eq_ignore_ascii_case(quality.name()) {
                return Ok(quality);
            }
        }
        for quality in Quality::ALL {
            if token.eq_ignore_ascii_case(quality.full_name()) {
                return Ok(quality);
            }
        }
        Err(TheoryError::UnknownQuality(name.to_string()))
    }

    /// Uniform draw from the requested pool.
    pub fn random(pool: QualityPool, rng: &mut impl Rng) -> Self {
        let qualities = pool.qualities();
        qualities[rng.random_range(0..qualities.len())]
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which qualities a sampling operation draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityPool {
    /// Major, minor, dominant, suspended.
    Main,
    /// All seven qualities.
    All,
}

impl QualityPool {
    /// The fixed ordered list for this pool.
    pub fn qualities(self) -> &'static [Quality] {
        match self {
            QualityPool::Main => &Quality::MAIN,
            QualityPool::All => &Quality::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn offsets_start_at_root_and_are_never_empty() {
        for quality in Quality::ALL {
            let offsets = quality.offsets();
            assert!(!offsets.is_empty(), "{quality} has no offsets");
            assert_eq!(offsets[0], 0, "{quality} should start at the root");
        }
    }

    #[test]
    fn short_and_full_names_find_the_same_variant() {
        assert_eq!(
            Quality::from_name("major").unwrap(),
            Quality::from_name("Maj").unwrap()
        );
        assert_eq!(
            Quality::from_name("half-diminished").unwrap(),
            Quality::HalfDim
        );
        assert_eq!(Quality::from_name("HALF-DIM").unwrap(), Quality::HalfDim);
        assert_eq!(Quality::from_name("Suspended").unwrap(), Quality::Sus);
    }

    #[test]
    fn unknown_names_are_rejected() {
        for bad in ["", "majorish", "7th", "Maj Min"] {
            assert!(
                matches!(
                    Quality::from_name(bad),
                    Err(TheoryError::UnknownQuality(_))
                ),
                "expected rejection of '{bad}'"
            );
        }
    }

    #[test]
    fn pools_have_the_documented_sizes() {
        assert_eq!(QualityPool::Main.qualities().len(), 4);
        assert_eq!(QualityPool::All.qualities().len(), 7);
        // The main pool is a prefix of the full enumeration.
        assert_eq!(&Quality::ALL[..4], QualityPool::Main.qualities());
    }

    #[test]
    fn random_respects_the_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let quality = Quality::random(QualityPool::Main, &mut rng);
            assert!(
                Quality::MAIN.contains(&quality),
                "{quality} is outside the main pool"
            );
        }
        let mut seen_beyond_main = false;
        for _ in 0..500 {
            let quality = Quality::random(QualityPool::All, &mut rng);
            if !Quality::MAIN.contains(&quality) {
                seen_beyond_main = true;
            }
        }
        assert!(
            seen_beyond_main,
            "500 full-pool draws should hit a non-main quality"
        );
    }
}
