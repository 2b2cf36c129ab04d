// LilyPond score output for generated progressions.
//
// Two token kinds per chord feed the score: a chord-symbol token for the
// \chords line ("c1:maj7") and a stacked-note token for the staff
// ("< c e g b >"). The full template declares \language "english",
// which the engraving names require: flats are spelled with an "f"
// suffix ("bf"), not LilyPond's default Dutch "bes".
//
// Rendering refuses to run before the generator holds a non-empty
// sequence; that precondition belongs to the core, not the engraver.

use crate::progression::ProgressionGenerator;
use cadenza_theory::chord::Chord;
use std::fmt::Write;
use std::path::Path;
use thiserror::Error;

/// Errors from score rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The generator has no chord sequence to render yet.
    #[error("chords not yet generated")]
    ChordsNotGenerated,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Chord-symbol token for the \chords line, e.g. "c1:maj7".
pub fn chord_symbol(chord: &Chord) -> String {
    format!("{}1:{}", chord.root.ly_name(), chord.quality.ly_suffix())
}

/// Stacked-note token for the staff, e.g. "< c e g b >".
pub fn chord_notes(chord: &Chord) -> String {
    let mut out = String::from("< ");
    for note in chord.notes() {
        out.push_str(note.ly_name());
        out.push(' ');
    }
    out.push('>');
    out
}

/// Render a complete engravable score from a finished progression.
pub fn progression_to_lilypond(
    generator: &ProgressionGenerator,
    title: Option<&str>,
) -> Result<String, RenderError> {
    if !generator.has_generated_chords() {
        return Err(RenderError::ChordsNotGenerated);
    }
    let chords = generator.chords();

    let mut ly = String::new();
    ly.push_str("\\version \"2.24.0\"\n");
    ly.push_str("\\language \"english\"\n\n");
    let _ = write!(
        ly,
        "\\header {{\n  title = \"{}\"\n}}\n\n",
        title.unwrap_or("Random Generation")
    );

    ly.push_str("\\score {\n <<\n  \\tempo 4 = 120\n  \\chords {\n\n");
    let symbols: Vec<String> = chords.iter().map(chord_symbol).collect();
    let _ = writeln!(ly, "   {}", symbols.join(" "));
    ly.push_str("  }\n\n");

    ly.push_str("  \\relative c' {\n   \\numericTimeSignature\n   \\time 4/4\n\n");
    let stacks: Vec<String> = chords.iter().map(chord_notes).collect();
    let _ = writeln!(ly, "   {}", stacks.join("\n   "));
    ly.push_str("  }\n >>\n\n  \\layout {}\n  \\midi {}\n}\n");

    Ok(ly)
}

/// Render and write the score to `path`.
pub fn write_lilypond(
    generator: &ProgressionGenerator,
    title: Option<&str>,
    path: &Path,
) -> Result<(), RenderError> {
    let ly = progression_to_lilypond(generator, title)?;
    std::fs::write(path, ly)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::{ProgressionConfig, ProgressionGenerator};
    use cadenza_theory::pitch::PitchClass;
    use cadenza_theory::quality::Quality;
    use cadenza_theory::scale::Scale;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn chord_symbol_tokens() {
        assert_eq!(
            chord_symbol(&Chord::new(PitchClass::C, Quality::Maj)),
            "c1:maj7"
        );
        assert_eq!(
            chord_symbol(&Chord::new(PitchClass::Bb, Quality::Dom)),
            "bf1:7"
        );
        assert_eq!(
            chord_symbol(&Chord::new(PitchClass::E, Quality::HalfDim)),
            "e1:m7.5-"
        );
    }

    #[test]
    fn stacked_note_tokens() {
        assert_eq!(
            chord_notes(&Chord::new(PitchClass::C, Quality::Maj)),
            "< c e g b >"
        );
        assert_eq!(
            chord_notes(&Chord::new(PitchClass::A, Quality::Min)),
            "< a c e g >"
        );
        assert_eq!(
            chord_notes(&Chord::new(PitchClass::Eb, Quality::Sus)),
            "< ef af bf >"
        );
    }

    #[test]
    fn rendering_requires_a_generated_sequence() {
        let generator = ProgressionGenerator::new(ProgressionConfig::default());
        assert!(matches!(
            progression_to_lilypond(&generator, None),
            Err(RenderError::ChordsNotGenerated)
        ));
    }

    #[test]
    fn score_structure() {
        let config = ProgressionConfig {
            n_bars: 4,
            scale: Scale::parse("C Major").unwrap(),
            ..Default::default()
        };
        let mut generator = ProgressionGenerator::new(config);
        let mut rng = StdRng::seed_from_u64(42);
        generator.generate(&mut rng);

        let ly = progression_to_lilypond(&generator, Some("Test Progression")).unwrap();
        assert!(ly.contains("\\version"), "missing version: {ly}");
        assert!(
            ly.contains("\\language \"english\""),
            "missing note language"
        );
        assert!(ly.contains("Test Progression"), "missing title");
        assert!(ly.contains("\\chords"), "missing chords block");
        assert!(ly.contains("\\time 4/4"), "missing time signature");
        assert!(ly.contains("\\tempo 4 = 120"), "missing tempo");
        assert!(ly.contains("\\layout"), "missing layout block");
        assert!(ly.contains("\\midi"), "missing midi block");

        // One stacked-note token per generated bar.
        assert_eq!(ly.matches("< ").count(), generator.chords().len());
        for chord in generator.chords() {
            assert!(
                ly.contains(&chord_symbol(chord)),
                "missing symbol for {chord}"
            );
        }
    }

    #[test]
    fn default_title_matches_the_header() {
        let mut generator = ProgressionGenerator::new(ProgressionConfig {
            n_bars: 1,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(0);
        generator.generate(&mut rng);
        let ly = progression_to_lilypond(&generator, None).unwrap();
        assert!(ly.contains("title = \"Random Generation\""));
    }
}
