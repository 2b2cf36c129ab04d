// Chord-progression generation.
//
// Phase 1 (candidate pool): with root repetition allowed, the pool is the
// scale's full diatonic-chord inventory restricted to the configured
// qualities; without it, each scale degree contributes at most one chord,
// picked uniformly from that degree's diatonic candidates. Degrees with
// no candidate drop out silently, so the pool can be smaller than the
// degree count.
//
// Phase 2 (assembly): draws with replacement, samples without
// replacement, or, when the pool can't cover the request, warns once
// and returns the whole pool shuffled. The shortfall is recorded on the
// generator so callers don't have to capture log output to observe it.

use cadenza_theory::chord::Chord;
use cadenza_theory::pitch::PitchClass;
use cadenza_theory::quality::{Quality, QualityPool};
use cadenza_theory::scale::{Mode, Scale};
use rand::Rng;
use rand::seq::{SliceRandom, index};
use serde::Serialize;

/// Generator configuration. Immutable once the generator is built.
#[derive(Debug, Clone)]
pub struct ProgressionConfig {
    /// Number of bars (one chord per bar) to request.
    pub n_bars: usize,
    /// Allow several candidates sharing a root in the pool, instead of
    /// at most one chord per scale degree.
    pub root_rep: bool,
    /// Sample the final sequence with replacement.
    pub chord_rep: bool,
    /// The scale every candidate must stay inside.
    pub scale: Scale,
    /// Qualities candidates are built from.
    pub qualities: Vec<Quality>,
    /// With `root_rep`, keep diatonic candidates of every quality rather
    /// than restricting to `qualities`.
    pub root_rep_all_qualities: bool,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        ProgressionConfig {
            n_bars: 8,
            root_rep: false,
            chord_rep: false,
            scale: Scale::new(PitchClass::C, Mode::Chromatic),
            qualities: QualityPool::Main.qualities().to_vec(),
            root_rep_all_qualities: false,
        }
    }
}

/// Record of an under-supplied run: fewer candidates than requested bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub requested: usize,
    pub available: usize,
}

/// Generates bar-by-bar chord sequences and holds the most recent one.
#[derive(Debug)]
pub struct ProgressionGenerator {
    config: ProgressionConfig,
    chords: Vec<Chord>,
    shortfall: Option<Shortfall>,
}

impl ProgressionGenerator {
    pub fn new(config: ProgressionConfig) -> Self {
        ProgressionGenerator {
            config,
            chords: Vec::new(),
            shortfall: None,
        }
    }

    /// Run the full pipeline: the chord phases, then the melody stage.
    pub fn generate(&mut self, rng: &mut impl Rng) {
        self.generate_chords(rng);
        self.generate_melody(rng);
    }

    /// Build the candidate pool and assemble the bar sequence, replacing
    /// any previous sequence wholesale.
    pub fn generate_chords(&mut self, rng: &mut impl Rng) -> &[Chord] {
        self.shortfall = None;
        let pool = self.candidate_pool(rng);
        let n = self.config.n_bars;
        let m = pool.len();

        self.chords = if self.config.chord_rep {
            if m == 0 {
                self.report_shortfall(n, 0);
                Vec::new()
            } else {
                (0..n).map(|_| pool[rng.random_range(0..m)]).collect()
            }
        } else if m >= n {
            index::sample(rng, m, n).iter().map(|i| pool[i]).collect()
        } else {
            self.report_shortfall(n, m);
            let mut pool = pool;
            pool.shuffle(rng);
            pool
        };
        &self.chords
    }

    /// Melody stage of the pipeline. Melodies over the generated chords
    /// are not implemented yet; this is the seam where they will go.
    pub fn generate_melody(&mut self, _rng: &mut impl Rng) {}

    /// The most recent sequence, empty before the first generation call.
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// Whether a non-empty sequence is available to render.
    pub fn has_generated_chords(&self) -> bool {
        !self.chords.is_empty()
    }

    /// The under-supply record of the most recent run, if it fell short.
    pub fn shortfall(&self) -> Option<Shortfall> {
        self.shortfall
    }

    fn candidate_pool(&self, rng: &mut impl Rng) -> Vec<Chord> {
        let scale = &self.config.scale;
        if self.config.root_rep {
            let mut pool = scale.diatonic_chords();
            if !self.config.root_rep_all_qualities {
                pool.retain(|chord| self.config.qualities.contains(&chord.quality));
            }
            pool
        } else {
            let mut pool = Vec::new();
            for root in scale.notes() {
                let candidates: Vec<Chord> = self
                    .config
                    .qualities
                    .iter()
                    .map(|&quality| Chord::new(root, quality))
                    .filter(|chord| scale.contains_chord(chord))
                    .collect();
                if !candidates.is_empty() {
                    pool.push(candidates[rng.random_range(0..candidates.len())]);
                }
            }
            pool
        }
    }

    fn report_shortfall(&mut self, requested: usize, available: usize) {
        log::warn!(
            "not enough chords to generate {requested} bars, generating {available} bars instead"
        );
        self.shortfall = Some(Shortfall {
            requested,
            available,
        });
    }
}
