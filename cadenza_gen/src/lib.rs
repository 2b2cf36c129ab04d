// Cadenza generation: randomized chord progressions inside a chosen scale.
//
// The pipeline has two phases. Phase 1 builds a candidate pool of chords
// diatonic to the configured scale; phase 2 assembles the bar-by-bar
// sequence from that pool under the configured repetition policy, falling
// back to a shorter shuffled sequence (with a logged warning) when the
// pool can't cover the requested length. A melody stage exists as an
// explicit no-op seam for future work.
//
// Architecture:
// - progression.rs: configuration, candidate-pool construction, sequence
//   assembly, shortfall reporting
// - lilypond.rs: engravable score output from a finished progression
//
// Generation is synchronous and allocation-light; the only injected
// dependency is the RNG, passed as `&mut impl Rng` so runs are
// reproducible under a fixed seed.

pub mod lilypond;
pub mod progression;
