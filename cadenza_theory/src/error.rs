// Parse-time error taxonomy.
//
// Every variant is an input-validation failure surfaced immediately to the
// caller. Inputs come from direct API or CLI arguments, so nothing here is
// retried or recovered internally.

use thiserror::Error;

/// Errors from constructing theory values out of indices or free text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// A pitch-class index outside 0..12, or a spelling no pitch class
    /// answers to.
    #[error("invalid pitch class: {0}")]
    InvalidPitchClass(String),

    /// A quality name matching neither the short enumerated names nor the
    /// full descriptive ones.
    #[error("unknown chord quality '{0}'")]
    UnknownQuality(String),

    /// Chord text that is not `"<root>"` or `"<root> <quality>"`.
    #[error("invalid chord spec: {0}")]
    InvalidChordSpec(String),

    /// Scale text that is not `"<root>"` or `"<root> <mode>"`, or an
    /// unknown mode name.
    #[error("invalid scale spec: {0}")]
    InvalidScaleSpec(String),
}
