//! Common error infrastructure.
//!
//! Domain-specific errors (e.g. [`crate::pet::PetError`],
//! [`crate::map::MapError`]) are defined in their respective modules
//! alongside the operations they validate. This module provides the
//! shared classification used across all of them.
//!
//! All errors are raised synchronously to the immediate caller and are
//! never retried internally. Guards run before any mutation, so a
//! failed operation leaves the receiver untouched.

/// Classification of an error, used by callers to decide whether a
/// failure is a player-facing rejection or a programming error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The caller passed a value that is never acceptable (negative XP
    /// grant, slot index out of range).
    InvalidArgument,

    /// The operation is not legal in the receiver's current state
    /// (maxed-level pet, ability relearn, targeting violation).
    InvalidState,

    /// Input data violates a structural invariant (non-rectangular map,
    /// actor placed outside the grid).
    StructuralViolation,
}

impl ErrorKind {
    /// Returns a human-readable description of this classification.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::InvalidState => "invalid state",
            Self::StructuralViolation => "structural violation",
        }
    }
}

/// Common trait for all game errors.
///
/// Implemented by every error enum in the crate so callers can branch
/// on the taxonomy without matching each domain's variants.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the classification of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns true if the failure indicates bad input rather than bad state.
    fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument)
    }
}
