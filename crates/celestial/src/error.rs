//! Error types for the celestial body model.
//!
//! All failures surface synchronously at construction or assignment and
//! propagate to the caller. Nothing is retried or recovered internally, and
//! no partially constructed object ever exists.

use thiserror::Error;

/// Errors raised by body constructors, the validated relative-mass setter,
/// and the not-yet-implemented classification operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BodyError {
    /// Neither an absolute nor a relative mass was supplied at construction.
    #[error("mass must be given in kilograms or in reference units")]
    MissingMass,

    /// A validated setter received a value that is not a finite number
    /// (NaN or infinity plays the wrong-type role for `f64` fields).
    #[error("expected a finite number, got {value}")]
    NotFinite { value: f64 },

    /// A validated setter received a value outside the allowed domain.
    #[error("relative mass cannot be negative, got {value}")]
    NegativeMass { value: f64 },

    /// An attempt to reassign a derived read-only attribute on a variant
    /// that does not support mutation.
    #[error("relative mass of a {kind} is derived and cannot be reassigned")]
    ImmutableProperty { kind: &'static str },

    /// The operation is a declared extension point with no algorithm yet.
    #[error("{operation} is not implemented yet")]
    NotImplemented { operation: &'static str },
}
