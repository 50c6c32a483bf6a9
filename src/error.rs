// src/error.rs
// Recoverable failures of the algebra. Every variant carries (or implies) a
// well-defined fallback value so callers can keep computing.

use crate::octonion::Octonion;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OctonionError>;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum OctonionError {
    /// A sequence conversion received something other than 8 components
    #[error("invalid length: expected 8 components, got {len}")]
    InvalidLength { len: usize },

    /// Attempted to normalise a zero-norm value
    #[error("cannot normalise a zero-norm octonion")]
    DegenerateNormalisation { value: Octonion },

    /// Attempted to invert a zero-norm value, or one whose inverse overflows
    #[error("octonion has no representable inverse")]
    NonInvertible,
}

impl OctonionError {
    /// The value an operation settles on when it fails:
    /// zero for conversions and inversion, the untouched input for normalisation.
    pub fn fallback(&self) -> Octonion {
        match self {
            OctonionError::InvalidLength { .. } => Octonion::zero(),
            OctonionError::DegenerateNormalisation { value } => *value,
            OctonionError::NonInvertible => Octonion::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallbacks() {
        assert_eq!(OctonionError::InvalidLength { len: 7 }.fallback(), Octonion::zero());
        assert_eq!(OctonionError::NonInvertible.fallback(), Octonion::zero());

        let tiny = Octonion::new(1e-200, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let err = OctonionError::DegenerateNormalisation { value: tiny };
        assert_eq!(err.fallback(), tiny);
    }

    #[test]
    fn messages() {
        let msg = OctonionError::InvalidLength { len: 3 }.to_string();
        assert_eq!(msg, "invalid length: expected 8 components, got 3");
    }
}
