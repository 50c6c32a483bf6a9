// src/lib.rs
// Octonion algebra over f64, driven by a fixed Cayley table.

pub mod basis;
pub mod error;
pub mod octonion;
pub mod version;

pub use basis::{BasisProduct, FANO_TRIPLES, MULT_TABLE};
pub use error::{OctonionError, Result};
pub use octonion::{associator, commutator, Octonion, DEFAULT_EPSILON, DIM};
