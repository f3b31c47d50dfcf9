//! Genotype-phenotype map structures for EpiOxide
//!
//! This module provides the data layer consumed by the fitting engine:
//! a wildtype reference sequence, genotypes encoded as binary mutation
//! strings against that reference, quantitative phenotypes and optional
//! measurement errors.

mod map;
mod mutations;
mod traits;

#[cfg(test)]
mod tests;

// Re-exports
pub use map::{GenotypePhenotypeMap, GenotypePhenotypeMapBuilder};
pub use mutations::MutationSpec;
pub use traits::GenotypeSource;

// Type aliases for common use cases
pub type FloatArray = ndarray::Array1<f64>;
pub type Matrix = ndarray::Array2<f64>;

/// Error types specific to genotype-phenotype map construction
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Genotype {index} has length {actual}, expected {expected}")]
    GenotypeLength {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    #[error("Genotype-phenotype map is empty")]
    EmptyMap,

    #[error("Cannot log-transform non-positive phenotype {value} at index {index}")]
    LogTransform { index: usize, value: f64 },

    #[error("Negative measurement error {value} at index {index}")]
    NegativeError { index: usize, value: f64 },
}

/// Result type for map operations
pub type Result<T> = std::result::Result<T, MapError>;
