//! Model-related error types

use thiserror::Error;

use ep_core::gpmap::MapError;
use ep_core::labels::LabelError;

/// Errors raised by the epistasis fitting layer.
///
/// Every failure is unrecoverable at this layer: the engine never retries,
/// never drops to a lower order on its own, and never returns partial
/// coefficient vectors.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Label construction or enumeration error
    #[error("Label error: {0}")]
    Label(#[from] LabelError),

    /// Genotype-phenotype map error
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    /// Mismatched lengths between genotypes, phenotypes, errors or labels
    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// What was being checked
        what: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Encoded genotype contains a character other than '0' or '1'
    #[error("Non-binary character '{character}' in encoded genotype {index}")]
    NonBinaryGenotype {
        /// Genotype row index
        index: usize,
        /// Offending character
        character: char,
    },

    /// Genotype count does not match interaction-term count, so the design
    /// matrix is not square and exact inversion is impossible
    #[error("Incomplete design: {n_genotypes} genotypes for {n_terms} interaction terms")]
    IncompleteDesign {
        /// Number of genotype rows
        n_genotypes: usize,
        /// Number of interaction-term columns
        n_terms: usize,
    },

    /// Singular design matrix encountered
    #[error("Singular design matrix")]
    SingularMatrix,

    /// Design matrix inversion is numerically unreliable
    #[error("Design matrix is ill-conditioned (condition number {condition:.3e})")]
    IllConditioned {
        /// Estimated 1-norm condition number
        condition: f64,
    },

    /// Numerical computation error
    #[error("Numerical error: {message} (operation: {operation})")]
    Numerical {
        /// Error message
        message: String,
        /// Operation that failed
        operation: String,
    },

    /// `fit_error` requires phenotype errors, and none were ever supplied
    #[error("Phenotype errors were never supplied; cannot propagate them")]
    ErrorsNotProvided,

    /// Model not fitted yet
    #[error("Model not fitted yet")]
    NotFitted,
}
