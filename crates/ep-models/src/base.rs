//! Core traits and types for epistasis models
//!
//! This module defines the shared fit/predict contract of the model
//! variants and the coefficient/summary reporting structures.

use ndarray::Array1;

// Re-export core types
pub use coefficient::EpistasisCoefficient;
pub use summary::EpistasisSummary;

pub use crate::error::ModelError;

pub mod coefficient;
pub mod summary;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Shared protocol of the epistasis model variants.
///
/// A model owns its genotype-phenotype source, its design matrix and the
/// cached inverse; `fit` and `fit_error` recompute the coefficient and
/// error vectors, everything else is immutable after construction.
pub trait EpistasisModel {
    /// Solve for one coefficient per interaction label
    fn fit(&mut self) -> Result<&mut Self>;

    /// Propagate phenotype measurement error into per-coefficient errors.
    ///
    /// Fails if the source never supplied errors; absence is deliberately
    /// not defaulted to zero.
    fn fit_error(&mut self) -> Result<&mut Self>;

    /// Coefficients, in label order, once fitted
    fn coefficients(&self) -> Option<&Array1<f64>>;

    /// Coefficient standard errors, in label order, once propagated
    fn std_errors(&self) -> Option<&Array1<f64>>;

    /// Recover the phenotypes from the fitted coefficients
    fn predict(&self) -> Result<Array1<f64>>;
}
