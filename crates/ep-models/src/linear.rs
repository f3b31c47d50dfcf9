//! Linear epistasis models
//!
//! This module implements the linear decomposition engine:
//! - the design matrix mapping interaction coefficients to phenotypes,
//! - exact inversion and coefficient solving with error propagation,
//! - the local and global model variants.
//!
//! The two variants share all structure except the bit encoding and a
//! normalization constant, so they are parameterized by a single [`Basis`]
//! rather than duplicated.

pub mod design;
pub mod model;
pub mod result;
pub mod solver;


// Re-exports
pub use design::design_matrix;
pub use model::LinearEpistasisModel;
pub use result::EpistasisResult;
pub use solver::EpistasisSolver;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::base::Result;
use crate::error::ModelError;
use ep_core::gpmap::GenotypeSource;

// Common types

/// Matrix type alias for 2D arrays
pub type Matrix = ndarray::Array2<f64>;

/// Vector type alias for 1D arrays
pub type Vector = ndarray::Array1<f64>;

/// Basis selection for the decomposition.
///
/// Selects the {bit encoding, normalization factor} pair that distinguishes
/// the two model variants; everything else is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Basis {
    /// Mutant-cycle expansion: genotype bits map to {0, 1}.
    ///
    /// Phenotype = intercept + single effects + pairwise effects + ...,
    /// restricted to sites actually mutated in each genotype.
    Local,
    /// Walsh/Hadamard expansion: genotype bits map to {-1, +1}, the
    /// discrete-Fourier dual of the local basis.
    Global,
}

impl Basis {
    /// Numeric value of one encoded genotype bit
    pub(crate) fn encode_bit(self, bit: char, genotype_index: usize) -> Result<f64> {
        match (self, bit) {
            (_, '1') => Ok(1.0),
            (Basis::Local, '0') => Ok(0.0),
            (Basis::Global, '0') => Ok(-1.0),
            (_, character) => Err(ModelError::NonBinaryGenotype {
                index: genotype_index,
                character,
            }),
        }
    }

    /// Scale applied to the raw inverse-times-phenotypes product in `fit`.
    ///
    /// The Hadamard basis is not orthonormal without the 1/N factor.
    pub fn normalization(self, n_genotypes: usize) -> f64 {
        match self {
            Basis::Local => 1.0,
            Basis::Global => 1.0 / n_genotypes as f64,
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::Local => write!(f, "local"),
            Basis::Global => write!(f, "global"),
        }
    }
}

/// Convenience function: construct and fit a local epistasis model
pub fn local_epistasis<S: GenotypeSource>(source: S) -> Result<LinearEpistasisModel<S>> {
    let mut model = LinearEpistasisModel::local(source)?;
    model.fit()?;
    Ok(model)
}

/// Convenience function: construct and fit a global epistasis model
pub fn global_epistasis<S: GenotypeSource>(source: S) -> Result<LinearEpistasisModel<S>> {
    let mut model = LinearEpistasisModel::global(source)?;
    model.fit()?;
    Ok(model)
}
