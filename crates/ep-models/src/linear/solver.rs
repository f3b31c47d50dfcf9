//! Exact inversion and coefficient solving
//!
//! The solver owns the design matrix and its inverse. Both are computed once
//! at construction; `fit` and `fit_error` are then plain matrix-vector
//! products. Correctness is only guaranteed for a complete, non-redundant
//! design (rows == columns, full rank); anything else fails loudly instead
//! of producing garbage coefficients.

use ndarray_linalg::{Inverse, OperationNorm};

use ep_core::labels::InteractionLabel;

use super::design::design_matrix;
use super::{Basis, Matrix, Vector};
use crate::base::Result;
use crate::error::ModelError;

/// Condition numbers above this are treated as numerically singular
const CONDITION_LIMIT: f64 = 1e12;

/// Inverts the design matrix once and solves for interaction coefficients
/// and their propagated errors.
#[derive(Debug, Clone)]
pub struct EpistasisSolver {
    basis: Basis,
    x: Matrix,
    x_inv: Matrix,
    condition: f64,
    n_genotypes: usize,
}

impl EpistasisSolver {
    /// Build the design matrix for the given genotypes and labels, then
    /// invert it
    pub fn new(
        binary_genotypes: &[String],
        labels: &[InteractionLabel],
        basis: Basis,
    ) -> Result<Self> {
        let x = design_matrix(binary_genotypes, labels, basis)?;
        Self::from_design(x, basis)
    }

    /// Invert a prebuilt design matrix.
    ///
    /// Requires a square matrix (complete design); fails with
    /// [`ModelError::SingularMatrix`] or [`ModelError::IllConditioned`]
    /// when exact inversion cannot be trusted.
    pub fn from_design(x: Matrix, basis: Basis) -> Result<Self> {
        let (rows, columns) = x.dim();
        if rows != columns || rows == 0 {
            return Err(ModelError::IncompleteDesign {
                n_genotypes: rows,
                n_terms: columns,
            });
        }

        let x_inv = x.inv().map_err(|_| ModelError::SingularMatrix)?;

        let condition = opnorm_one(&x)? * opnorm_one(&x_inv)?;
        if !condition.is_finite() || condition > CONDITION_LIMIT {
            return Err(ModelError::IllConditioned { condition });
        }

        Ok(Self {
            basis,
            x,
            x_inv,
            condition,
            n_genotypes: rows,
        })
    }

    /// The design matrix
    pub fn x(&self) -> &Matrix {
        &self.x
    }

    /// The cached inverse of the design matrix
    pub fn x_inv(&self) -> &Matrix {
        &self.x_inv
    }

    /// Basis the matrix was built in
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Estimated 1-norm condition number of the design matrix
    pub fn condition(&self) -> f64 {
        self.condition
    }

    /// Number of genotype rows
    pub fn n_genotypes(&self) -> usize {
        self.n_genotypes
    }

    /// Solve for one coefficient per interaction label, in label order.
    ///
    /// coefficients = normalization * X^{-1} . phenotypes
    pub fn fit(&self, phenotypes: &Vector) -> Result<Vector> {
        self.check_len(phenotypes.len(), "phenotypes")?;

        let raw = self.x_inv.dot(phenotypes);
        Ok(raw * self.basis.normalization(self.n_genotypes))
    }

    /// Propagate phenotype measurement error into one standard error per
    /// coefficient, in label order.
    ///
    /// Local basis: sqrt(X . sigma^2); the 0/1 entries already equal their
    /// own squares. Global basis: sqrt((1/N)^2 * |X| . sigma^2), with the
    /// absolute value taken elementwise so that the +/-1 variance
    /// contributions cannot cancel.
    pub fn fit_error(&self, errors: &Vector) -> Result<Vector> {
        self.check_len(errors.len(), "errors")?;

        let variances = errors.mapv(|sigma| sigma * sigma);
        let propagated = match self.basis {
            Basis::Local => self.x.dot(&variances),
            Basis::Global => {
                let scale = self.basis.normalization(self.n_genotypes).powi(2);
                self.x.mapv(f64::abs).dot(&variances) * scale
            }
        };

        Ok(propagated.mapv(f64::sqrt))
    }

    /// Recover the phenotypes from a coefficient vector; the exact inverse
    /// of [`fit`](Self::fit), normalization included.
    pub fn predict(&self, coefficients: &Vector) -> Result<Vector> {
        self.check_len(coefficients.len(), "coefficients")?;

        Ok(self.x.dot(coefficients) / self.basis.normalization(self.n_genotypes))
    }

    fn check_len(&self, actual: usize, what: &'static str) -> Result<()> {
        if actual != self.n_genotypes {
            return Err(ModelError::DimensionMismatch {
                what,
                expected: self.n_genotypes,
                actual,
            });
        }
        Ok(())
    }
}

fn opnorm_one(matrix: &Matrix) -> Result<f64> {
    matrix.opnorm_one().map_err(|e| ModelError::Numerical {
        message: e.to_string(),
        operation: "opnorm_one".to_string(),
    })
}
