//! Local and global epistasis model variants
//!
//! A model is constructed once from an immutable genotype-phenotype source:
//! labels are enumerated, the design matrix is built and inverted eagerly,
//! and the inverse is cached for every subsequent fit call. `fit` and
//! `fit_error` are the only mutating operations.

use ndarray::Array1;

use ep_core::gpmap::GenotypeSource;
use ep_core::labels::{enumerate_labels, InteractionLabel};

use super::result::EpistasisResult;
use super::solver::EpistasisSolver;
use super::{Basis, Matrix, Vector};
use crate::base::{EpistasisModel, EpistasisSummary, Result};
use crate::error::ModelError;

// ==================== Linear Epistasis Model ====================

/// A linear epistasis model over a genotype-phenotype source.
///
/// The local and global variants are the same component parameterized by
/// [`Basis`]; use [`local`](Self::local) or [`global`](Self::global) to
/// select one. The interaction order defaults to the full sequence length,
/// giving a saturated, exactly-determined system.
#[derive(Debug, Clone)]
pub struct LinearEpistasisModel<S: GenotypeSource> {
    source: S,
    basis: Basis,
    order: usize,
    labels: Vec<InteractionLabel>,
    solver: EpistasisSolver,
    coefficients: Option<Vector>,
    std_errors: Option<Vector>,
}

impl<S: GenotypeSource> LinearEpistasisModel<S> {
    /// Create a local (mutant-cycle) model at full order
    pub fn local(source: S) -> Result<Self> {
        let order = source.length();
        Self::with_order(source, Basis::Local, order)
    }

    /// Create a global (Walsh/Hadamard) model at full order
    pub fn global(source: S) -> Result<Self> {
        let order = source.length();
        Self::with_order(source, Basis::Global, order)
    }

    /// Create a model truncated at a maximum interaction order.
    ///
    /// The genotype count must still equal the label count at that order
    /// for the design to be invertible.
    pub fn with_order(source: S, basis: Basis, order: usize) -> Result<Self> {
        let labels = enumerate_labels(source.length(), order)?;
        let solver = EpistasisSolver::new(source.binary_genotypes(), &labels, basis)?;

        Ok(Self {
            source,
            basis,
            order,
            labels,
            solver,
            coefficients: None,
            std_errors: None,
        })
    }

    /// Solve for the interaction coefficients from the source phenotypes.
    ///
    /// Overwrites any previously fitted coefficients and invalidates
    /// previously propagated errors.
    pub fn fit(&mut self) -> Result<&mut Self> {
        self.coefficients = Some(self.solver.fit(self.source.phenotypes())?);
        self.std_errors = None;
        Ok(self)
    }

    /// Propagate the source measurement errors into coefficient errors
    pub fn fit_error(&mut self) -> Result<&mut Self> {
        let errors = self.source.errors().ok_or(ModelError::ErrorsNotProvided)?;
        self.std_errors = Some(self.solver.fit_error(errors)?);
        Ok(self)
    }

    /// Recover the phenotypes from the fitted coefficients
    pub fn predict(&self) -> Result<Vector> {
        let coefficients = self.coefficients.as_ref().ok_or(ModelError::NotFitted)?;
        self.solver.predict(coefficients)
    }

    /// Fitted coefficients, in label order
    pub fn coefficients(&self) -> Option<&Vector> {
        self.coefficients.as_ref()
    }

    /// Propagated standard errors, in label order
    pub fn std_errors(&self) -> Option<&Vector> {
        self.std_errors.as_ref()
    }

    /// Assemble the fit output; fails if `fit` has not run
    pub fn result(&self) -> Result<EpistasisResult> {
        let coefficients = self.coefficients.clone().ok_or(ModelError::NotFitted)?;

        Ok(EpistasisResult {
            labels: self.labels.clone(),
            coefficients,
            std_errors: self.std_errors.clone(),
        })
    }

    /// Build a displayable summary of the fitted model
    pub fn summary(&self) -> Result<EpistasisSummary> {
        let result = self.result()?;
        let coefficients = match self.source.mutations() {
            Some(mutations) => result.to_named_coefficients(self.source.wildtype(), mutations),
            None => result.to_coefficients(),
        };

        Ok(EpistasisSummary {
            basis: self.basis,
            wildtype: self.source.wildtype().to_string(),
            n_genotypes: self.source.n_genotypes(),
            n_terms: self.labels.len(),
            order: self.order,
            coefficients,
        })
    }

    /// Basis the model is parameterized by
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Maximum interaction order considered
    pub fn order(&self) -> usize {
        self.order
    }

    /// Interaction labels, one per design-matrix column
    pub fn labels(&self) -> &[InteractionLabel] {
        &self.labels
    }

    /// The underlying genotype-phenotype source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The design matrix, for inspection or reuse by composing models
    pub fn x(&self) -> &Matrix {
        self.solver.x()
    }

    /// The cached inverse of the design matrix
    pub fn x_inv(&self) -> &Matrix {
        self.solver.x_inv()
    }

    /// The underlying solver
    pub fn solver(&self) -> &EpistasisSolver {
        &self.solver
    }
}

impl<S: GenotypeSource> EpistasisModel for LinearEpistasisModel<S> {
    fn fit(&mut self) -> Result<&mut Self> {
        LinearEpistasisModel::fit(self)
    }

    fn fit_error(&mut self) -> Result<&mut Self> {
        LinearEpistasisModel::fit_error(self)
    }

    fn coefficients(&self) -> Option<&Array1<f64>> {
        LinearEpistasisModel::coefficients(self)
    }

    fn std_errors(&self) -> Option<&Array1<f64>> {
        LinearEpistasisModel::std_errors(self)
    }

    fn predict(&self) -> Result<Array1<f64>> {
        LinearEpistasisModel::predict(self)
    }
}
