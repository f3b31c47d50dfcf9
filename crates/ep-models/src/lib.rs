//! Epistasis models for EpiOxide
//!
//! This crate provides the linear epistasis decomposition engine: it fits
//! quantitative genotype-phenotype maps to a hierarchy of effects: an
//! intercept, single-mutation effects, pairwise interactions, up through
//! full-order terms. Two bases are supported: the local (mutant-cycle)
//! encoding and the global (Walsh/Hadamard) encoding, its discrete-Fourier
//! dual.

pub mod base;
pub mod error;
pub mod linear;

// Re-exports
pub use base::{EpistasisCoefficient, EpistasisModel, EpistasisSummary, Result};
pub use error::ModelError;
pub use linear::{Basis, EpistasisResult, EpistasisSolver, LinearEpistasisModel};
