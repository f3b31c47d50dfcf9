//! Coefficient definition

use serde::{Deserialize, Serialize};

/// A single epistatic interaction coefficient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpistasisCoefficient {
    /// Term name, e.g. `(Intercept)`, `1:3` or `A1T:P3G`
    pub name: String,
    /// Participating site indices (1-based)
    pub sites: Vec<usize>,
    /// Interaction order; 0 for the intercept
    pub order: usize,
    /// Coefficient estimate
    pub estimate: f64,
    /// Propagated standard error
    pub std_error: Option<f64>,
    /// Is this the intercept?
    pub is_intercept: bool,
}

impl EpistasisCoefficient {
    /// Create a new coefficient
    pub fn new(name: impl Into<String>, estimate: f64) -> Self {
        Self {
            name: name.into(),
            sites: Vec::new(),
            order: 0,
            estimate,
            std_error: None,
            is_intercept: false,
        }
    }

    /// Set the participating sites
    pub fn with_sites(mut self, sites: Vec<usize>) -> Self {
        self.order = sites.len();
        self.sites = sites;
        self
    }

    /// Set the standard error
    pub fn with_std_error(mut self, se: f64) -> Self {
        self.std_error = Some(se);
        self
    }

    /// Mark as intercept
    pub fn as_intercept(mut self) -> Self {
        self.is_intercept = true;
        self
    }
}
