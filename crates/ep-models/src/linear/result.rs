//! Fitted-model results

use ep_core::gpmap::MutationSpec;
use ep_core::labels::InteractionLabel;

use super::Vector;
use crate::base::EpistasisCoefficient;

/// The output of a fit: one coefficient per interaction label, plus
/// propagated standard errors once `fit_error` has run.
///
/// Labels, coefficients and errors are indexed in lock-step; the ordering
/// is the canonical enumeration order of the labels.
#[derive(Debug, Clone)]
pub struct EpistasisResult {
    /// Interaction labels, one per design-matrix column
    pub labels: Vec<InteractionLabel>,
    /// Coefficients, in label order
    pub coefficients: Vector,
    /// Propagated standard errors, in label order, if computed
    pub std_errors: Option<Vector>,
}

impl EpistasisResult {
    /// Look up a coefficient by its participating sites
    pub fn coefficient(&self, sites: &[usize]) -> Option<f64> {
        self.position(sites).map(|index| self.coefficients[index])
    }

    /// Look up a propagated standard error by its participating sites
    pub fn std_error(&self, sites: &[usize]) -> Option<f64> {
        let errors = self.std_errors.as_ref()?;
        self.position(sites).map(|index| errors[index])
    }

    /// The intercept coefficient
    pub fn intercept(&self) -> f64 {
        self.coefficients[0]
    }

    /// Create coefficient structs, named by the plain site syntax
    /// (`(Intercept)`, `1:3`, ...)
    pub fn to_coefficients(&self) -> Vec<EpistasisCoefficient> {
        self.build_coefficients(|label| label.to_string())
    }

    /// Create coefficient structs with alphabet-aware names (`A1T:V2M`)
    pub fn to_named_coefficients(
        &self,
        wildtype: &str,
        mutations: &MutationSpec,
    ) -> Vec<EpistasisCoefficient> {
        self.build_coefficients(|label| label.describe(wildtype, mutations))
    }

    fn build_coefficients(
        &self,
        name: impl Fn(&InteractionLabel) -> String,
    ) -> Vec<EpistasisCoefficient> {
        self.labels
            .iter()
            .zip(self.coefficients.iter())
            .enumerate()
            .map(|(index, (label, &estimate))| {
                let mut coefficient = EpistasisCoefficient::new(name(label), estimate)
                    .with_sites(label.sites().to_vec());

                if let Some(errors) = &self.std_errors {
                    coefficient = coefficient.with_std_error(errors[index]);
                }
                if label.is_intercept() {
                    coefficient = coefficient.as_intercept();
                }

                coefficient
            })
            .collect()
    }

    fn position(&self, sites: &[usize]) -> Option<usize> {
        self.labels.iter().position(|label| label.sites() == sites)
    }
}
