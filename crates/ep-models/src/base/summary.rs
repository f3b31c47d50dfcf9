//! Model summary structures

use serde::{Deserialize, Serialize};
use std::fmt;

use super::coefficient::EpistasisCoefficient;
use crate::linear::Basis;

/// Displayable summary of a fitted epistasis model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpistasisSummary {
    /// Basis the model was fitted in
    pub basis: Basis,
    /// Wildtype reference sequence
    pub wildtype: String,
    /// Number of genotypes
    pub n_genotypes: usize,
    /// Number of interaction terms (including the intercept)
    pub n_terms: usize,
    /// Maximum interaction order
    pub order: usize,
    /// Coefficients table, in label order
    pub coefficients: Vec<EpistasisCoefficient>,
}

impl fmt::Display for EpistasisSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Epistasis Model Summary")?;
        writeln!(f, "=======================")?;
        writeln!(f, "Basis: {}", self.basis)?;
        writeln!(f, "Wildtype: {}", self.wildtype)?;
        writeln!(f, "Genotypes: {}", self.n_genotypes)?;
        writeln!(f, "Interaction terms: {}", self.n_terms)?;
        writeln!(f, "Maximum order: {}", self.order)?;
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        writeln!(
            f,
            "{:<20} {:>6} {:>12} {:>12}",
            "Term", "Order", "Estimate", "Std Error"
        )?;
        writeln!(f, "{:-<20} {:-<6} {:-<12} {:-<12}", "", "", "", "")?;

        for coeff in &self.coefficients {
            match coeff.std_error {
                Some(se) => writeln!(
                    f,
                    "{:<20} {:>6} {:>12.6} {:>12.6}",
                    coeff.name, coeff.order, coeff.estimate, se
                )?,
                None => writeln!(
                    f,
                    "{:<20} {:>6} {:>12.6} {:>12}",
                    coeff.name, coeff.order, coeff.estimate, "-"
                )?,
            }
        }

        Ok(())
    }
}
