//! Design matrix construction
//!
//! The design matrix X maps interaction coefficients to phenotypes: one row
//! per encoded genotype, one column per interaction label, in the orders
//! given by the caller. The entry for genotype g and label L is the product
//! over the sites of L of the encoded genotype bit at that site; the
//! intercept column is all ones.

use ep_core::labels::InteractionLabel;

use super::{Basis, Matrix};
use crate::base::Result;
use crate::error::ModelError;

/// Build the design matrix for a set of binary-encoded genotypes and an
/// ordered interaction label list.
///
/// Rows and columns follow the input orders exactly; no reordering happens
/// here. Fails on non-binary characters, ragged genotype lengths, or labels
/// referencing sites beyond the genotype length.
pub fn design_matrix(
    binary_genotypes: &[String],
    labels: &[InteractionLabel],
    basis: Basis,
) -> Result<Matrix> {
    let length = binary_genotypes
        .first()
        .map(|genotype| genotype.chars().count())
        .unwrap_or(0);

    let max_site = labels
        .iter()
        .flat_map(|label| label.sites().iter().copied())
        .max()
        .unwrap_or(0);
    if max_site > length {
        return Err(ModelError::DimensionMismatch {
            what: "genotype length against label sites",
            expected: max_site,
            actual: length,
        });
    }

    let mut x = Matrix::zeros((binary_genotypes.len(), labels.len()));

    for (row, genotype) in binary_genotypes.iter().enumerate() {
        if genotype.chars().count() != length {
            return Err(ModelError::DimensionMismatch {
                what: "genotype length",
                expected: length,
                actual: genotype.chars().count(),
            });
        }

        // Encode every bit up front so invalid characters are caught even
        // at sites no label touches
        let encoded = genotype
            .chars()
            .map(|bit| basis.encode_bit(bit, row))
            .collect::<Result<Vec<f64>>>()?;

        for (column, label) in labels.iter().enumerate() {
            let mut entry = 1.0;
            for &site in label.sites() {
                entry *= encoded[site - 1];
            }
            x[(row, column)] = entry;
        }
    }

    Ok(x)
}
