//! Interaction terms and their canonical enumeration
//!
//! An epistatic decomposition assigns one coefficient to every interaction
//! term: the intercept, each single site, each pair of sites, and so on.
//! This module defines the label type for those terms and the canonical
//! ordering that fixes the column order of the design matrix.

mod enumerate;

#[cfg(test)]
mod tests;

// Re-exports
pub use enumerate::{enumerate_labels, order_range, truncate_labels};

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gpmap::MutationSpec;

/// Errors raised during label construction and enumeration
#[derive(thiserror::Error, Debug)]
pub enum LabelError {
    #[error("Interaction order {order} exceeds sequence length {length}")]
    OrderExceedsLength { order: usize, length: usize },

    #[error("Interaction order must be at least 1, got {order}")]
    InvalidOrder { order: usize },

    #[error("Site indices are 1-based and must be strictly increasing: {sites:?}")]
    InvalidSites { sites: Vec<usize> },
}

/// Result type for label operations
pub type Result<T> = std::result::Result<T, LabelError>;

/// An interaction term: strictly increasing, unique, 1-based site indices.
///
/// The empty label represents the intercept. Labels compare first by order
/// (number of sites) and then lexicographically, matching the canonical
/// enumeration order produced by [`enumerate_labels`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractionLabel {
    sites: Vec<usize>,
}

impl InteractionLabel {
    /// The intercept label
    pub fn intercept() -> Self {
        Self { sites: Vec::new() }
    }

    /// Create a label from site indices, validating the invariant
    pub fn new(sites: Vec<usize>) -> Result<Self> {
        let valid = sites.windows(2).all(|pair| pair[0] < pair[1]);
        if !valid || sites.first() == Some(&0) {
            return Err(LabelError::InvalidSites { sites });
        }
        Ok(Self { sites })
    }

    /// Internal constructor for sites already known to be valid
    pub(crate) fn from_sorted(sites: Vec<usize>) -> Self {
        debug_assert!(sites.windows(2).all(|pair| pair[0] < pair[1]));
        Self { sites }
    }

    /// Participating site indices
    pub fn sites(&self) -> &[usize] {
        &self.sites
    }

    /// Number of participating sites; 0 for the intercept
    pub fn order(&self) -> usize {
        self.sites.len()
    }

    /// Check whether this is the intercept label
    pub fn is_intercept(&self) -> bool {
        self.sites.is_empty()
    }

    /// Check whether a site participates in this term
    pub fn contains(&self, site: usize) -> bool {
        self.sites.binary_search(&site).is_ok()
    }

    /// Alphabet-aware name for this term, e.g. `A2V` or `A2V:P3G`.
    ///
    /// Uses the first recorded replacement allele per site; sites without a
    /// recorded replacement render as `?`.
    pub fn describe(&self, wildtype: &str, mutations: &MutationSpec) -> String {
        if self.is_intercept() {
            return self.to_string();
        }

        let reference: Vec<char> = wildtype.chars().collect();
        let parts: Vec<String> = self
            .sites
            .iter()
            .map(|&site| {
                let wt = reference.get(site - 1).copied().unwrap_or('?');
                let replacement = mutations
                    .alleles(site)
                    .and_then(|alleles| alleles.first().copied())
                    .unwrap_or('?');
                format!("{}{}{}", wt, site, replacement)
            })
            .collect();

        parts.join(":")
    }
}

impl fmt::Display for InteractionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_intercept() {
            return write!(f, "(Intercept)");
        }

        let parts: Vec<String> = self.sites.iter().map(|site| site.to_string()).collect();
        write!(f, "{}", parts.join(":"))
    }
}

impl PartialOrd for InteractionLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InteractionLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order()
            .cmp(&other.order())
            .then_with(|| self.sites.cmp(&other.sites))
    }
}
