//! Per-site mutation alphabet

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Allowed non-wildtype characters per site.
///
/// Sites are 1-based to match biological convention. The spec is used for
/// alphabet-aware label decoration only; the fitting engine never consults it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationSpec {
    sites: IndexMap<usize, Vec<char>>,
}

impl MutationSpec {
    /// Create an empty mutation spec
    pub fn new() -> Self {
        Self {
            sites: IndexMap::new(),
        }
    }

    /// Add a site with its allowed replacement characters
    pub fn with_site(mut self, site: usize, alleles: Vec<char>) -> Self {
        self.sites.insert(site, alleles);
        self
    }

    /// Record an observed replacement character at a site
    pub fn insert(&mut self, site: usize, allele: char) {
        let alleles = self.sites.entry(site).or_default();
        if !alleles.contains(&allele) {
            alleles.push(allele);
        }
    }

    /// Allowed replacement characters at a site, if any were recorded
    pub fn alleles(&self, site: usize) -> Option<&[char]> {
        self.sites.get(&site).map(|v| v.as_slice())
    }

    /// Sites with at least one recorded replacement, in insertion order
    pub fn sites(&self) -> impl Iterator<Item = usize> + '_ {
        self.sites.keys().copied()
    }

    /// Number of sites with recorded replacements
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Check if no replacements were recorded
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Derive the spec from observed genotypes against a wildtype sequence.
    ///
    /// Every character differing from the wildtype at its position is
    /// recorded as an allowed replacement for that site.
    pub fn from_genotypes(wildtype: &str, genotypes: &[String]) -> Self {
        let reference: Vec<char> = wildtype.chars().collect();
        let mut spec = Self::new();

        for genotype in genotypes {
            for (position, allele) in genotype.chars().enumerate() {
                if position < reference.len() && allele != reference[position] {
                    spec.insert(position + 1, allele);
                }
            }
        }

        spec
    }
}
