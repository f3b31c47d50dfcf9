//! Traits for genotype-phenotype data sources

use super::*;

/// Capability interface consumed by the fitting layer.
///
/// Anything exposing binary-encoded genotypes, phenotypes and errors against
/// a wildtype reference satisfies the contract: real maps, test fixtures,
/// synthetic generators. The fitting layer never inspects internals beyond
/// these accessors.
pub trait GenotypeSource: Send + Sync {
    /// Wildtype reference sequence
    fn wildtype(&self) -> &str;

    /// Sequence length
    fn length(&self) -> usize;

    /// Number of genotypes
    fn n_genotypes(&self) -> usize;

    /// Binary mutation encodings, one per genotype
    fn binary_genotypes(&self) -> &[String];

    /// Phenotypes, aligned by index with the genotypes
    fn phenotypes(&self) -> &FloatArray;

    /// Measurement errors, if supplied
    fn errors(&self) -> Option<&FloatArray>;

    /// Per-site replacement alphabet, if known
    fn mutations(&self) -> Option<&MutationSpec>;
}

impl GenotypeSource for GenotypePhenotypeMap {
    fn wildtype(&self) -> &str {
        self.wildtype()
    }

    fn length(&self) -> usize {
        self.length()
    }

    fn n_genotypes(&self) -> usize {
        self.n_genotypes()
    }

    fn binary_genotypes(&self) -> &[String] {
        self.binary_genotypes()
    }

    fn phenotypes(&self) -> &FloatArray {
        self.phenotypes()
    }

    fn errors(&self) -> Option<&FloatArray> {
        self.errors()
    }

    fn mutations(&self) -> Option<&MutationSpec> {
        Some(self.mutations())
    }
}
