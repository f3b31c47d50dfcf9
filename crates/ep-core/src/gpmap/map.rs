//! Concrete genotype-phenotype map

use super::*;

/// An immutable genotype-phenotype map.
///
/// Owns the wildtype reference, the raw genotypes, their binary mutation
/// encodings, phenotypes and optional measurement errors. Constructed once
/// through [`GenotypePhenotypeMapBuilder`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GenotypePhenotypeMap {
    wildtype: String,
    genotypes: Vec<String>,
    binary: Vec<String>,
    phenotypes: FloatArray,
    errors: Option<FloatArray>,
    mutations: MutationSpec,
    log_transformed: bool,
}

impl GenotypePhenotypeMap {
    /// Start building a map against a wildtype reference
    pub fn builder(wildtype: impl Into<String>) -> GenotypePhenotypeMapBuilder {
        GenotypePhenotypeMapBuilder::new(wildtype)
    }

    /// Wildtype reference sequence
    pub fn wildtype(&self) -> &str {
        &self.wildtype
    }

    /// Sequence length
    pub fn length(&self) -> usize {
        self.wildtype.chars().count()
    }

    /// Number of genotypes in the map
    pub fn n_genotypes(&self) -> usize {
        self.genotypes.len()
    }

    /// Raw genotypes, in input order
    pub fn genotypes(&self) -> &[String] {
        &self.genotypes
    }

    /// Binary mutation encodings, aligned by index with `genotypes`.
    ///
    /// Each string has one character per site: '0' for the wildtype allele,
    /// '1' for any replacement.
    pub fn binary_genotypes(&self) -> &[String] {
        &self.binary
    }

    /// Phenotypes, aligned by index with `genotypes`
    pub fn phenotypes(&self) -> &FloatArray {
        &self.phenotypes
    }

    /// Measurement errors, if they were supplied.
    ///
    /// `None` is a valid state distinct from all-zero errors.
    pub fn errors(&self) -> Option<&FloatArray> {
        self.errors.as_ref()
    }

    /// Per-site replacement alphabet
    pub fn mutations(&self) -> &MutationSpec {
        &self.mutations
    }

    /// Whether phenotypes (and errors) were log10-transformed at build time
    pub fn log_transformed(&self) -> bool {
        self.log_transformed
    }
}

/// Builder for creating genotype-phenotype maps
pub struct GenotypePhenotypeMapBuilder {
    wildtype: String,
    genotypes: Vec<String>,
    phenotypes: Vec<f64>,
    errors: Option<Vec<f64>>,
    mutations: Option<MutationSpec>,
    log_transform: bool,
}

impl GenotypePhenotypeMapBuilder {
    /// Create a new builder against a wildtype reference
    pub fn new(wildtype: impl Into<String>) -> Self {
        Self {
            wildtype: wildtype.into(),
            genotypes: Vec::new(),
            phenotypes: Vec::new(),
            errors: None,
            mutations: None,
            log_transform: false,
        }
    }

    /// Set the genotypes (raw sequences, or binary strings against an
    /// all-'0' wildtype)
    pub fn genotypes<S: Into<String>>(mut self, genotypes: impl IntoIterator<Item = S>) -> Self {
        self.genotypes = genotypes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the phenotypes, aligned by index with the genotypes
    pub fn phenotypes(mut self, phenotypes: impl Into<Vec<f64>>) -> Self {
        self.phenotypes = phenotypes.into();
        self
    }

    /// Set the measurement errors, aligned by index with the genotypes
    pub fn errors(mut self, errors: impl Into<Vec<f64>>) -> Self {
        self.errors = Some(errors.into());
        self
    }

    /// Supply an explicit mutation spec instead of deriving one from the
    /// observed genotypes
    pub fn mutations(mut self, mutations: MutationSpec) -> Self {
        self.mutations = Some(mutations);
        self
    }

    /// Log10-transform phenotypes at build time, propagating errors as
    /// sigma / (phenotype * ln 10)
    pub fn log_transform(mut self, log_transform: bool) -> Self {
        self.log_transform = log_transform;
        self
    }

    /// Validate the inputs and build the map
    pub fn build(self) -> Result<GenotypePhenotypeMap> {
        if self.wildtype.is_empty() || self.genotypes.is_empty() {
            return Err(MapError::EmptyMap);
        }

        let length = self.wildtype.chars().count();
        for (index, genotype) in self.genotypes.iter().enumerate() {
            let actual = genotype.chars().count();
            if actual != length {
                return Err(MapError::GenotypeLength {
                    index,
                    expected: length,
                    actual,
                });
            }
        }

        if self.phenotypes.len() != self.genotypes.len() {
            return Err(MapError::DimensionMismatch {
                expected: format!("{} phenotypes", self.genotypes.len()),
                actual: format!("{} phenotypes", self.phenotypes.len()),
            });
        }

        if let Some(errors) = &self.errors {
            if errors.len() != self.genotypes.len() {
                return Err(MapError::DimensionMismatch {
                    expected: format!("{} errors", self.genotypes.len()),
                    actual: format!("{} errors", errors.len()),
                });
            }
            for (index, &value) in errors.iter().enumerate() {
                if value < 0.0 {
                    return Err(MapError::NegativeError { index, value });
                }
            }
        }

        let binary = encode_binary(&self.wildtype, &self.genotypes);
        let mutations = self
            .mutations
            .unwrap_or_else(|| MutationSpec::from_genotypes(&self.wildtype, &self.genotypes));

        let (phenotypes, errors) = if self.log_transform {
            log_transform(&self.phenotypes, self.errors.as_deref())?
        } else {
            (
                FloatArray::from_vec(self.phenotypes),
                self.errors.map(FloatArray::from_vec),
            )
        };

        Ok(GenotypePhenotypeMap {
            wildtype: self.wildtype,
            genotypes: self.genotypes,
            binary,
            phenotypes,
            errors,
            mutations,
            log_transformed: self.log_transform,
        })
    }
}

/// Encode genotypes as binary mutation strings against the wildtype
fn encode_binary(wildtype: &str, genotypes: &[String]) -> Vec<String> {
    let reference: Vec<char> = wildtype.chars().collect();

    genotypes
        .iter()
        .map(|genotype| {
            genotype
                .chars()
                .zip(reference.iter())
                .map(|(allele, &wt)| if allele == wt { '0' } else { '1' })
                .collect()
        })
        .collect()
}

/// Log10-transform phenotypes with standard log-error propagation
fn log_transform(
    phenotypes: &[f64],
    errors: Option<&[f64]>,
) -> Result<(FloatArray, Option<FloatArray>)> {
    for (index, &value) in phenotypes.iter().enumerate() {
        if value <= 0.0 {
            return Err(MapError::LogTransform { index, value });
        }
    }

    let transformed = phenotypes.iter().map(|p| p.log10()).collect::<Vec<_>>();
    let transformed_errors = errors.map(|errs| {
        errs.iter()
            .zip(phenotypes.iter())
            .map(|(sigma, p)| sigma / (p * std::f64::consts::LN_10))
            .collect::<Vec<_>>()
    });

    Ok((
        FloatArray::from_vec(transformed),
        transformed_errors.map(FloatArray::from_vec),
    ))
}
