//! Tests for genotype-phenotype map construction

use approx::assert_abs_diff_eq;

use super::*;

// ==================== Test Fixtures ====================

/// Two-site protein map: wildtype "AV", all four genotypes
fn protein_map() -> GenotypePhenotypeMap {
    GenotypePhenotypeMap::builder("AV")
        .genotypes(["AV", "AM", "TV", "TM"])
        .phenotypes(vec![1.0, 1.2, 0.8, 1.5])
        .build()
        .unwrap()
}

// ==================== Construction ====================

#[test]
fn binary_encoding_against_wildtype() {
    let map = protein_map();

    assert_eq!(map.binary_genotypes(), ["00", "01", "10", "11"]);
    assert_eq!(map.wildtype(), "AV");
    assert_eq!(map.length(), 2);
    assert_eq!(map.n_genotypes(), 4);
}

#[test]
fn binary_strings_pass_through_unchanged() {
    // An all-'0' wildtype makes the encoding the identity
    let map = GenotypePhenotypeMap::builder("000")
        .genotypes(["000", "001", "110"])
        .phenotypes(vec![0.0, 1.0, 2.0])
        .build()
        .unwrap();

    assert_eq!(map.binary_genotypes(), ["000", "001", "110"]);
}

#[test]
fn mutation_spec_derived_from_genotypes() {
    let map = protein_map();
    let spec = map.mutations();

    assert_eq!(spec.alleles(1), Some(&['T'][..]));
    assert_eq!(spec.alleles(2), Some(&['M'][..]));
    assert_eq!(spec.len(), 2);
}

#[test]
fn explicit_mutation_spec_wins() {
    let spec = MutationSpec::new().with_site(1, vec!['T', 'S']);
    let map = GenotypePhenotypeMap::builder("AV")
        .genotypes(["AV", "TV"])
        .phenotypes(vec![1.0, 0.5])
        .mutations(spec)
        .build()
        .unwrap();

    assert_eq!(map.mutations().alleles(1), Some(&['T', 'S'][..]));
    assert_eq!(map.mutations().alleles(2), None);
}

// ==================== Validation ====================

#[test]
fn genotype_length_mismatch_fails() {
    let err = GenotypePhenotypeMap::builder("AV")
        .genotypes(["AV", "AVT"])
        .phenotypes(vec![1.0, 2.0])
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        MapError::GenotypeLength {
            index: 1,
            expected: 2,
            actual: 3
        }
    ));
}

#[test]
fn phenotype_count_mismatch_fails() {
    let err = GenotypePhenotypeMap::builder("AV")
        .genotypes(["AV", "AM"])
        .phenotypes(vec![1.0])
        .build()
        .unwrap_err();

    assert!(matches!(err, MapError::DimensionMismatch { .. }));
}

#[test]
fn error_count_mismatch_fails() {
    let err = GenotypePhenotypeMap::builder("AV")
        .genotypes(["AV", "AM"])
        .phenotypes(vec![1.0, 1.2])
        .errors(vec![0.1])
        .build()
        .unwrap_err();

    assert!(matches!(err, MapError::DimensionMismatch { .. }));
}

#[test]
fn negative_error_fails() {
    let err = GenotypePhenotypeMap::builder("AV")
        .genotypes(["AV", "AM"])
        .phenotypes(vec![1.0, 1.2])
        .errors(vec![0.1, -0.2])
        .build()
        .unwrap_err();

    assert!(matches!(err, MapError::NegativeError { index: 1, .. }));
}

#[test]
fn empty_map_fails() {
    let err = GenotypePhenotypeMap::builder("AV").build().unwrap_err();
    assert!(matches!(err, MapError::EmptyMap));
}

// ==================== Errors as a tri-state ====================

#[test]
fn absent_errors_stay_absent() {
    let map = protein_map();
    assert!(map.errors().is_none());
}

#[test]
fn supplied_errors_are_kept() {
    let map = GenotypePhenotypeMap::builder("AV")
        .genotypes(["AV", "AM"])
        .phenotypes(vec![1.0, 1.2])
        .errors(vec![0.0, 0.0])
        .build()
        .unwrap();

    // All-zero errors are a different state from no errors at all
    let errors = map.errors().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], 0.0);
}

// ==================== Log transform ====================

#[test]
fn log_transform_phenotypes_and_errors() {
    let map = GenotypePhenotypeMap::builder("AV")
        .genotypes(["AV", "AM"])
        .phenotypes(vec![100.0, 10.0])
        .errors(vec![10.0, 1.0])
        .log_transform(true)
        .build()
        .unwrap();

    assert!(map.log_transformed());
    assert_abs_diff_eq!(map.phenotypes()[0], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(map.phenotypes()[1], 1.0, epsilon = 1e-12);

    // sigma_log = sigma / (p * ln 10)
    let errors = map.errors().unwrap();
    assert_abs_diff_eq!(errors[0], 10.0 / (100.0 * std::f64::consts::LN_10), epsilon = 1e-12);
    assert_abs_diff_eq!(errors[1], 1.0 / (10.0 * std::f64::consts::LN_10), epsilon = 1e-12);
}

#[test]
fn log_transform_rejects_nonpositive_phenotype() {
    let err = GenotypePhenotypeMap::builder("AV")
        .genotypes(["AV", "AM"])
        .phenotypes(vec![1.0, 0.0])
        .log_transform(true)
        .build()
        .unwrap_err();

    assert!(matches!(err, MapError::LogTransform { index: 1, .. }));
}
