//! Tests for interaction-label enumeration

use super::*;
use crate::gpmap::MutationSpec;

fn label(sites: &[usize]) -> InteractionLabel {
    InteractionLabel::new(sites.to_vec()).unwrap()
}

// ==================== Enumeration ====================

#[test]
fn full_enumeration_three_sites() {
    let labels = enumerate_labels(3, 3).unwrap();

    let expected = vec![
        InteractionLabel::intercept(),
        label(&[1]),
        label(&[2]),
        label(&[3]),
        label(&[1, 2]),
        label(&[1, 3]),
        label(&[2, 3]),
        label(&[1, 2, 3]),
    ];

    // 2^3 labels, matching the 8 genotypes of a complete binary design
    assert_eq!(labels, expected);
}

#[test]
fn enumeration_counts_follow_binomials() {
    let labels = enumerate_labels(5, 5).unwrap();
    assert_eq!(labels.len(), 32);

    let labels = enumerate_labels(5, 2).unwrap();
    // 1 + 5 + 10
    assert_eq!(labels.len(), 16);
}

#[test]
fn order_exceeding_length_fails() {
    let err = enumerate_labels(3, 4).unwrap_err();
    assert!(matches!(
        err,
        LabelError::OrderExceedsLength {
            order: 4,
            length: 3
        }
    ));
}

#[test]
fn zero_order_fails() {
    let err = enumerate_labels(3, 0).unwrap_err();
    assert!(matches!(err, LabelError::InvalidOrder { order: 0 }));
}

// ==================== Truncation and order ranges ====================

#[test]
fn truncation_preserves_order() {
    let labels = enumerate_labels(3, 3).unwrap();
    let truncated = truncate_labels(&labels, 1);

    assert_eq!(
        truncated,
        vec![
            InteractionLabel::intercept(),
            label(&[1]),
            label(&[2]),
            label(&[3]),
        ]
    );
    assert_eq!(truncate_labels(&labels, 3), labels);
}

#[test]
fn order_ranges_partition_the_list() {
    let labels = enumerate_labels(3, 3).unwrap();

    assert_eq!(order_range(&labels, 0), 0..1);
    assert_eq!(order_range(&labels, 1), 1..4);
    assert_eq!(order_range(&labels, 2), 4..7);
    assert_eq!(order_range(&labels, 3), 7..8);
    assert!(order_range(&labels, 4).is_empty());
}

// ==================== Label invariants ====================

#[test]
fn rejects_unsorted_and_duplicate_sites() {
    assert!(InteractionLabel::new(vec![2, 1]).is_err());
    assert!(InteractionLabel::new(vec![1, 1]).is_err());
    assert!(InteractionLabel::new(vec![0, 1]).is_err());
}

#[test]
fn ordering_matches_enumeration() {
    let labels = enumerate_labels(4, 4).unwrap();

    let mut shuffled = labels.clone();
    shuffled.reverse();
    shuffled.sort();

    assert_eq!(shuffled, labels);

    // Order dominates lexicographic comparison
    assert!(label(&[4]) < label(&[1, 2]));
}

#[test]
fn contains_checks_membership() {
    let term = label(&[1, 3]);
    assert!(term.contains(1));
    assert!(term.contains(3));
    assert!(!term.contains(2));
}

// ==================== Display and decoration ====================

#[test]
fn display_uses_interaction_syntax() {
    assert_eq!(InteractionLabel::intercept().to_string(), "(Intercept)");
    assert_eq!(label(&[2]).to_string(), "2");
    assert_eq!(label(&[1, 3]).to_string(), "1:3");
}

#[test]
fn describe_decorates_with_alphabet() {
    let spec = MutationSpec::new()
        .with_site(1, vec!['T'])
        .with_site(2, vec!['M']);

    assert_eq!(label(&[1]).describe("AV", &spec), "A1T");
    assert_eq!(label(&[1, 2]).describe("AV", &spec), "A1T:V2M");
    assert_eq!(InteractionLabel::intercept().describe("AV", &spec), "(Intercept)");
}
