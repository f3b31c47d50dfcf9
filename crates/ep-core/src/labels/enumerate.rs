//! Canonical enumeration of interaction labels

use std::ops::Range;

use super::{InteractionLabel, LabelError, Result};

/// Enumerate all interaction labels of order 0..=`order` over sites
/// {1, ..., `length`}.
///
/// Labels are produced ascending order-by-order, lexicographically within an
/// order, starting with the intercept. This order is canonical: it fixes the
/// column order of the design matrix, and coefficient and error vectors are
/// indexed in lock-step with it.
pub fn enumerate_labels(length: usize, order: usize) -> Result<Vec<InteractionLabel>> {
    if order == 0 {
        return Err(LabelError::InvalidOrder { order });
    }
    if order > length {
        return Err(LabelError::OrderExceedsLength { order, length });
    }

    let mut labels = vec![InteractionLabel::intercept()];
    for k in 1..=order {
        let mut current = Vec::with_capacity(k);
        push_combinations(1, length, k, &mut current, &mut labels);
    }

    Ok(labels)
}

/// Emit all strictly increasing k-combinations of {start, ..., length}
fn push_combinations(
    start: usize,
    length: usize,
    k: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<InteractionLabel>,
) {
    if current.len() == k {
        out.push(InteractionLabel::from_sorted(current.clone()));
        return;
    }

    let remaining = k - current.len();
    for site in start..=(length - remaining + 1) {
        current.push(site);
        push_combinations(site + 1, length, k, current, out);
        current.pop();
    }
}

/// Cut a pre-built label list down to a maximum interaction order,
/// preserving the original ordering. Used when fitting sub-models at lower
/// order than the full map.
pub fn truncate_labels(labels: &[InteractionLabel], order: usize) -> Vec<InteractionLabel> {
    labels
        .iter()
        .filter(|label| label.order() <= order)
        .cloned()
        .collect()
}

/// Index range occupied by the labels of a single order within a
/// canonically ordered list. Empty if that order is absent.
pub fn order_range(labels: &[InteractionLabel], order: usize) -> Range<usize> {
    let start = labels
        .iter()
        .position(|label| label.order() == order)
        .unwrap_or(labels.len());
    let end = labels
        .iter()
        .rposition(|label| label.order() == order)
        .map_or(start, |index| index + 1);

    start..end
}
