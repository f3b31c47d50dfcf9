//! Core data structures for EpiOxide
//!
//! This crate provides the foundations for epistasis analysis:
//! genotype-phenotype maps with binary mutation encoding, and
//! canonical enumeration of interaction terms.

pub mod gpmap;
pub mod labels;

// Re-exports
pub use gpmap::{GenotypePhenotypeMap, GenotypeSource, MapError, MutationSpec};
pub use labels::{enumerate_labels, truncate_labels, InteractionLabel, LabelError};
