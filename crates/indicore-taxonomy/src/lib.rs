//! Static taxonomy graph of threat-intelligence indicator types.
//!
//! The taxonomy is a catalogue of ~120 indicator type definitions: what a
//! type is called, which validation family its values normalize through,
//! which sub-field attributes and associations it carries, and which other
//! types' matching fingerprints correlate with it. The graph is built once
//! at process start, validated against its structural invariants, and then
//! shared read-only; callers combine a [`Taxonomy::lookup`] with the
//! data-type dispatch in `indicore-canonical` to validate concrete values.
//!
#![deny(missing_docs)]

/// The built-in indicator type catalogue.
pub mod catalogue;
/// Type definition nodes.
pub mod definition;
/// Taxonomy errors.
pub mod error;
/// The validated taxonomy graph.
pub mod graph;

pub use catalogue::catalogue;
pub use definition::TypeDefinition;
pub use error::{IndicatorError, TaxonomyError};
pub use graph::Taxonomy;
