//! The validated taxonomy graph.

use std::collections::HashMap;

use indicore_canonical::{RawValue, Validated};
use once_cell::sync::Lazy;

use crate::catalogue::catalogue;
use crate::definition::TypeDefinition;
use crate::error::{IndicatorError, TaxonomyError};

/// The immutable catalogue of indicator type definitions, indexed by name.
///
/// Construction enforces the structural invariants: unique type names,
/// every `correlate` entry resolving to a registered type, and no
/// definition nesting an attribute bearing its own name. After
/// construction the graph is read-only and safe to share across threads
/// without synchronization.
#[derive(Debug)]
pub struct Taxonomy {
    definitions: Vec<TypeDefinition>,
    index: HashMap<String, usize>,
}

impl Taxonomy {
    /// Builds a taxonomy from definitions, validating its invariants.
    /// Registration order is preserved for iteration and export.
    pub fn new(definitions: Vec<TypeDefinition>) -> Result<Self, TaxonomyError> {
        let mut index = HashMap::with_capacity(definitions.len());
        for (i, def) in definitions.iter().enumerate() {
            if index.insert(def.type_name.clone(), i).is_some() {
                return Err(TaxonomyError::DuplicateTypeName(def.type_name.clone()));
            }
        }
        for def in &definitions {
            for correlate in &def.correlate {
                if !index.contains_key(correlate) {
                    return Err(TaxonomyError::UnresolvedCorrelate {
                        type_name: def.type_name.clone(),
                        correlate: correlate.clone(),
                    });
                }
            }
            check_nesting(def, &mut Vec::new())?;
        }
        Ok(Self { definitions, index })
    }

    /// The built-in taxonomy, constructed once per process. An invariant
    /// violation here means the compiled-in catalogue is corrupted, which
    /// is fatal.
    pub fn builtin() -> &'static Taxonomy {
        static BUILTIN: Lazy<Taxonomy> =
            Lazy::new(|| Taxonomy::new(catalogue()).expect("built-in taxonomy is invalid"));
        &BUILTIN
    }

    /// Looks up a definition by type name.
    pub fn lookup(&self, type_name: &str) -> Result<&TypeDefinition, IndicatorError> {
        self.index
            .get(type_name)
            .map(|&i| &self.definitions[i])
            .ok_or_else(|| IndicatorError::UnknownType(type_name.to_string()))
    }

    /// Iterates all definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.definitions.iter()
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the taxonomy is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Validates a raw value of the named indicator type: lookup plus
    /// data-type dispatch. The ingestion entry point.
    pub fn validate_value(
        &self,
        type_name: &str,
        value: &RawValue,
    ) -> Result<Validated, IndicatorError> {
        let def = self.lookup(type_name)?;
        Ok(def.validate_value(value)?)
    }
}

fn check_nesting(def: &TypeDefinition, path: &mut Vec<String>) -> Result<(), TaxonomyError> {
    if path.iter().any(|name| name == &def.type_name) {
        return Err(TaxonomyError::SelfNesting(def.type_name.clone()));
    }
    path.push(def.type_name.clone());
    for attr in &def.attributes {
        check_nesting(attr, path)?;
    }
    path.pop();
    Ok(())
}
