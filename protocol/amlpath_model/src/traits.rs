// Trait seams between the patient record and the static marker catalog.

use crate::patient::GeneticMarker;
use thiserror::Error;

/// Read-only lookup into the protocol's genetic-marker reference table.
///
/// The model crate never owns the table; the catalog crate implements this
/// for its process-wide instance, and tests can implement it over a small
/// fixture table.
pub trait MarkerLookup {
    /// Resolve a marker identifier to its catalog entry, if known.
    fn marker(&self, id: &str) -> Option<&GeneticMarker>;

    fn contains(&self, id: &str) -> bool {
        self.marker(id).is_some()
    }
}

/// Validation of a record against the marker reference table.
pub trait Validatable {
    fn validate_against(&self, lookup: &dyn MarkerLookup) -> Result<(), ValidationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The record references a marker id that is not in the catalog.
    #[error("unknown genetic marker id '{id}'")]
    UnknownMarker { id: String },

    /// The same marker id appears more than once in the selection.
    #[error("genetic marker id '{id}' is selected more than once")]
    DuplicateMarker { id: String },
}
