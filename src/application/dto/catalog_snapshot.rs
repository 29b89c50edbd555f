use crate::obsolescence::domain::{CategoryMetadataIndex, ItComponent};

/// CatalogSnapshot - everything fetched from the host for one report run
///
/// The snapshot is immutable; a new date window is applied to the same
/// snapshot without fetching again.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub components: Vec<ItComponent>,
    pub categories: CategoryMetadataIndex,
}

impl CatalogSnapshot {
    pub fn new(components: Vec<ItComponent>, categories: CategoryMetadataIndex) -> Self {
        Self {
            components,
            categories,
        }
    }
}
