use crate::obsolescence::domain::CategoryMetadataIndex;
use crate::shared::Result;

/// CategoryMetadataSource port for loading category labels and colors
///
/// The host supplies this lookup table alongside the catalog; it is loaded
/// once per report run.
pub trait CategoryMetadataSource {
    /// Loads the category lookup table
    ///
    /// # Errors
    /// Returns an error if the metadata cannot be read or parsed
    fn load_category_metadata(&self) -> Result<CategoryMetadataIndex>;
}
