use crate::obsolescence::domain::{
    parse_date, CategoryDescriptor, CategoryResolver, DateWindow, ItComponent, ObsoleteComponent,
};
use crate::shared::error::ReportError;

/// ObsolescenceFilter - selects the components reaching end of life inside a window
///
/// Pure service: no I/O, no logging. Components without lifecycle, without an
/// `endOfLife` phase or without a start date on that phase are skipped. An
/// unparseable end-of-life date fails the whole run.
pub struct ObsolescenceFilter;

impl ObsolescenceFilter {
    /// Filters and enriches the catalog
    ///
    /// # Arguments
    /// * `components` - Catalog snapshot, in catalog order
    /// * `window` - Reporting window, exclusive on both ends
    /// * `resolver` - Category label and color lookup
    ///
    /// # Returns
    /// Obsolete components sorted by obsolescence date; equal dates keep
    /// catalog order
    ///
    /// # Errors
    /// `ReportError::MalformedDate` when an end-of-life date is not `YYYY-MM-DD`
    pub fn filter<R: CategoryResolver + ?Sized>(
        components: &[ItComponent],
        window: &DateWindow,
        resolver: &R,
    ) -> Result<Vec<ObsoleteComponent>, ReportError> {
        let mut obsolete = Vec::new();

        for component in components {
            let Some(raw_date) = component.end_of_life_date() else {
                continue;
            };

            let context = format!("endOfLife of IT component '{}'", component.id);
            let obsolescence_date = parse_date(raw_date, &context)?;
            if !window.contains(obsolescence_date) {
                continue;
            }

            let category = CategoryDescriptor::resolve(component.category.as_deref(), resolver);
            obsolete.push(ObsoleteComponent::new(component, category, obsolescence_date));
        }

        // sort_by_key is stable
        obsolete.sort_by_key(ObsoleteComponent::obsolescence_date);
        Ok(obsolete)
    }
}
