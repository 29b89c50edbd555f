//! Category metadata from the host's report setup document

use crate::obsolescence::domain::{CategoryColors, CategoryMetadataIndex};
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;

const IT_COMPONENT_TYPE: &str = "ITComponent";
const CATEGORY_FIELD: &str = "category";

#[derive(Debug, Deserialize)]
struct ReportSetup {
    settings: Settings,
    /// Category code -> display label
    #[serde(default)]
    translations: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(rename = "viewModel")]
    view_model: ViewModel,
}

#[derive(Debug, Deserialize)]
struct ViewModel {
    #[serde(rename = "factSheets", default)]
    fact_sheets: Vec<FactSheetViewModel>,
}

#[derive(Debug, Deserialize)]
struct FactSheetViewModel {
    #[serde(rename = "type")]
    fact_sheet_type: String,
    #[serde(rename = "fieldMetaData", default)]
    field_meta_data: HashMap<String, FieldMetaData>,
}

#[derive(Debug, Deserialize)]
struct FieldMetaData {
    #[serde(default)]
    values: HashMap<String, CategoryColors>,
}

/// Builds the category lookup table from a report setup JSON document.
///
/// Colors come from
/// `settings.viewModel.factSheets[type=ITComponent].fieldMetaData.category.values`,
/// labels from the optional top-level `translations` map.
pub fn parse_report_setup(content: &str) -> Result<CategoryMetadataIndex> {
    let setup: ReportSetup = serde_json::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse report setup: {}", e))?;

    let mut it_component = setup
        .settings
        .view_model
        .fact_sheets
        .into_iter()
        .find(|fs| fs.fact_sheet_type == IT_COMPONENT_TYPE)
        .ok_or_else(|| anyhow::anyhow!("Report setup has no {} view model", IT_COMPONENT_TYPE))?;

    let category = it_component
        .field_meta_data
        .remove(CATEGORY_FIELD)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Report setup has no '{}' field metadata for {}",
                CATEGORY_FIELD,
                IT_COMPONENT_TYPE
            )
        })?;

    Ok(CategoryMetadataIndex::new(setup.translations, category.values))
}
