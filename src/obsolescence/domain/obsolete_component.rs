use super::category::CategoryDescriptor;
use super::date_window::DATE_FORMAT;
use super::it_component::ItComponent;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

/// IT component whose end of life falls inside the reporting window.
///
/// Carries the catalog fields of the component, with the category resolved
/// for display and the lifecycle reduced to the obsolescence date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObsoleteComponent {
    pub id: String,
    pub name: String,
    pub category: CategoryDescriptor,
    #[serde(rename = "obsolescenceDate")]
    obsolescence_date: NaiveDate,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ObsoleteComponent {
    pub fn new(
        component: &ItComponent,
        category: CategoryDescriptor,
        obsolescence_date: NaiveDate,
    ) -> Self {
        Self {
            id: component.id.clone(),
            name: component.name.clone(),
            category,
            obsolescence_date,
            extra: component.extra.clone(),
        }
    }

    pub fn obsolescence_date(&self) -> NaiveDate {
        self.obsolescence_date
    }

    /// Obsolescence date as `YYYY-MM-DD`
    pub fn formatted_obsolescence_date(&self) -> String {
        self.obsolescence_date.format(DATE_FORMAT).to_string()
    }
}
