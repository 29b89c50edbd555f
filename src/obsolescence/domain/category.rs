use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label used for components without a category
pub const UNDEFINED_CATEGORY_LABEL: &str = "Not defined";

/// Display colors configured for a category value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryColors {
    #[serde(rename = "bgColor", default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Resolves category codes to their display metadata.
pub trait CategoryResolver {
    /// Human-readable label for a category code
    fn label(&self, code: &str) -> String;

    /// Colors keyed by the raw category code; `None` for unknown codes
    fn colors(&self, code: &str) -> Option<CategoryColors>;
}

/// Category of an obsolete component, resolved for display.
///
/// One descriptor is built per obsolete component; the aggregator keeps the
/// first one it sees for each key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub key: Option<String>,
    pub label: String,
    #[serde(rename = "bgColor", skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CategoryDescriptor {
    /// Descriptor for components whose category is null
    pub fn undefined() -> Self {
        Self {
            key: None,
            label: UNDEFINED_CATEGORY_LABEL.to_string(),
            bg_color: None,
            color: None,
        }
    }

    pub fn resolve<R: CategoryResolver + ?Sized>(code: Option<&str>, resolver: &R) -> Self {
        let Some(code) = code else {
            return Self::undefined();
        };

        let colors = resolver.colors(code).unwrap_or_default();
        Self {
            key: Some(code.to_string()),
            label: resolver.label(code),
            bg_color: colors.bg_color,
            color: colors.color,
        }
    }
}

/// Lookup table of category labels and colors.
///
/// Codes without a translated label fall back to the raw code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMetadataIndex {
    labels: HashMap<String, String>,
    colors: HashMap<String, CategoryColors>,
}

impl CategoryMetadataIndex {
    pub fn new(labels: HashMap<String, String>, colors: HashMap<String, CategoryColors>) -> Self {
        Self { labels, colors }
    }

    pub fn with_label(mut self, code: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(code.into(), label.into());
        self
    }

    pub fn with_colors(
        mut self,
        code: impl Into<String>,
        bg_color: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        self.colors.insert(
            code.into(),
            CategoryColors {
                bg_color: Some(bg_color.into()),
                color: Some(color.into()),
            },
        );
        self
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.colors.is_empty()
    }
}

impl CategoryResolver for CategoryMetadataIndex {
    fn label(&self, code: &str) -> String {
        self.labels
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    fn colors(&self, code: &str) -> Option<CategoryColors> {
        self.colors.get(code).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> CategoryMetadataIndex {
        CategoryMetadataIndex::default()
            .with_label("software", "Software")
            .with_colors("software", "#1f77b4", "#ffffff")
    }

    #[test]
    fn test_resolve_null_category() {
        let descriptor = CategoryDescriptor::resolve(None, &index());
        assert_eq!(descriptor, CategoryDescriptor::undefined());
        assert_eq!(descriptor.label, "Not defined");
        assert!(descriptor.key.is_none());
        assert!(descriptor.bg_color.is_none());
        assert!(descriptor.color.is_none());
    }

    #[test]
    fn test_resolve_known_category() {
        let descriptor = CategoryDescriptor::resolve(Some("software"), &index());
        assert_eq!(descriptor.key.as_deref(), Some("software"));
        assert_eq!(descriptor.label, "Software");
        assert_eq!(descriptor.bg_color.as_deref(), Some("#1f77b4"));
        assert_eq!(descriptor.color.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_resolve_unknown_category_has_no_colors() {
        let descriptor = CategoryDescriptor::resolve(Some("hardware"), &index());
        assert_eq!(descriptor.key.as_deref(), Some("hardware"));
        assert_eq!(descriptor.label, "hardware");
        assert!(descriptor.bg_color.is_none());
        assert!(descriptor.color.is_none());
    }

    #[test]
    fn test_descriptor_serialization_skips_missing_colors() {
        let json = serde_json::to_string(&CategoryDescriptor::undefined()).unwrap();
        assert_eq!(json, r#"{"key":null,"label":"Not defined"}"#);
    }

    #[test]
    fn test_index_is_empty() {
        assert!(CategoryMetadataIndex::default().is_empty());
        assert!(!index().is_empty());
    }
}
