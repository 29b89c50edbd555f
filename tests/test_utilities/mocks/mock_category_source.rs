use obsolescence_report::prelude::*;

/// Mock CategoryMetadataSource for testing
pub struct MockCategorySource {
    pub index: CategoryMetadataIndex,
    pub should_fail: bool,
}

impl MockCategorySource {
    pub fn new() -> Self {
        Self {
            index: CategoryMetadataIndex::default(),
            should_fail: false,
        }
    }

    pub fn with_category(mut self, code: &str, label: &str, bg_color: &str) -> Self {
        self.index = self
            .index
            .with_label(code, label)
            .with_colors(code, bg_color, "#ffffff");
        self
    }

    pub fn with_failure() -> Self {
        Self {
            index: CategoryMetadataIndex::default(),
            should_fail: true,
        }
    }
}

impl Default for MockCategorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryMetadataSource for MockCategorySource {
    fn load_category_metadata(&self) -> Result<CategoryMetadataIndex> {
        if self.should_fail {
            anyhow::bail!("Mock category source failure");
        }
        Ok(self.index.clone())
    }
}
