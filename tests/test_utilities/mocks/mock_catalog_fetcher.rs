use async_trait::async_trait;
use obsolescence_report::obsolescence::domain::{Lifecycle, LifecyclePhase};
use obsolescence_report::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock CatalogFetcher for testing
pub struct MockCatalogFetcher {
    pub components: Vec<ItComponent>,
    pub should_fail: bool,
    pub fetch_count: Arc<AtomicUsize>,
}

impl MockCatalogFetcher {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            should_fail: false,
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Adds a component whose end of life starts on `end_of_life`
    pub fn with_component(
        mut self,
        id: &str,
        name: &str,
        category: Option<&str>,
        end_of_life: &str,
    ) -> Self {
        let mut component = ItComponent::new(id, name).with_lifecycle(Lifecycle::new(vec![
            LifecyclePhase::new("endOfLife", Some(end_of_life)),
        ]));
        component.category = category.map(str::to_string);
        self.components.push(component);
        self
    }

    /// Adds a component without lifecycle data
    pub fn with_component_without_lifecycle(mut self, id: &str, name: &str) -> Self {
        self.components.push(ItComponent::new(id, name));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

impl Default for MockCatalogFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogFetcher for MockCatalogFetcher {
    fn source_name(&self) -> String {
        "mock workspace".to_string()
    }

    async fn fetch_it_components(&self) -> Result<Vec<ItComponent>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock catalog fetcher failure");
        }
        Ok(self.components.clone())
    }
}
