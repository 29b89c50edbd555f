use crate::obsolescence::domain::{CategoryDescriptor, ChartBar, ChartData, ObsoleteComponent};
use indexmap::IndexMap;

/// Obsolete components sharing one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAggregate {
    descriptor: CategoryDescriptor,
    items: Vec<ObsoleteComponent>,
}

impl CategoryAggregate {
    fn new(descriptor: CategoryDescriptor) -> Self {
        Self {
            descriptor,
            items: Vec::new(),
        }
    }

    pub fn descriptor(&self) -> &CategoryDescriptor {
        &self.descriptor
    }

    pub fn key(&self) -> Option<&str> {
        self.descriptor.key.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.descriptor.label
    }

    /// Bar color of the category in the chart
    pub fn chart_color(&self) -> Option<&str> {
        self.descriptor.bg_color.as_deref()
    }

    pub fn items(&self) -> &[ObsoleteComponent] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// Aggregates keyed by category code, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryAggregation {
    aggregates: IndexMap<Option<String>, CategoryAggregate>,
}

impl CategoryAggregation {
    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    pub fn get(&self, key: Option<&str>) -> Option<&CategoryAggregate> {
        self.aggregates.get(&key.map(str::to_string))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryAggregate> {
        self.aggregates.values()
    }

    /// Number of components across all categories
    pub fn total_items(&self) -> usize {
        self.iter().map(CategoryAggregate::count).sum()
    }

    /// One bar per category: height is the item count, color the `bgColor`
    pub fn chart_data(&self) -> ChartData {
        ChartData {
            bars: self
                .iter()
                .map(|aggregate| ChartBar {
                    label: aggregate.label().to_string(),
                    value: aggregate.count(),
                    color: aggregate.chart_color().map(str::to_string),
                })
                .collect(),
        }
    }
}

/// CategoryAggregator - groups obsolete components by category
pub struct CategoryAggregator;

impl CategoryAggregator {
    /// Groups date-sorted obsolete components by category key.
    ///
    /// Categories appear in the order their earliest member appears; the
    /// descriptor of that member becomes the category's descriptor.
    pub fn aggregate(items: &[ObsoleteComponent]) -> CategoryAggregation {
        let mut aggregates: IndexMap<Option<String>, CategoryAggregate> = IndexMap::new();

        for item in items {
            aggregates
                .entry(item.category.key.clone())
                .or_insert_with(|| CategoryAggregate::new(item.category.clone()))
                .items
                .push(item.clone());
        }

        CategoryAggregation { aggregates }
    }
}
