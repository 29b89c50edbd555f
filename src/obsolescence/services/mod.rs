mod category_aggregator;
mod metadata_generator;
mod obsolescence_filter;

pub use category_aggregator::{CategoryAggregate, CategoryAggregation, CategoryAggregator};
pub use metadata_generator::MetadataGenerator;
pub use obsolescence_filter::ObsolescenceFilter;
