pub mod category;
pub mod chart_data;
pub mod date_window;
pub mod it_component;
pub mod obsolete_component;
pub mod report_metadata;

pub use category::{
    CategoryColors, CategoryDescriptor, CategoryMetadataIndex, CategoryResolver,
    UNDEFINED_CATEGORY_LABEL,
};
pub use chart_data::{ChartBar, ChartData};
pub use date_window::{parse_date, DateWindow, DATE_FORMAT};
pub use it_component::{ItComponent, Lifecycle, LifecyclePhase, END_OF_LIFE_PHASE};
pub use obsolete_component::ObsoleteComponent;
pub use report_metadata::ReportMetadata;
