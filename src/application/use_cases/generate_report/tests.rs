use super::*;
use crate::obsolescence::domain::{CategoryMetadataIndex, DateWindow, Lifecycle, LifecyclePhase};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

struct MockCatalogFetcher {
    components: Vec<ItComponent>,
    should_fail: bool,
    observed_in_flight: Arc<Mutex<Option<InFlightCounter>>>,
    in_flight_during_fetch: Arc<Mutex<Vec<usize>>>,
}

impl MockCatalogFetcher {
    fn new(components: Vec<ItComponent>) -> Self {
        Self {
            components,
            should_fail: false,
            observed_in_flight: Arc::new(Mutex::new(None)),
            in_flight_during_fetch: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new(vec![])
        }
    }
}

#[async_trait]
impl CatalogFetcher for MockCatalogFetcher {
    fn source_name(&self) -> String {
        "mock catalog".to_string()
    }

    async fn fetch_it_components(&self) -> Result<Vec<ItComponent>> {
        if let Some(counter) = self.observed_in_flight.lock().unwrap().as_ref() {
            self.in_flight_during_fetch
                .lock()
                .unwrap()
                .push(counter.in_flight());
        }
        if self.should_fail {
            anyhow::bail!("connection reset by peer");
        }
        Ok(self.components.clone())
    }
}

struct MockCategorySource {
    index: CategoryMetadataIndex,
    should_fail: bool,
}

impl CategoryMetadataSource for MockCategorySource {
    fn load_category_metadata(&self) -> Result<CategoryMetadataIndex> {
        if self.should_fail {
            anyhow::bail!("report setup unavailable");
        }
        Ok(self.index.clone())
    }
}

#[derive(Default, Clone)]
struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Progress: {}/{}", current, total));
    }

    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}

fn categories() -> MockCategorySource {
    MockCategorySource {
        index: CategoryMetadataIndex::default()
            .with_label("A", "Category A")
            .with_colors("A", "#ff0000", "#ffffff"),
        should_fail: false,
    }
}

fn eol(id: &str, category: Option<&str>, date: Option<&str>) -> ItComponent {
    let mut component = ItComponent::new(id, format!("Component {}", id)).with_lifecycle(
        Lifecycle::new(vec![LifecyclePhase::new("endOfLife", date)]),
    );
    component.category = category.map(str::to_string);
    component
}

fn march() -> ReportRequest {
    ReportRequest::new(DateWindow::parse("2024-03-01", "2024-03-31").unwrap())
}

#[tokio::test]
async fn test_execute_reference_scenario() {
    let fetcher = MockCatalogFetcher::new(vec![
        eol("1", Some("A"), Some("2024-03-15")),
        ItComponent::new("2", "Component 2"),
        eol("3", Some("A"), Some("2024-03-01")),
    ]);
    let reporter = MockProgressReporter::default();
    let use_case = GenerateReportUseCase::new(fetcher, categories(), reporter.clone());

    let response = use_case.execute(march()).await.unwrap();

    assert_eq!(response.catalog_size, 3);
    assert_eq!(response.obsolete_components.len(), 1);
    assert_eq!(response.obsolete_components[0].id, "1");
    assert_eq!(response.aggregation.len(), 1);
    let aggregate = response.aggregation.get(Some("A")).unwrap();
    assert_eq!(aggregate.count(), 1);
    assert_eq!(aggregate.label(), "Category A");

    let messages = reporter.messages.lock().unwrap().clone();
    assert!(messages.iter().any(|m| m.contains("Loaded 3 IT component(s)")));
    assert!(messages
        .iter()
        .any(|m| m.contains("Found 1 obsolete IT component(s) in 1 category")));
}

#[tokio::test]
async fn test_in_flight_counter_is_held_during_fetch_and_released_after() {
    let fetcher = MockCatalogFetcher::new(vec![]);
    let observed = fetcher.observed_in_flight.clone();
    let during = fetcher.in_flight_during_fetch.clone();
    let use_case = GenerateReportUseCase::new(fetcher, categories(), MockProgressReporter::default());
    *observed.lock().unwrap() = Some(use_case.in_flight());

    use_case.execute(march()).await.unwrap();

    assert_eq!(*during.lock().unwrap(), vec![1]);
    assert_eq!(use_case.in_flight().in_flight(), 0);
}

#[tokio::test]
async fn test_fetch_failure_is_reported_and_releases_counter() {
    let use_case = GenerateReportUseCase::new(
        MockCatalogFetcher::failing(),
        categories(),
        MockProgressReporter::default(),
    );

    let err = use_case.execute(march()).await.unwrap_err();

    let report_error = err.downcast_ref::<ReportError>().unwrap();
    assert!(matches!(report_error, ReportError::Fetch { source_name, details }
        if source_name == "mock catalog" && details.contains("connection reset by peer")));
    assert!(!use_case.in_flight().is_busy());
}

#[tokio::test]
async fn test_category_source_failure_is_a_fetch_error() {
    let source = MockCategorySource {
        index: CategoryMetadataIndex::default(),
        should_fail: true,
    };
    let use_case = GenerateReportUseCase::new(
        MockCatalogFetcher::new(vec![]),
        source,
        MockProgressReporter::default(),
    );

    let err = use_case.execute(march()).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::Fetch { source_name, .. }) if source_name == "report setup"
    ));
}

#[tokio::test]
async fn test_missing_category_metadata_warns() {
    let source = MockCategorySource {
        index: CategoryMetadataIndex::default(),
        should_fail: false,
    };
    let reporter = MockProgressReporter::default();
    let use_case =
        GenerateReportUseCase::new(MockCatalogFetcher::new(vec![]), source, reporter.clone());

    use_case.load_catalog().await.unwrap();

    let messages = reporter.messages.lock().unwrap().clone();
    assert!(messages
        .iter()
        .any(|m| m.starts_with("Error: ⚠️  Warning: No category metadata available")));
}

#[tokio::test]
async fn test_malformed_date_fails_the_computation() {
    let fetcher = MockCatalogFetcher::new(vec![eol("1", None, Some("2024/03/15"))]);
    let use_case = GenerateReportUseCase::new(fetcher, categories(), MockProgressReporter::default());

    let err = use_case.execute(march()).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::MalformedDate { value, .. }) if value == "2024/03/15"
    ));
}

#[tokio::test]
async fn test_compute_reuses_snapshot_for_new_window() {
    let fetcher = MockCatalogFetcher::new(vec![
        eol("1", Some("A"), Some("2024-03-15")),
        eol("2", None, Some("2024-04-15")),
    ]);
    let use_case = GenerateReportUseCase::new(fetcher, categories(), MockProgressReporter::default());
    let snapshot = use_case.load_catalog().await.unwrap();

    let march_report = use_case.compute(&snapshot, &march()).unwrap();
    let april = ReportRequest::new(DateWindow::parse("2024-04-01", "2024-04-30").unwrap());
    let april_report = use_case.compute(&snapshot, &april).unwrap();

    assert_eq!(march_report.obsolete_components[0].id, "1");
    assert_eq!(april_report.obsolete_components[0].id, "2");
    assert_eq!(april_report.obsolete_components[0].category.label, "Not defined");
}

#[tokio::test]
async fn test_empty_catalog_yields_empty_report() {
    let use_case = GenerateReportUseCase::new(
        MockCatalogFetcher::new(vec![]),
        categories(),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(march()).await.unwrap();
    assert!(response.is_empty());
    assert!(response.aggregation.is_empty());
}
