use crate::obsolescence::domain::ItComponent;
use crate::shared::Result;
use async_trait::async_trait;

/// GraphQL query returning every IT component fact sheet with its lifecycle
pub const IT_COMPONENTS_QUERY: &str = r#"{
  allFactSheets(factSheetType: ITComponent) {
    edges {
      node {
        id
        name
        ... on ITComponent {
          category
          lifecycle {
            lifecyclePhase: asString
            phases {
              phase
              startDate
            }
          }
        }
      }
    }
  }
}"#;

/// CatalogFetcher port for loading the IT component catalog
///
/// Implementations return a read-only snapshot of all IT component fact
/// sheets, in catalog order.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Human-readable name of the catalog source, used in messages and errors
    fn source_name(&self) -> String;

    /// Fetches every IT component fact sheet
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog source cannot be reached or authenticated against
    /// - The response cannot be parsed
    async fn fetch_it_components(&self) -> Result<Vec<ItComponent>>;
}

#[async_trait]
impl<T: CatalogFetcher + ?Sized> CatalogFetcher for Box<T> {
    fn source_name(&self) -> String {
        (**self).source_name()
    }

    async fn fetch_it_components(&self) -> Result<Vec<ItComponent>> {
        (**self).fetch_it_components().await
    }
}
