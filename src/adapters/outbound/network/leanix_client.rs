use crate::adapters::outbound::catalog_response::parse_catalog_response;
use crate::obsolescence::domain::ItComponent;
use crate::ports::outbound::{CatalogFetcher, IT_COMPONENTS_QUERY};
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

const TOKEN_PATH: &str = "/services/mtm/v1/oauth2/token";
const GRAPHQL_PATH: &str = "/services/pathfinder/v1/graphql";

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
}

/// LeanIxCatalogFetcher adapter for loading IT components from a LeanIX workspace
///
/// Exchanges the workspace API token for a short-lived bearer token, then
/// runs the `allFactSheets` GraphQL query. Network errors, 5xx and 429
/// responses are retried; other failures end the fetch at once.
pub struct LeanIxCatalogFetcher {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
    max_retries: u32,
}

impl LeanIxCatalogFetcher {
    /// Creates a fetcher for the workspace at `base_url`
    ///
    /// # Errors
    /// `ReportError::Validation` when the URL or token is blank, or when the
    /// URL is not http(s).
    pub fn new(base_url: &str, api_token: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ReportError::Validation {
                message: "LeanIX base URL must not be empty".to_string(),
            }
            .into());
        }
        if !base_url.starts_with("https://") && !base_url.starts_with("http://") {
            return Err(ReportError::Validation {
                message: format!("LeanIX base URL must start with http(s)://: {}", base_url),
            }
            .into());
        }
        if api_token.trim().is_empty() {
            return Err(ReportError::Validation {
                message: "LeanIX API token must not be empty".to_string(),
            }
            .into());
        }

        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!("obsolescence-report/{}", version))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_token: api_token.trim().to_string(),
            max_retries: 3,
        })
    }

    fn token_url(&self) -> String {
        format!("{}{}", self.base_url, TOKEN_PATH)
    }

    fn graphql_url(&self) -> String {
        format!("{}{}", self.base_url, GRAPHQL_PATH)
    }

    /// Runs the whole exchange, retrying transient failures
    async fn fetch_with_retry(&self) -> Result<Vec<ItComponent>> {
        retry_transient(self.max_retries, || self.fetch_once()).await
    }

    async fn fetch_once(&self) -> std::result::Result<Vec<ItComponent>, AttemptError> {
        let bearer = self.request_access_token().await?;

        let response = self
            .client
            .post(self.graphql_url())
            .bearer_auth(bearer)
            .json(&serde_json::json!({ "query": IT_COMPONENTS_QUERY }))
            .send()
            .await
            .map_err(AttemptError::from_request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::from_status(
                status,
                anyhow::anyhow!("LeanIX GraphQL API returned status code {}", status),
            ));
        }

        let body = response.text().await.map_err(AttemptError::from_request)?;
        // A decoded body that fails to parse will not parse on a second try either
        parse_catalog_response(&body).map_err(AttemptError::Permanent)
    }

    /// Exchanges the API token for a bearer token (client credentials grant)
    async fn request_access_token(&self) -> std::result::Result<String, AttemptError> {
        let response = self
            .client
            .post(self.token_url())
            .basic_auth("apitoken", Some(&self.api_token))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await
            .map_err(AttemptError::from_request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::from_status(
                status,
                anyhow::anyhow!("LeanIX token endpoint returned status code {}", status),
            ));
        }

        let token: AccessTokenResponse =
            response.json().await.map_err(AttemptError::from_request)?;
        Ok(token.access_token)
    }
}

/// Outcome of a failed attempt, split by whether another attempt can help
#[derive(Debug)]
enum AttemptError {
    Transient(anyhow::Error),
    Permanent(anyhow::Error),
}

impl AttemptError {
    /// 5xx and 429 are worth retrying; any other status is final
    fn from_status(status: StatusCode, error: anyhow::Error) -> Self {
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            AttemptError::Transient(error)
        } else {
            AttemptError::Permanent(error)
        }
    }

    fn from_request(error: reqwest::Error) -> Self {
        if error.is_decode() || error.is_builder() {
            AttemptError::Permanent(error.into())
        } else {
            AttemptError::Transient(error.into())
        }
    }
}

/// Calls `attempt` up to `max_retries` times with linear backoff
///
/// Stops at the first success or the first permanent failure.
async fn retry_transient<T, F, Fut>(max_retries: u32, mut attempt: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, AttemptError>>,
{
    let mut last_error = None;

    for n in 1..=max_retries {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(AttemptError::Permanent(e)) => return Err(e),
            Err(AttemptError::Transient(e)) => {
                last_error = Some(e);
                if n < max_retries {
                    tokio::time::sleep(Duration::from_millis(100 * n as u64)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No attempt was made")))
}

#[async_trait]
impl CatalogFetcher for LeanIxCatalogFetcher {
    fn source_name(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch_it_components(&self) -> Result<Vec<ItComponent>> {
        self.fetch_with_retry().await
    }
}
