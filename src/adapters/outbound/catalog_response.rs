//! Decoding of the `allFactSheets` GraphQL response
//!
//! Shared by the network fetcher and the snapshot reader, which read the
//! same payload from different places.

use crate::obsolescence::domain::ItComponent;
use crate::shared::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<CatalogData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CatalogData {
    #[serde(rename = "allFactSheets")]
    all_fact_sheets: FactSheetConnection,
}

#[derive(Debug, Deserialize)]
struct FactSheetConnection {
    #[serde(default)]
    edges: Vec<FactSheetEdge>,
}

#[derive(Debug, Deserialize)]
struct FactSheetEdge {
    node: ItComponent,
}

/// Extracts the IT components from an `allFactSheets` response.
///
/// Accepts the full GraphQL envelope (`{"data": ...}`) as well as the bare
/// `data` object. Components keep the order of the edges.
///
/// # Errors
/// Fails when the payload is not valid JSON, when the response carries
/// GraphQL errors, or when `allFactSheets` is missing.
pub fn parse_catalog_response(payload: &str) -> Result<Vec<ItComponent>> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| anyhow::anyhow!("Catalog response is not valid JSON: {}", e))?;

    let data = if value.get("allFactSheets").is_some() {
        serde_json::from_value::<CatalogData>(value)?
    } else {
        let response: GraphQlResponse = serde_json::from_value(value)?;
        if !response.errors.is_empty() {
            let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
            anyhow::bail!("GraphQL query failed: {}", messages.join("; "));
        }
        response
            .data
            .ok_or_else(|| anyhow::anyhow!("Catalog response contains no data"))?
    };

    Ok(data
        .all_fact_sheets
        .edges
        .into_iter()
        .map(|edge| edge.node)
        .collect())
}
