/// Network adapters for external API calls
mod leanix_client;

pub use leanix_client::LeanIxCatalogFetcher;
