/// Ports module defining interfaces for hexagonal architecture
///
/// The application core reaches the catalog, the category metadata, the
/// chart renderer, the document composer and the output destination only
/// through the outbound ports declared here.
pub mod outbound;
