/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod catalog_response;
pub mod chart;
pub mod composers;
pub mod console;
pub mod filesystem;
pub mod network;
