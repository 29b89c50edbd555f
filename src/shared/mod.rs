/// Shared kernel - error types, result alias and small concurrency helpers
pub mod error;
pub mod in_flight;
pub mod result;

pub use result::Result;
