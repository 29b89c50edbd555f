//! Obsolescence domain: catalog value objects and the pure
//! filter/aggregation pipeline.
pub mod domain;
pub mod services;
