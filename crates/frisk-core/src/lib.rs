//! Core data model and query layer for stop-and-frisk statistics.
//!
//! Holds the immutable [`models::Record`], the year-bucketed
//! [`dataset::Dataset`] and the aggregate queries implemented on it, along
//! with the shared error type, CLI settings and output formatting.

pub mod calculations;
pub mod dataset;
pub mod error;
pub mod formatting;
pub mod models;
pub mod queries;
pub mod settings;

pub use dataset::{Dataset, YearBucket};
pub use error::{FriskError, Result};
pub use models::{Borough, Record};
