//! Data ingestion layer for frisk-stats.
//!
//! Responsible for discovering and parsing stop-and-frisk CSV exports into a
//! [`frisk_core::Dataset`], and for bundling the per-year queries into
//! reports.

pub mod reader;
pub mod report;
