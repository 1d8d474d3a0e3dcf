//! In-memory store of stop-and-frisk records grouped by year.
//!
//! A [`Dataset`] owns one [`YearBucket`] per distinct year. Buckets keep the
//! order in which years were first seen, and each bucket keeps its records
//! in ingestion order. Nothing is ever removed or rewritten.
//!
//! The query methods live in [`crate::queries`].

use std::collections::HashMap;

use tracing::trace;

use crate::models::Record;

// ── YearBucket ────────────────────────────────────────────────────────────────

/// All records for exactly one year, in the order they were ingested.
#[derive(Debug, Clone)]
pub struct YearBucket {
    year: i32,
    records: Vec<Record>,
}

impl YearBucket {
    fn new(year: i32) -> Self {
        Self {
            year,
            records: Vec::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// Year-keyed collection of [`YearBucket`]s.
///
/// Not synchronised: share it across threads only behind your own lock.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    buckets: Vec<YearBucket>,
    // year -> position in `buckets`
    index: HashMap<i32, usize>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` to the bucket for `year`, creating the bucket on the
    /// first occurrence of that year. Any integer year is accepted.
    pub fn ingest(&mut self, year: i32, record: Record) {
        let slot = match self.index.get(&year) {
            Some(&slot) => slot,
            None => {
                trace!("Creating bucket for year {}", year);
                self.buckets.push(YearBucket::new(year));
                let slot = self.buckets.len() - 1;
                self.index.insert(year, slot);
                slot
            }
        };
        self.buckets[slot].records.push(record);
    }

    /// Records for `year`, or an empty slice when the year was never seen.
    pub fn records_for_year(&self, year: i32) -> &[Record] {
        self.bucket(year).map(YearBucket::records).unwrap_or(&[])
    }

    /// The bucket for `year`, if any.
    pub fn bucket(&self, year: i32) -> Option<&YearBucket> {
        self.index.get(&year).map(|&slot| &self.buckets[slot])
    }

    /// Buckets in first-seen-year order.
    pub fn buckets(&self) -> impl Iterator<Item = &YearBucket> {
        self.buckets.iter()
    }

    /// Distinct years in first-seen order.
    pub fn years(&self) -> Vec<i32> {
        self.buckets.iter().map(|b| b.year).collect()
    }

    /// Total number of records across all years.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(YearBucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Extend<(i32, Record)> for Dataset {
    fn extend<I: IntoIterator<Item = (i32, Record)>>(&mut self, iter: I) {
        for (year, record) in iter {
            self.ingest(year, record);
        }
    }
}

impl FromIterator<(i32, Record)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (i32, Record)>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        dataset.extend(iter);
        dataset
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
