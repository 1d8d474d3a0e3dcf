//! Per-year report assembly.
//!
//! Runs every year-scoped query against a [`Dataset`] and collects the
//! results into a serializable [`YearReport`].

use frisk_core::queries::{BoroughCounts, FriskArrestRates, GenderBiasTable};
use frisk_core::{Borough, Dataset};
use serde::Serialize;

// ── Public types ──────────────────────────────────────────────────────────────

/// All year-scoped statistics for one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearReport {
    pub year: i32,
    /// Number of stops recorded for the year.
    pub records: usize,
    pub rates: FriskArrestRates,
    pub gender_bias: GenderBiasTable,
    pub borough_counts: BoroughCounts,
    /// `None` when no stop named a tracked borough.
    pub most_common_borough: Option<Borough>,
}

/// Year-over-year change in the share of stops matching a description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrimeTrend {
    pub description: String,
    pub from_year: i32,
    pub to_year: i32,
    pub from_percent: f64,
    pub to_percent: f64,
    /// `to_percent - from_percent`, in percentage points.
    pub change: f64,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Build the report for a single year. Unknown years produce an empty
/// report with undefined percentages.
pub fn build_year_report(dataset: &Dataset, year: i32) -> YearReport {
    YearReport {
        year,
        records: dataset.records_for_year(year).len(),
        rates: dataset.frisked_vs_arrested(year),
        gender_bias: dataset.gender_bias(year),
        borough_counts: dataset.borough_counts(year),
        most_common_borough: dataset.most_common_borough(year),
    }
}

/// Build one report per year present in `dataset`, in ascending year order.
pub fn build_reports(dataset: &Dataset) -> Vec<YearReport> {
    let mut years = dataset.years();
    years.sort_unstable();
    years
        .into_iter()
        .map(|year| build_year_report(dataset, year))
        .collect()
}

/// Compare the share of stops matching `description` between two years.
pub fn crime_trend(
    dataset: &Dataset,
    description: &str,
    from_year: i32,
    to_year: i32,
) -> CrimeTrend {
    CrimeTrend {
        description: description.to_string(),
        from_year,
        to_year,
        from_percent: dataset.description_share(from_year, description),
        to_percent: dataset.description_share(to_year, description),
        change: dataset.crime_increase(description, from_year, to_year),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
