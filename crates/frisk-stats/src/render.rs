//! Plain-text and JSON rendering of query results.

use std::fmt::Write as _;

use frisk_core::formatting::{format_count, format_delta, format_percent, trend_label};
use frisk_core::queries::{BoroughCounts, FriskArrestRates, GenderBiasTable};
use frisk_core::{Borough, Dataset, Record};
use frisk_data::report::{CrimeTrend, YearReport};
use serde::Serialize;

/// Printed when no stop in a year named a tracked borough.
pub const NO_BOROUGH: &str = "no data";

/// Record count for one year, as listed by the `years` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub records: usize,
}

/// Stops matching a `population` query.
#[derive(Debug, Serialize)]
pub struct Population<'a> {
    pub year: i32,
    pub race: &'a str,
    pub count: usize,
    pub records: Vec<&'a Record>,
}

/// Pretty-printed JSON for any serializable result.
pub fn json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Years in ascending order with their record counts.
pub fn year_summaries(dataset: &Dataset) -> Vec<YearSummary> {
    let mut summaries: Vec<YearSummary> = dataset
        .buckets()
        .map(|b| YearSummary {
            year: b.year(),
            records: b.len(),
        })
        .collect();
    summaries.sort_by_key(|s| s.year);
    summaries
}

// ── Text rendering ────────────────────────────────────────────────────────────

pub fn years(summaries: &[YearSummary]) -> String {
    if summaries.is_empty() {
        return "No records loaded".to_string();
    }
    let mut out = String::new();
    for s in summaries {
        let _ = writeln!(out, "{}  {:>12} stops", s.year, format_count(s.records));
    }
    out.trim_end().to_string()
}

pub fn population(population: &Population<'_>) -> String {
    let mut out = format!(
        "{} stops of race {:?} in {}",
        format_count(population.count),
        population.race,
        population.year
    );
    for r in &population.records {
        let _ = write!(
            out,
            "\n  {:<40} {:<2} {:<14} frisked={:<5} arrested={}",
            r.description(),
            r.gender(),
            r.location(),
            r.frisked(),
            r.arrested()
        );
    }
    out
}

pub fn rates(year: i32, rates: &FriskArrestRates) -> String {
    format!(
        "{}: frisked {}, arrested {}",
        year,
        format_percent(rates.frisked_percent),
        format_percent(rates.arrested_percent)
    )
}

pub fn gender_bias(year: i32, table: &GenderBiasTable) -> String {
    let mut out = format!("Gender bias {}\n", year);
    let _ = writeln!(out, "{:<8}{:>10}{:>10}{:>10}", "", "Black", "White", "Total");
    for (label, row) in [("Female", table.female()), ("Male", table.male())] {
        let _ = writeln!(
            out,
            "{:<8}{:>10}{:>10}{:>10}",
            label,
            format_percent(row[GenderBiasTable::BLACK]),
            format_percent(row[GenderBiasTable::WHITE]),
            format_percent(row[GenderBiasTable::COMBINED]),
        );
    }
    out.trim_end().to_string()
}

pub fn crime_trend(trend: &CrimeTrend) -> String {
    format!(
        "{:?}: {} in {} -> {} in {} ({}, {})",
        trend.description,
        format_percent(trend.from_percent),
        trend.from_year,
        format_percent(trend.to_percent),
        trend.to_year,
        format_delta(trend.change),
        trend_label(trend.change)
    )
}

pub fn borough(year: i32, counts: &BoroughCounts, leader: Option<Borough>) -> String {
    let mut out = format!(
        "{}: most stops in {}",
        year,
        leader.map(Borough::name).unwrap_or(NO_BOROUGH)
    );
    for b in Borough::ALL {
        let _ = write!(out, "\n  {:<14}{:>10}", b.name(), format_count(counts.get(b)));
    }
    out
}

pub fn report(report: &YearReport) -> String {
    [
        format!("== {} ({} stops) ==", report.year, format_count(report.records)),
        rates(report.year, &report.rates),
        gender_bias(report.year, &report.gender_bias),
        borough(
            report.year,
            &report.borough_counts,
            report.most_common_borough,
        ),
    ]
    .join("\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        let mut ds = Dataset::new();
        ds.ingest(2012, Record::new("ROBBERY", true, true, "M", "B", "BRONX"));
        ds.ingest(2011, Record::new("ASSAULT", false, true, "F", "W", "QUEENS"));
        ds.ingest(2012, Record::new("TRESPASS", false, false, "F", "B", "BRONX"));
        ds
    }

    #[test]
    fn test_year_summaries_sorted() {
        let summaries = year_summaries(&sample_dataset());
        assert_eq!(
            summaries,
            vec![
                YearSummary {
                    year: 2011,
                    records: 1
                },
                YearSummary {
                    year: 2012,
                    records: 2
                },
            ]
        );
    }

    #[test]
    fn test_years_empty() {
        assert_eq!(years(&[]), "No records loaded");
    }

    #[test]
    fn test_rates_text() {
        let r = FriskArrestRates {
            frisked_percent: 50.0,
            arrested_percent: 25.0,
        };
        assert_eq!(rates(2011, &r), "2011: frisked 50.00%, arrested 25.00%");
    }

    #[test]
    fn test_rates_text_undefined() {
        let r = Dataset::new().frisked_vs_arrested(2011);
        assert_eq!(rates(2011, &r), "2011: frisked n/a, arrested n/a");
    }

    #[test]
    fn test_gender_bias_text_has_both_rows() {
        let table = sample_dataset().gender_bias(2012);
        let text = gender_bias(2012, &table);
        assert!(text.contains("Female"));
        assert!(text.contains("Male"));
        // Black: 1 female, 1 male out of 2; no White stops in 2012.
        assert!(text.contains("25.00%"));
        assert!(text.contains("n/a"));
    }

    #[test]
    fn test_borough_text_no_data() {
        let ds = Dataset::new();
        let text = borough(2011, &ds.borough_counts(2011), ds.most_common_borough(2011));
        assert!(text.starts_with("2011: most stops in no data"));
    }

    #[test]
    fn test_borough_text_leader() {
        let ds = sample_dataset();
        let text = borough(2012, &ds.borough_counts(2012), ds.most_common_borough(2012));
        assert!(text.starts_with("2012: most stops in Bronx"));
    }

    #[test]
    fn test_population_text_and_json() {
        let ds = sample_dataset();
        let records = ds.population_stopped(2012, "B");
        let pop = Population {
            year: 2012,
            race: "B",
            count: records.len(),
            records,
        };

        let text = population(&pop);
        assert!(text.starts_with("2 stops of race \"B\" in 2012"));
        assert!(text.contains("ROBBERY"));
        assert!(text.contains("TRESPASS"));

        let value: serde_json::Value = serde_json::from_str(&json(&pop).unwrap()).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["records"][0]["description"], "ROBBERY");
    }
}
