mod bootstrap;
mod render;

use anyhow::{Context, Result};
use frisk_core::settings::{Query, Settings};
use frisk_core::Dataset;
use frisk_data::reader::{load_dataset, LoadOptions};
use frisk_data::report;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("frisk-stats v{} starting", env!("CARGO_PKG_VERSION"));

    let data_path = settings.data_path()?;
    let options = LoadOptions {
        skip_malformed: settings.skip_malformed,
    };
    let (dataset, stats) = load_dataset(data_path, options)
        .with_context(|| format!("Failed to load {}", data_path.display()))?;

    tracing::info!(
        "Loaded {} records from {} files ({} years)",
        stats.records_loaded,
        stats.files,
        dataset.years().len()
    );
    if stats.lines_skipped > 0 {
        tracing::warn!("Skipped {} malformed lines", stats.lines_skipped);
    }

    println!("{}", run_query(&settings, &dataset)?);

    Ok(())
}

/// Answer the configured query against `dataset`, rendered as text or JSON.
fn run_query(settings: &Settings, dataset: &Dataset) -> Result<String> {
    let json = settings.is_json();

    let output = match &settings.query {
        Query::Years => {
            let summaries = render::year_summaries(dataset);
            if json {
                render::json(&summaries)?
            } else {
                render::years(&summaries)
            }
        }

        Query::Population { year, race } => {
            let records = dataset.population_stopped(*year, race);
            let population = render::Population {
                year: *year,
                race,
                count: records.len(),
                records,
            };
            if json {
                render::json(&population)?
            } else {
                render::population(&population)
            }
        }

        Query::Rates { year } => {
            let rates = dataset.frisked_vs_arrested(*year);
            if json {
                render::json(&rates)?
            } else {
                render::rates(*year, &rates)
            }
        }

        Query::GenderBias { year } => {
            let table = dataset.gender_bias(*year);
            if json {
                render::json(&table)?
            } else {
                render::gender_bias(*year, &table)
            }
        }

        Query::CrimeIncrease {
            description,
            from,
            to,
        } => {
            if from > to {
                tracing::warn!(
                    "--from {} is later than --to {}; the change is reported as given",
                    from,
                    to
                );
            }
            let trend = report::crime_trend(dataset, description, *from, *to);
            if json {
                render::json(&trend)?
            } else {
                render::crime_trend(&trend)
            }
        }

        Query::Borough { year } => {
            let counts = dataset.borough_counts(*year);
            let leader = dataset.most_common_borough(*year);
            if json {
                render::json(&serde_json::json!({
                    "year": year,
                    "most_common_borough": leader,
                    "counts": counts,
                }))?
            } else {
                render::borough(*year, &counts, leader)
            }
        }

        Query::Report { year } => {
            let reports = match year {
                Some(year) => vec![report::build_year_report(dataset, *year)],
                None => report::build_reports(dataset),
            };
            if json {
                render::json(&reports)?
            } else {
                reports
                    .iter()
                    .map(render::report)
                    .collect::<Vec<_>>()
                    .join("\n\n")
            }
        }
    };

    Ok(output)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
