//! CSV discovery and loading.
//!
//! Reads NYPD stop-and-frisk exports (one header line, then one incident per
//! line) and ingests each line into a [`Dataset`] in file order. Only a
//! handful of columns are used, picked out by position.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use frisk_core::error::{FriskError, Result};
use frisk_core::{Dataset, Record};
use serde::Serialize;
use tracing::{debug, warn};

// ── Column layout ─────────────────────────────────────────────────────────────

pub const YEAR_FIELD: usize = 0;
pub const DESCRIPTION_FIELD: usize = 2;
pub const ARRESTED_FIELD: usize = 13;
pub const FRISKED_FIELD: usize = 16;
pub const GENDER_FIELD: usize = 52;
pub const RACE_FIELD: usize = 66;
pub const LOCATION_FIELD: usize = 71;

/// Value of a yes/no column that means "yes". Anything else is "no".
const FLAG_YES: &str = "Y";

// ── Options and statistics ────────────────────────────────────────────────────

/// How the loader treats bad input.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Log and skip malformed data lines instead of failing on the first one.
    pub skip_malformed: bool,
}

/// Counters collected while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub files: usize,
    pub lines_read: u64,
    pub records_loaded: u64,
    pub lines_skipped: u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.csv` files recursively under `data_path`, sorted by path.
pub fn find_csv_files(data_path: &Path) -> Vec<PathBuf> {
    if !data_path.exists() {
        warn!("Data path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load a single CSV file, or every CSV file under a directory, into a new
/// [`Dataset`].
///
/// Files are read in sorted path order, so years spread over several files
/// keep a deterministic bucket order.
pub fn load_dataset(data_path: &Path, options: LoadOptions) -> Result<(Dataset, LoadStats)> {
    if !data_path.exists() {
        return Err(FriskError::DataPathNotFound(data_path.to_path_buf()));
    }

    let files = if data_path.is_dir() {
        let files = find_csv_files(data_path);
        if files.is_empty() {
            return Err(FriskError::NoDataFiles(data_path.to_path_buf()));
        }
        files
    } else {
        vec![data_path.to_path_buf()]
    };

    let mut dataset = Dataset::new();
    let mut stats = LoadStats::default();
    for file in &files {
        load_file(file, &mut dataset, options, &mut stats)?;
    }

    debug!(
        "Loaded {} records over {} years from {} files",
        stats.records_loaded,
        dataset.years().len(),
        stats.files
    );

    Ok((dataset, stats))
}

/// Load one CSV file into `dataset`, updating `stats`.
pub fn load_file(
    path: &Path,
    dataset: &mut Dataset,
    options: LoadOptions,
    stats: &mut LoadStats,
) -> Result<()> {
    let file = File::open(path).map_err(|source| FriskError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let before = stats.clone();
    load_from_reader(file, dataset, options, stats)?;
    stats.files += 1;

    debug!(
        "File {}: {} read, {} loaded, {} skipped",
        path.display(),
        stats.lines_read - before.lines_read,
        stats.records_loaded - before.records_loaded,
        stats.lines_skipped - before.lines_skipped,
    );

    Ok(())
}

/// Parse CSV text from any reader into `dataset`.
///
/// The first line is a header and is discarded. Blank lines are ignored.
pub fn load_from_reader<R: Read>(
    reader: R,
    dataset: &mut Dataset,
    options: LoadOptions,
    stats: &mut LoadStats,
) -> Result<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    for result in rdr.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) if options.skip_malformed && matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) => {
                warn!("Skipping undecodable line: {}", e);
                stats.lines_read += 1;
                stats.lines_skipped += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        stats.lines_read += 1;

        let line = row.position().map(|p| p.line()).unwrap_or(stats.lines_read + 1);
        match parse_record(&row, line) {
            Ok((year, record)) => {
                dataset.ingest(year, record);
                stats.records_loaded += 1;
            }
            Err(e) if options.skip_malformed && e.is_line_error() => {
                warn!("Skipping malformed line: {}", e);
                stats.lines_skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Pick the year and [`Record`] out of one CSV row.
///
/// `line` is the 1-based line number used in error messages.
pub fn parse_record(row: &StringRecord, line: u64) -> Result<(i32, Record)> {
    let field = |index: usize| row.get(index).ok_or(FriskError::MissingField { line, index });

    let raw_year = field(YEAR_FIELD)?;
    let year = raw_year
        .trim()
        .parse::<i32>()
        .map_err(|_| FriskError::InvalidYear {
            line,
            value: raw_year.to_string(),
        })?;

    let record = Record::new(
        field(DESCRIPTION_FIELD)?,
        field(ARRESTED_FIELD)? == FLAG_YES,
        field(FRISKED_FIELD)? == FLAG_YES,
        field(GENDER_FIELD)?,
        field(RACE_FIELD)?,
        field(LOCATION_FIELD)?,
    );

    Ok((year, record))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
