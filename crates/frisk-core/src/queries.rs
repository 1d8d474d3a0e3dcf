//! Aggregate queries over a [`Dataset`].
//!
//! Every query is a pure read. An unknown year behaves like a year with no
//! records, so percentages over it come out as `NaN` (see
//! [`crate::calculations`]) and the borough query yields `None`.

use serde::{Deserialize, Serialize};

use crate::calculations::{half_share, percentage};
use crate::dataset::Dataset;
use crate::models::{Borough, Record};

// ── Result types ──────────────────────────────────────────────────────────────

/// Share of a year's stops that involved a frisk, and that ended in arrest.
///
/// The two figures are independent: a stop can count towards both, one, or
/// neither.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FriskArrestRates {
    pub frisked_percent: f64,
    pub arrested_percent: f64,
}

/// Raw per-race, per-gender counts behind a [`GenderBiasTable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCounts {
    /// Every record with race `B`, whatever its gender code.
    pub black_total: usize,
    pub black_female: usize,
    pub black_male: usize,
    /// Every record with race `W`, whatever its gender code.
    pub white_total: usize,
    pub white_female: usize,
    pub white_male: usize,
}

impl GenderCounts {
    fn add(&mut self, record: &Record) {
        let female = record.gender().eq_ignore_ascii_case("F");
        let male = record.gender().eq_ignore_ascii_case("M");

        if record.race().eq_ignore_ascii_case("B") {
            self.black_total += 1;
            if female {
                self.black_female += 1;
            } else if male {
                self.black_male += 1;
            }
        } else if record.race().eq_ignore_ascii_case("W") {
            self.white_total += 1;
            if female {
                self.white_female += 1;
            } else if male {
                self.white_male += 1;
            }
        }
    }
}

/// 2×3 gender-by-race table.
///
/// Row 0 is female, row 1 is male. Columns are Black, White, and the sum of
/// the two. Each race cell is `gender_count / race_total * 50`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenderBiasTable {
    pub rows: [[f64; 3]; 2],
    pub counts: GenderCounts,
}

impl GenderBiasTable {
    pub const FEMALE: usize = 0;
    pub const MALE: usize = 1;

    pub const BLACK: usize = 0;
    pub const WHITE: usize = 1;
    pub const COMBINED: usize = 2;

    fn from_counts(counts: GenderCounts) -> Self {
        let row = |black: usize, white: usize| {
            let b = half_share(black, counts.black_total);
            let w = half_share(white, counts.white_total);
            [b, w, b + w]
        };
        Self {
            rows: [
                row(counts.black_female, counts.white_female),
                row(counts.black_male, counts.white_male),
            ],
            counts,
        }
    }

    pub fn female(&self) -> [f64; 3] {
        self.rows[Self::FEMALE]
    }

    pub fn male(&self) -> [f64; 3] {
        self.rows[Self::MALE]
    }
}

/// Stop counts for each tracked borough in one year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoroughCounts {
    pub brooklyn: usize,
    pub manhattan: usize,
    pub bronx: usize,
    pub queens: usize,
    pub staten_island: usize,
}

impl BoroughCounts {
    pub fn get(&self, borough: Borough) -> usize {
        match borough {
            Borough::Brooklyn => self.brooklyn,
            Borough::Manhattan => self.manhattan,
            Borough::Bronx => self.bronx,
            Borough::Queens => self.queens,
            Borough::StatenIsland => self.staten_island,
        }
    }

    fn slot_mut(&mut self, borough: Borough) -> &mut usize {
        match borough {
            Borough::Brooklyn => &mut self.brooklyn,
            Borough::Manhattan => &mut self.manhattan,
            Borough::Bronx => &mut self.bronx,
            Borough::Queens => &mut self.queens,
            Borough::StatenIsland => &mut self.staten_island,
        }
    }

    /// Records that named one of the five boroughs.
    pub fn total(&self) -> usize {
        Borough::ALL.into_iter().map(|b| self.get(b)).sum()
    }

    /// The borough with the highest count.
    ///
    /// Boroughs are scanned in [`Borough::ALL`] order and a later one only
    /// takes the lead with a strictly greater count, so ties go to the
    /// earlier borough. Returns `None` when every count is zero.
    pub fn leader(&self) -> Option<Borough> {
        let mut best: Option<(Borough, usize)> = None;
        for borough in Borough::ALL {
            let count = self.get(borough);
            let current = best.map_or(0, |(_, c)| c);
            if count > current {
                best = Some((borough, count));
            }
        }
        best.map(|(borough, _)| borough)
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

impl Dataset {
    /// Records for `year` whose race code equals `race` exactly.
    ///
    /// The comparison is case-sensitive. Order follows ingestion.
    pub fn population_stopped(&self, year: i32, race: &str) -> Vec<&Record> {
        self.records_for_year(year)
            .iter()
            .filter(|r| r.race() == race)
            .collect()
    }

    /// Percent of `year`'s stops that were frisked and that were arrested.
    pub fn frisked_vs_arrested(&self, year: i32) -> FriskArrestRates {
        let records = self.records_for_year(year);
        let frisked = records.iter().filter(|r| r.frisked()).count();
        let arrested = records.iter().filter(|r| r.arrested()).count();

        FriskArrestRates {
            frisked_percent: percentage(frisked, records.len()),
            arrested_percent: percentage(arrested, records.len()),
        }
    }

    /// Gender composition of Black and White stops in `year`.
    ///
    /// Race and gender codes match ignoring ASCII case. Records of other
    /// races are ignored; records of either race with a gender other than
    /// `F`/`M` still count towards that race's total.
    pub fn gender_bias(&self, year: i32) -> GenderBiasTable {
        let mut counts = GenderCounts::default();
        for record in self.records_for_year(year) {
            counts.add(record);
        }
        GenderBiasTable::from_counts(counts)
    }

    /// Change in the share of stops whose description contains
    /// `description`, from `year1` to `year2`, in percentage points.
    ///
    /// Callers are expected to pass the earlier year first; the arguments
    /// are not reordered, so swapping them flips the sign.
    pub fn crime_increase(&self, description: &str, year1: i32, year2: i32) -> f64 {
        self.description_share(year2, description) - self.description_share(year1, description)
    }

    /// Percent of `year`'s stops whose description contains `description`
    /// (case-sensitive substring match).
    pub fn description_share(&self, year: i32, description: &str) -> f64 {
        let records = self.records_for_year(year);
        let matching = records
            .iter()
            .filter(|r| r.description().contains(description))
            .count();
        percentage(matching, records.len())
    }

    /// Per-borough stop counts for `year`. Unrecognised locations are
    /// not counted.
    pub fn borough_counts(&self, year: i32) -> BoroughCounts {
        let mut counts = BoroughCounts::default();
        for borough in self.records_for_year(year).iter().filter_map(Record::borough) {
            *counts.slot_mut(borough) += 1;
        }
        counts
    }

    /// The borough with the most stops in `year`, or `None` when no record
    /// of that year names a tracked borough.
    pub fn most_common_borough(&self, year: i32) -> Option<Borough> {
        self.borough_counts(year).leader()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
