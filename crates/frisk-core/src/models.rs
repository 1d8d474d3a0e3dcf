use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stop-and-frisk incident read from one CSV line.
///
/// Fields are private and set once in [`Record::new`]; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    description: String,
    arrested: bool,
    frisked: bool,
    gender: String,
    race: String,
    location: String,
}

impl Record {
    pub fn new(
        description: impl Into<String>,
        arrested: bool,
        frisked: bool,
        gender: impl Into<String>,
        race: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            arrested,
            frisked,
            gender: gender.into(),
            race: race.into(),
            location: location.into(),
        }
    }

    /// Free-text offense / case description.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn arrested(&self) -> bool {
        self.arrested
    }

    pub fn frisked(&self) -> bool {
        self.frisked
    }

    /// Gender code exactly as it appeared in the source data.
    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Race code exactly as it appeared in the source data.
    pub fn race(&self) -> &str {
        &self.race
    }

    /// Borough name exactly as it appeared in the source data.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The tracked borough this record's location names, if any.
    pub fn borough(&self) -> Option<Borough> {
        Borough::from_location(&self.location)
    }
}

/// The five New York City boroughs tracked by location aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Borough {
    Brooklyn,
    Manhattan,
    Bronx,
    Queens,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl Borough {
    /// Canonical scan order. Ties resolve to the earliest entry.
    pub const ALL: [Borough; 5] = [
        Borough::Brooklyn,
        Borough::Manhattan,
        Borough::Bronx,
        Borough::Queens,
        Borough::StatenIsland,
    ];

    /// Display name of the borough.
    pub fn name(self) -> &'static str {
        match self {
            Borough::Brooklyn => "Brooklyn",
            Borough::Manhattan => "Manhattan",
            Borough::Bronx => "Bronx",
            Borough::Queens => "Queens",
            Borough::StatenIsland => "Staten Island",
        }
    }

    /// Match a raw location against the borough names, ignoring ASCII case.
    ///
    /// Only whole-name matches count; `"BROOKLYN NORTH"` is not Brooklyn.
    pub fn from_location(location: &str) -> Option<Borough> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(location))
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new("ROBBERY, 1ST DEGREE", true, false, "M", "B", "BROOKLYN")
    }

    #[test]
    fn test_record_accessors() {
        let r = sample();
        assert_eq!(r.description(), "ROBBERY, 1ST DEGREE");
        assert!(r.arrested());
        assert!(!r.frisked());
        assert_eq!(r.gender(), "M");
        assert_eq!(r.race(), "B");
        assert_eq!(r.location(), "BROOKLYN");
    }

    #[test]
    fn test_record_codes_preserved_verbatim() {
        let r = Record::new("x", false, false, "z", "q", "somewhere");
        assert_eq!(r.gender(), "z");
        assert_eq!(r.race(), "q");
        assert_eq!(r.borough(), None);
    }

    #[test]
    fn test_borough_from_location_ignores_case() {
        assert_eq!(Borough::from_location("BROOKLYN"), Some(Borough::Brooklyn));
        assert_eq!(Borough::from_location("manhattan"), Some(Borough::Manhattan));
        assert_eq!(Borough::from_location("BrOnX"), Some(Borough::Bronx));
        assert_eq!(Borough::from_location("Queens"), Some(Borough::Queens));
        assert_eq!(
            Borough::from_location("STATEN ISLAND"),
            Some(Borough::StatenIsland)
        );
    }

    #[test]
    fn test_borough_from_location_requires_whole_name() {
        assert_eq!(Borough::from_location("STATEN"), None);
        assert_eq!(Borough::from_location("BROOKLYN NORTH"), None);
        assert_eq!(Borough::from_location(""), None);
    }

    #[test]
    fn test_borough_display() {
        assert_eq!(Borough::StatenIsland.to_string(), "Staten Island");
        assert_eq!(sample().borough().map(|b| b.to_string()).as_deref(), Some("Brooklyn"));
    }

    #[test]
    fn test_borough_serializes_display_name() {
        let json = serde_json::to_string(&Borough::StatenIsland).unwrap();
        assert_eq!(json, "\"Staten Island\"");
    }
}
