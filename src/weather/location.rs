//! The fixed set of forecast locations.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// A forecast location: coordinates plus the IANA timezone the API should
/// report local times in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: &'static str,
}

pub const LOCATIONS: [Location; 4] = [
    Location {
        name: "Dhaka",
        latitude: 23.8103,
        longitude: 90.4125,
        timezone: "Asia/Dhaka",
    },
    Location {
        name: "London",
        latitude: 51.5074,
        longitude: -0.1278,
        timezone: "Europe/London",
    },
    Location {
        name: "New York",
        latitude: 40.7128,
        longitude: -74.0060,
        timezone: "America/New_York",
    },
    Location {
        name: "Tokyo",
        latitude: 35.6762,
        longitude: 139.6503,
        timezone: "Asia/Tokyo",
    },
];

pub const DEFAULT_LOCATION: Location = LOCATIONS[0];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown location: {0}. Expected one of: {names}", names = location_names().join(", "))]
pub struct UnknownLocation(pub String);

/// Names of all known locations, in selector order.
pub fn location_names() -> Vec<&'static str> {
    LOCATIONS.iter().map(|loc| loc.name).collect()
}

impl Location {
    /// Position of this location in the selector.
    pub fn index(&self) -> usize {
        LOCATIONS
            .iter()
            .position(|loc| loc.name == self.name)
            .unwrap_or(0)
    }

    /// The next location in selector order, wrapping around.
    pub fn next(&self) -> Location {
        LOCATIONS[(self.index() + 1) % LOCATIONS.len()]
    }

    /// The previous location in selector order, wrapping around.
    pub fn previous(&self) -> Location {
        LOCATIONS[(self.index() + LOCATIONS.len() - 1) % LOCATIONS.len()]
    }
}

impl FromStr for Location {
    type Err = UnknownLocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LOCATIONS
            .iter()
            .find(|loc| loc.name.eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| UnknownLocation(wanted.to_string()))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        let loc: Location = "new york".parse().unwrap();
        assert_eq!(loc.timezone, "America/New_York");
        assert_eq!(" TOKYO ".parse::<Location>().unwrap().name, "Tokyo");
    }

    #[test]
    fn test_unknown_location_lists_choices() {
        let err = "Atlantis".parse::<Location>().unwrap_err();
        assert_eq!(err, UnknownLocation("Atlantis".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown location: Atlantis. Expected one of: Dhaka, London, New York, Tokyo"
        );
    }

    #[test]
    fn test_selector_wraps() {
        assert_eq!(LOCATIONS[3].next(), LOCATIONS[0]);
        assert_eq!(LOCATIONS[0].previous(), LOCATIONS[3]);
        assert_eq!(LOCATIONS[1].next().name, "New York");
    }
}
