//! Market sectors used as the lead-generation grouping key.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Categorical market segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Sector {
    Domestic,
    Commercial,
    Agri,
}

impl Sector {
    /// All sectors in the order the input forms offer them.
    pub const ALL: [Sector; 3] = [Sector::Domestic, Sector::Commercial, Sector::Agri];

    pub fn as_str(self) -> &'static str {
        match self {
            Sector::Domestic => "Domestic",
            Sector::Commercial => "Commercial",
            Sector::Agri => "Agri",
        }
    }
}

// Grouped outputs iterate alphabetically by label.
impl Ord for Sector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Sector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Sector::ALL
            .into_iter()
            .find(|sector| sector.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownSector(trimmed.to_string()))
    }
}

impl TryFrom<String> for Sector {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("domestic".parse::<Sector>().unwrap(), Sector::Domestic);
        assert_eq!(" AGRI ".parse::<Sector>().unwrap(), Sector::Agri);
        assert!(matches!(
            "Industrial".parse::<Sector>(),
            Err(Error::UnknownSector(s)) if s == "Industrial"
        ));
    }

    #[test]
    fn orders_alphabetically() {
        let mut sectors = Sector::ALL.to_vec();
        sectors.sort();
        assert_eq!(sectors, vec![Sector::Agri, Sector::Commercial, Sector::Domestic]);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Sector::Commercial).unwrap();
        assert_eq!(json, "\"Commercial\"");
    }

    #[test]
    fn deserialize_matches_from_str() {
        let sector: Sector = serde_json::from_str("\"commercial\"").unwrap();
        assert_eq!(sector, Sector::Commercial);
        let sector: Sector = serde_json::from_str("\" AGRI \"").unwrap();
        assert_eq!(sector, Sector::Agri);
        assert!(serde_json::from_str::<Sector>("\"Retail\"").is_err());
    }
}
