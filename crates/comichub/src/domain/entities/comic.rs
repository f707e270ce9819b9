use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;

/// Publication status of a comic series.
///
/// Stored as `"ONGOING"` / `"COMPLETED"` text, both in the database and on
/// the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComicStatus {
    #[default]
    Ongoing,
    Completed,
}

impl fmt::Display for ComicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ONGOING"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}

impl FromStr for ComicStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ONGOING" => Ok(Self::Ongoing),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(anyhow::anyhow!("unknown comic status: {s}")),
        }
    }
}

/// A comic series as stored in the catalog.
///
/// Snapshots handed to the listing pipeline are never mutated, only
/// selected, ordered and sliced.
#[derive(Debug, Clone, Default)]
pub struct Comic {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub synopsis: String,
    pub status: ComicStatus,
    pub cover_url: String,
    pub genres: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [ComicStatus::Ongoing, ComicStatus::Completed] {
            assert_eq!(status, status.to_string().parse().unwrap());
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("HIATUS".parse::<ComicStatus>().is_err());
        assert!("ongoing".parse::<ComicStatus>().is_err());
    }
}
