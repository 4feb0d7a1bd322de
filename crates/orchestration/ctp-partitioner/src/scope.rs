//! Which years and months a run covers.
//!
//! Account and region levels are always enumerated. Year and month can each
//! be pinned to a single value, which skips the listing call for that level.

use chrono::NaiveDate;
use ctp_error::{CtpError, Result};
use serde::{Deserialize, Serialize};

/// How a level of the hierarchy is traversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelSelection {
    /// List the level and visit every child.
    Enumerate,

    /// Visit exactly this value without listing.
    Fixed(String),
}

impl LevelSelection {
    fn from_option(value: Option<&str>) -> Self {
        match value {
            Some(value) => Self::Fixed(value.to_string()),
            None => Self::Enumerate,
        }
    }

    /// Returns the pinned value, if any.
    pub fn fixed(&self) -> Option<&str> {
        match self {
            Self::Fixed(value) => Some(value),
            Self::Enumerate => None,
        }
    }
}

/// Year and month selection for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionScope {
    pub year: LevelSelection,
    pub month: LevelSelection,
}

impl Default for PartitionScope {
    fn default() -> Self {
        Self::all()
    }
}

impl PartitionScope {
    /// Every year and month found in the bucket.
    pub fn all() -> Self {
        Self {
            year: LevelSelection::Enumerate,
            month: LevelSelection::Enumerate,
        }
    }

    /// Only the month containing `today`.
    pub fn current_month(today: NaiveDate) -> Self {
        Self {
            year: LevelSelection::Fixed(today.format("%Y").to_string()),
            month: LevelSelection::Fixed(today.format("%m").to_string()),
        }
    }

    /// Build the scope from command line flags.
    ///
    /// `current_month` cannot be combined with an explicit year or month.
    /// Explicit values must match the CloudTrail folder format: a four digit
    /// year and a two digit month.
    pub fn from_flags(
        year: Option<&str>,
        month: Option<&str>,
        current_month: bool,
        today: NaiveDate,
    ) -> Result<Self> {
        if current_month {
            if year.is_some() || month.is_some() {
                return Err(CtpError::Config(
                    "current-month cannot be true when passing year or month".to_string(),
                ));
            }
            return Ok(Self::current_month(today));
        }

        if let Some(year) = year {
            validate_year(year)?;
        }
        if let Some(month) = month {
            validate_month(month)?;
        }

        Ok(Self {
            year: LevelSelection::from_option(year),
            month: LevelSelection::from_option(month),
        })
    }
}

fn validate_year(year: &str) -> Result<()> {
    if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CtpError::Config(format!(
            "year must be four digits (e.g. 2024), got '{year}'"
        )))
    }
}

fn validate_month(month: &str) -> Result<()> {
    let valid = month.len() == 2
        && month.bytes().all(|b| b.is_ascii_digit())
        && matches!(month.parse::<u8>(), Ok(1..=12));
    if valid {
        Ok(())
    } else {
        Err(CtpError::Config(format!(
            "month must be two digits between 01 and 12, got '{month}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_no_flags_enumerates_everything() {
        let scope = PartitionScope::from_flags(None, None, false, today()).unwrap();
        assert_eq!(scope, PartitionScope::all());
    }

    #[test]
    fn test_current_month_pins_both_levels() {
        let scope = PartitionScope::from_flags(None, None, true, today()).unwrap();
        assert_eq!(scope.year.fixed(), Some("2024"));
        assert_eq!(scope.month.fixed(), Some("03"));
    }

    #[test]
    fn test_current_month_with_year_is_rejected() {
        let err = PartitionScope::from_flags(Some("2023"), None, true, today()).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("current-month"));
    }

    #[test]
    fn test_current_month_with_month_is_rejected() {
        let err = PartitionScope::from_flags(None, Some("01"), true, today()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_month_pinned_independently() {
        let scope = PartitionScope::from_flags(None, Some("07"), false, today()).unwrap();
        assert_eq!(scope.year, LevelSelection::Enumerate);
        assert_eq!(scope.month, LevelSelection::Fixed("07".to_string()));
    }

    #[test]
    fn test_year_pinned_independently() {
        let scope = PartitionScope::from_flags(Some("2022"), None, false, today()).unwrap();
        assert_eq!(scope.year, LevelSelection::Fixed("2022".to_string()));
        assert_eq!(scope.month, LevelSelection::Enumerate);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        assert!(PartitionScope::from_flags(Some("24"), None, false, today()).is_err());
        assert!(PartitionScope::from_flags(Some("20x4"), None, false, today()).is_err());
        assert!(PartitionScope::from_flags(None, Some("1"), false, today()).is_err());
        assert!(PartitionScope::from_flags(None, Some("13"), false, today()).is_err());
        assert!(PartitionScope::from_flags(None, Some("00"), false, today()).is_err());
        assert!(PartitionScope::from_flags(None, Some("12"), false, today()).is_ok());
    }
}
