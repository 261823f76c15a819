use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Relative lookback period used to window a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// The trailing N calendar days.
    Days(u32),
    /// Since January 1 of the current year.
    YearToDate,
    /// No filtering.
    All,
}

impl Default for Period {
    fn default() -> Self {
        Period::Days(365)
    }
}

impl Period {
    pub const ONE_WEEK: Period = Period::Days(7);
    pub const ONE_MONTH: Period = Period::Days(30);
    pub const THREE_MONTHS: Period = Period::Days(90);
    pub const SIX_MONTHS: Period = Period::Days(180);
    pub const ONE_YEAR: Period = Period::Days(365);
    pub const THREE_YEARS: Period = Period::Days(1095);
    pub const FIVE_YEARS: Period = Period::Days(1825);

    /// Earliest date included in the window, or `None` when nothing is
    /// filtered out ([`Period::All`], or a lookback reaching past the
    /// earliest representable date).
    ///
    /// Calendar arithmetic: weekends and holidays count as days.
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::Days(days) => today.checked_sub_days(Days::new(u64::from(*days))),
            Period::YearToDate => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            Period::All => None,
        }
    }

    /// Preset periods offered by the dashboard's period selector.
    pub fn presets() -> [Period; 9] {
        [
            Period::ONE_WEEK,
            Period::ONE_MONTH,
            Period::THREE_MONTHS,
            Period::SIX_MONTHS,
            Period::YearToDate,
            Period::ONE_YEAR,
            Period::THREE_YEARS,
            Period::FIVE_YEARS,
            Period::All,
        ]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Days(7) => write!(f, "1W"),
            Period::Days(30) => write!(f, "1M"),
            Period::Days(90) => write!(f, "3M"),
            Period::Days(180) => write!(f, "6M"),
            Period::Days(365) => write!(f, "1Y"),
            Period::Days(1095) => write!(f, "3Y"),
            Period::Days(1825) => write!(f, "5Y"),
            Period::Days(days) => write!(f, "{}D", days),
            Period::YearToDate => write!(f, "YTD"),
            Period::All => write!(f, "ALL"),
        }
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "1W" => Ok(Period::ONE_WEEK),
            "1M" => Ok(Period::ONE_MONTH),
            "3M" => Ok(Period::THREE_MONTHS),
            "6M" => Ok(Period::SIX_MONTHS),
            "1Y" => Ok(Period::ONE_YEAR),
            "3Y" => Ok(Period::THREE_YEARS),
            "5Y" => Ok(Period::FIVE_YEARS),
            "YTD" => Ok(Period::YearToDate),
            "ALL" => Ok(Period::All),
            other => other
                .strip_suffix('D')
                .and_then(|days| days.parse::<u32>().ok())
                .map(Period::Days)
                .ok_or_else(|| ValidationError::InvalidPeriod(s.to_string())),
        }
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
