//! Canonical units and the alias vocabulary that resolves to them.

use std::{collections::HashMap, fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::time;

/// One of the eight canonical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitTime {
    #[serde(rename = "ms")]
    Millisecond,
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "m")]
    Minute,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "w")]
    Week,
    #[serde(rename = "mo")]
    Month,
    #[serde(rename = "y")]
    Year,
}

impl UnitTime {
    /// Every unit, largest first.
    pub const ALL: [UnitTime; 8] = [
        UnitTime::Year,
        UnitTime::Month,
        UnitTime::Week,
        UnitTime::Day,
        UnitTime::Hour,
        UnitTime::Minute,
        UnitTime::Second,
        UnitTime::Millisecond,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            UnitTime::Millisecond => 1.0,
            UnitTime::Second => time::MS_PER_SECOND,
            UnitTime::Minute => time::MS_PER_MINUTE,
            UnitTime::Hour => time::MS_PER_HOUR,
            UnitTime::Day => time::MS_PER_DAY,
            UnitTime::Week => time::MS_PER_WEEK,
            UnitTime::Month => time::MS_PER_MONTH,
            UnitTime::Year => time::MS_PER_YEAR,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitTime::Millisecond => "ms",
            UnitTime::Second => "s",
            UnitTime::Minute => "m",
            UnitTime::Hour => "h",
            UnitTime::Day => "d",
            UnitTime::Week => "w",
            UnitTime::Month => "mo",
            UnitTime::Year => "y",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            UnitTime::Millisecond => "millisecond",
            UnitTime::Second => "second",
            UnitTime::Minute => "minute",
            UnitTime::Hour => "hour",
            UnitTime::Day => "day",
            UnitTime::Week => "week",
            UnitTime::Month => "month",
            UnitTime::Year => "year",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            UnitTime::Millisecond => "milliseconds",
            UnitTime::Second => "seconds",
            UnitTime::Minute => "minutes",
            UnitTime::Hour => "hours",
            UnitTime::Day => "days",
            UnitTime::Week => "weeks",
            UnitTime::Month => "months",
            UnitTime::Year => "years",
        }
    }

    /// Looks up a canonical symbol (`"mo"`, `"h"`, ...). Aliases are not accepted here.
    pub fn from_symbol(symbol: &str) -> Option<UnitTime> {
        UnitTime::ALL.into_iter().find(|u| u.symbol() == symbol)
    }
}

impl fmt::Display for UnitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitTime::from_symbol(&s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown unit symbol '{s}', expected one of ms/s/m/h/d/w/mo/y"))
    }
}

// The bare "m" is deliberately absent: it could mean minutes or months.
const ALIASES: &[(&str, UnitTime)] = &[
    ("ms", UnitTime::Millisecond),
    ("msec", UnitTime::Millisecond),
    ("msecs", UnitTime::Millisecond),
    ("milli", UnitTime::Millisecond),
    ("millis", UnitTime::Millisecond),
    ("millisecond", UnitTime::Millisecond),
    ("milliseconds", UnitTime::Millisecond),
    ("s", UnitTime::Second),
    ("sec", UnitTime::Second),
    ("secs", UnitTime::Second),
    ("second", UnitTime::Second),
    ("seconds", UnitTime::Second),
    ("min", UnitTime::Minute),
    ("mins", UnitTime::Minute),
    ("minute", UnitTime::Minute),
    ("minutes", UnitTime::Minute),
    ("h", UnitTime::Hour),
    ("hr", UnitTime::Hour),
    ("hrs", UnitTime::Hour),
    ("hour", UnitTime::Hour),
    ("hours", UnitTime::Hour),
    ("d", UnitTime::Day),
    ("day", UnitTime::Day),
    ("days", UnitTime::Day),
    ("w", UnitTime::Week),
    ("wk", UnitTime::Week),
    ("wks", UnitTime::Week),
    ("week", UnitTime::Week),
    ("weeks", UnitTime::Week),
    ("mo", UnitTime::Month),
    ("mos", UnitTime::Month),
    ("mon", UnitTime::Month),
    ("mons", UnitTime::Month),
    ("month", UnitTime::Month),
    ("months", UnitTime::Month),
    ("y", UnitTime::Year),
    ("yr", UnitTime::Year),
    ("yrs", UnitTime::Year),
    ("year", UnitTime::Year),
    ("years", UnitTime::Year),
];

static ALIAS_TABLE: Lazy<HashMap<&'static str, UnitTime>> =
    Lazy::new(|| ALIASES.iter().copied().collect());

/// Resolves any recognized spelling to its canonical unit, ignoring case.
pub fn resolve_alias(alias: &str) -> Option<UnitTime> {
    ALIAS_TABLE.get(alias.to_lowercase().as_str()).copied()
}

/// Every recognized alias, sorted ascending.
pub fn supported_units() -> Vec<String> {
    let mut aliases: Vec<String> = ALIASES.iter().map(|(alias, _)| alias.to_string()).collect();
    aliases.sort();
    aliases
}
