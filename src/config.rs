use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

use crate::constants::{env, format as format_constants, parse as parse_constants, suggest};
use crate::features::units::UnitTime;

/// How a bare `m` unit is resolved.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguousUnitPolicy {
    /// Reject with `AMBIGUOUS_UNIT`.
    #[default]
    Strict,
    Minutes,
    Months,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ParseOptions {
    pub ambiguous_unit: AmbiguousUnitPolicy,
    /// Inputs longer than this many characters are rejected before parsing.
    pub max_length: usize,
    pub allow_negative: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ambiguous_unit: AmbiguousUnitPolicy::Strict,
            max_length: parse_constants::DEFAULT_MAX_LENGTH,
            allow_negative: false,
        }
    }
}

impl ParseOptions {
    pub fn with_ambiguous_unit(mut self, policy: AmbiguousUnitPolicy) -> Self {
        self.ambiguous_unit = policy;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormatOptions {
    /// `"1 hour"` instead of `"1h"`.
    pub long: bool,
    /// Decimal places kept after rounding.
    pub precision: u32,
    pub compound: bool,
    /// Restricts output to these units. `None` allows all eight.
    pub preferred_units: Option<Vec<UnitTime>>,
    pub locale: String,
    /// Pick plural forms with the locale's rules instead of the English default.
    pub use_intl: bool,
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            long: false,
            precision: 0,
            compound: false,
            preferred_units: None,
            locale: format_constants::DEFAULT_LOCALE.to_string(),
            use_intl: false,
            separator: format_constants::DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl FormatOptions {
    pub fn long() -> Self {
        Self {
            long: true,
            ..Self::default()
        }
    }

    pub fn compound() -> Self {
        Self {
            compound: true,
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_preferred_units(mut self, units: Vec<UnitTime>) -> Self {
        self.preferred_units = Some(units);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self.use_intl = true;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SuggestionConfig {
    pub max_suggestions: usize,
    pub cache_capacity: u64,
    pub distance_cache_capacity: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: suggest::DEFAULT_MAX_SUGGESTIONS,
            cache_capacity: suggest::CACHE_CAPACITY,
            distance_cache_capacity: suggest::DISTANCE_CACHE_CAPACITY,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ParserConfig {
    pub parse: ParseOptions,
    pub format: FormatOptions,
    pub suggestions: SuggestionConfig,
}

impl ParserConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: ParserConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Loads the file named by `DURPARSE_CONFIG`, or defaults when it is unset.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        match std::env::var(env::CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim()),
            _ => Ok(Self::default()),
        }
    }
}
