// Application-wide constants

/// Parser defaults
pub mod parse {
    pub const DEFAULT_MAX_LENGTH: usize = 100;
    pub const EXAMPLE_INPUTS: [&str; 3] = ["1h", "30 mins", "1.5d"];
}

/// Suggestion engine configuration
pub mod suggest {
    pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
    pub const CACHE_CAPACITY: u64 = 1_024;
    pub const DISTANCE_CACHE_CAPACITY: usize = 4_096;
    pub const THRESHOLD_DIVISOR: usize = 3;
}

/// Formatter defaults
pub mod format {
    pub const DEFAULT_SEPARATOR: &str = ", ";
    pub const DEFAULT_LOCALE: &str = "en";
}

/// Environment and config file lookup
pub mod env {
    pub const CONFIG_PATH_VAR: &str = "DURPARSE_CONFIG";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

/// Time conversion helpers
pub mod time {
    pub const MS_PER_SECOND: f64 = 1_000.0;
    pub const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
    pub const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
    pub const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
    pub const MS_PER_WEEK: f64 = 7.0 * MS_PER_DAY;
    pub const MS_PER_MONTH: f64 = 2_629_785_600.0; // ~30.44 days
    pub const MS_PER_YEAR: f64 = 31_557_600_000.0; // 365.25 days
}
