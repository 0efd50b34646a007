//! # Rust Duration Parser
//!
//! Human-readable duration parsing and formatting, featuring:
//! - Free-form input ("1h", "30 mins", "1.5d", "1h 30min")
//! - Compact and long output, single unit or compound ("1d, 2h")
//! - Explicit policy for the ambiguous `m` (minutes or months)
//! - "Did you mean" suggestions for mistyped units (prefix trie + bounded
//!   edit distance, top-K via a max-heap)
//! - Locale-aware plural rules for long output
//!
//! ```no_run
//! use durparse::{DurationParser, FormatOptions, ParseOptions};
//!
//! let parser = DurationParser::new();
//! let ms = parser.parse("1.5d", &ParseOptions::default()).unwrap();
//! assert_eq!(parser.format(ms, &FormatOptions::long()).unwrap(), "2 days");
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod features;
pub mod utils;

pub use config::{AmbiguousUnitPolicy, FormatOptions, ParseOptions, ParserConfig, SuggestionConfig};
pub use errors::{DurationParseError, ErrorCode, FormatError};
pub use features::duration::{
    format_duration, DetailedParseResult, DurationInput, DurationParser, ParseResult,
};
pub use features::suggest::{EditDistance, MaxHeap, SuggestionEngine, Trie};
pub use features::units::{resolve_alias, supported_units, UnitTime};
