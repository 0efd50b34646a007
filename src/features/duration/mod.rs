pub mod format;
pub mod input;
pub mod parser;
pub mod plural;

pub use format::format_duration;
pub use input::DurationInput;
pub use parser::{DetailedParseResult, DurationParser, ParseResult};
pub use plural::{PluralCategory, PluralRules};
