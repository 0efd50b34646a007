pub mod duration;
pub mod logging;

pub use duration::parse_duration;
