pub mod table;

pub use table::{resolve_alias, supported_units, UnitTime};
