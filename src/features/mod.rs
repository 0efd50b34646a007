pub mod duration;
pub mod suggest;
pub mod units;
