//! Core conversion pipeline: Gregorian date → Bikram Sambat date → derived columns

pub mod converter;
pub mod fiscal;

pub use converter::{parse_gregorian, to_bikram_sambat};
pub use fiscal::{fiscal_quarter, month_label};
