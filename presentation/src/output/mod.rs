//! Output formatting for validation results and rosters

pub mod console;
pub mod formatter;
