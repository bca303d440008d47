//! Core data types for the CDD reformatting toolkit.
//!
//! - [`CellValue`]: tagged spreadsheet cell (`Number`, `Text`, `Absent`)
//! - [`Table`]: ordered, equally long named columns
//! - [`RunContext`]: per-run metadata (project, chemist, batch, date, output dir)

#![deny(unsafe_code)]

mod cell;
mod context;
mod error;
mod fill;
mod numeric;
mod table;

pub use cell::CellValue;
pub use context::RunContext;
pub use error::{ModelError, Result};
pub use fill::forward_fill;
pub use numeric::{format_numeric, parse_number};
pub use table::{Column, Table};
