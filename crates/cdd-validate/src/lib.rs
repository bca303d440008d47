//! Schema validation for normalized tables.
//!
//! Checks that the columns a flow depends on are present and lets the caller
//! decide, through a [`ValidationPolicy`], whether a gap aborts the run or
//! only skips it.

#![deny(unsafe_code)]

mod error;
mod policy;
mod schema;

pub use error::{Result, ValidationError};
pub use policy::{Gate, ValidationPolicy};
pub use schema::{SchemaReport, check_required, missing_columns};
