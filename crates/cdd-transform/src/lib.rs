//! Table transformations between header normalization and output.
//!
//! # Overview
//!
//! - **Cleaning**: drop rows missing essential values, round numeric columns
//! - **Joining**: outer join with provenance, and a fail-closed variant that
//!   rejects right-side keys without a partner
//! - **Formatting**: select, rename, inject constants and reorder into the
//!   fixed upload layout
//!
//! Every stage takes a [`cdd_model::Table`] by value and returns a new one.

mod clean;
mod error;
mod format;
mod join;

pub use clean::{CleanRules, clean, round_value};
pub use error::{Result, TransformError};
pub use format::{OutputSpec, format_output};
pub use join::{JoinKey, JoinedTable, Provenance, derive_concat, fail_closed_join, outer_join};
