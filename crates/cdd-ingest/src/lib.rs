//! Instrument file ingestion.
//!
//! This crate turns a `.csv` or `.xlsx` instrument export into a flat
//! [`cdd_model::Table`]:
//!
//! - **Loading**: [`load_grid`] reads the raw cell grid; a missing file yields
//!   `None` so callers can skip gracefully
//! - **Header normalization**: [`normalize`] flattens one- or two-row headers,
//!   forward-fills grouped columns and injects layout-specific metadata cells
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cdd_ingest::{HeaderLayout, load_normalized};
//!
//! let layout = HeaderLayout::double(" ").starting_at(1);
//! if let Some(normalized) = load_normalized(Path::new("mdck.xlsx"), &layout)? {
//!     println!("{:?}", normalized.columns);
//! }
//! ```

#![deny(unsafe_code)]

mod error;
mod grid;
mod header;
mod loader;

use std::path::Path;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use grid::{RawGrid, cell_reference};
pub use loader::{SourceFormat, load_grid, load_grid_as};

// === Header Normalization ===
pub use header::{
    HeaderLayout, HeaderShape, MetadataCell, NormalizedTable, flatten_header, normalize,
};

/// Loads `path` and normalizes it with `layout`; `None` when the file is missing.
pub fn load_normalized(path: &Path, layout: &HeaderLayout) -> Result<Option<NormalizedTable>> {
    match load_grid(path)? {
        Some(grid) => normalize(&grid, layout).map(Some),
        None => Ok(None),
    }
}
