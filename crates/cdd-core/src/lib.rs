//! Reformat flows for CDD uploads.
//!
//! - [`reformat_assay`]: one instrument export → one dated upload CSV, for
//!   each [`AssayKind`]
//! - [`reformat_molecules`]: plate map + compound list joined on the vial
//!   barcode → molecule upload CSV
//!
//! Both flows take a [`cdd_model::RunContext`] carrying the run date, output
//! directory and the values injected into the output.

#![deny(unsafe_code)]

pub mod assays;
mod error;
mod flow;
mod molecules;
mod render;

pub use assays::{AssayConfig, AssayKind, UnknownAssay};
pub use error::{CoreError, Result};
pub use flow::{AssayOutcome, PREVIEW_ROWS, SkipReason, reformat_assay};
pub use molecules::{
    COMPOUND_COLUMNS, MOLECULE_OUTPUT_PREFIX, MoleculeOutcome, PLATE_MAP_COLUMNS, UPLOAD_COLUMNS,
    reformat_molecules,
};
pub use render::{NoopRenderer, StructureImage, StructurePreview, StructureRenderer};
