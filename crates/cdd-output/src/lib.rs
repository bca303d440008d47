//! Output emission for reformatted tables.
//!
//! Tables are converted to polars `DataFrame`s of string columns, so numbers
//! print exactly as the numeric formatter renders them and `Absent` cells
//! become empty fields.

mod error;
mod frame;
mod writer;

pub use error::{OutputError, Result};
pub use frame::{preview, to_dataframe};
pub use writer::{output_file_name, output_path, write_output};
