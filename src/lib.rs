//! Reconstruct connected polyline paths from UV sample dumps.
//!
//! Rows of `u`/`v` texture coordinates are filtered and mapped to device space
//! ([`prepare()`]), split into runs of nearby consecutive points ([`segment()`]), and written as
//! SVG polylines ([`PathDocument`]).
#![forbid(unsafe_code)]

mod foundation;

pub mod config;
pub mod pipeline;
pub mod prepare;
pub mod segment;
pub mod svg;
pub mod table;

pub use config::ConvertOpts;
pub use foundation::core::{Canvas, Point};
pub use foundation::error::{UvPathError, UvPathResult};
pub use pipeline::{
    Conversion, ConvertSummary, ConvertWarning, EmptyPolicy, convert, convert_file,
    default_output_path,
};
pub use prepare::{DropReport, PrepareOpts, Prepared, prepare};
pub use segment::{Segment, segment};
pub use svg::{PathDocument, serialize, write_document};
pub use table::Table;
