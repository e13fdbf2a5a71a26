//! rastime: temporal and chunking metadata for geospatial raster time series
//!
//! A small helper library for raster time-series pipelines built on GDAL.
//! rastime reads the metadata a pipeline needs before touching pixel data:
//! acquisition dates recorded per file or per band, and the internal block
//! layout that determines a sensible chunk shape for array readers.
//!
//! ## Key Features
//!
//! - **Timestamp extraction**: read `RANGEBEGINNINGDATE` from a container's
//!   member files or from the bands of a single file
//! - **Chunk sizing**: band count plus internal block dimensions as a ready
//!   chunk tuple
//! - **Date parsing**: ISO, verbose ("January 1, 2001") and "present"
//!   layouts behind one function, with an injectable clock
//! - **Command execution**: run external tools (e.g. the GDAL CLI) with
//!   exit code and stderr in the failure signal
//! - **Output naming**: derive destination file names from the output
//!   directory convention
//!
//! ## Module Organization
//!
//! - [`metadata`]: GDAL-backed timestamp and chunk-size extraction
//! - [`dates`]: date-string parsing
//! - [`paths`]: output file name derivation
//! - [`command`]: external command execution
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use rastime::prelude::*;
//!
//! // Timestamps for every member of a VRT stack, in member order
//! let times = get_times("stack.vrt").unwrap();
//!
//! // Chunk shape for reading one of the members
//! let (bands, block_x, block_y) = get_chunk_size("ndvi_2020.tif").unwrap();
//!
//! // Destination for the smoothed product
//! let out = generate_output_fname(Path::new("/out/smoothed"), Path::new("ndvi_2020.tif"));
//! ```
//!
//! All functions are synchronous and stateless; each call opens, reads, and
//! releases its own GDAL handle.

pub mod command;
pub mod dates;
pub mod errors;
pub mod metadata;
pub mod paths;

/// Convenience re-exports of the public API
pub mod prelude {
    pub use crate::command::run_command;
    pub use crate::dates::{string_to_date, string_to_date_at};
    pub use crate::errors::{RastimeError, Result};
    pub use crate::metadata::{
        get_chunk_size, get_times, get_times_from_band_metadata, RANGE_BEGINNING_DATE,
    };
    pub use crate::paths::generate_output_fname;
}
