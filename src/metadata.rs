//! GDAL metadata inspection for raster time series
//!
//! This module provides functions for extracting the temporal and chunking
//! information a time-series pipeline needs before reading any pixel data:
//! per-file and per-band acquisition dates, and the natural block granularity
//! for chunked reads.

use std::ffi::CStr;
use std::path::Path;

use chrono::NaiveDateTime;
use gdal::{Dataset, Metadata};

use crate::dates::string_to_date;
use crate::errors::{RastimeError, Result};

/// Metadata key carrying the nominal start date of the data.
///
/// This is the only key the extractors read.
pub const RANGE_BEGINNING_DATE: &str = "RANGEBEGINNINGDATE";

/// Extracts time info from the file-level metadata of a container's members.
///
/// Opens a virtual/composite raster (e.g. a VRT), walks its constituent file
/// list, and reads [`RANGE_BEGINNING_DATE`] from each member's own metadata.
/// Timestamps are returned in member order, neither sorted nor deduplicated.
///
/// GDAL conventionally reports the container's own path as the first list
/// entry; entries matching the container are dropped rather than trusting
/// the position blindly. A member that cannot be opened or lacks the date
/// key aborts the whole extraction.
pub fn get_times<P: AsRef<Path>>(vrt_fname: P) -> Result<Vec<NaiveDateTime>> {
    let vrt_fname = vrt_fname.as_ref();
    let dataset = Dataset::open(vrt_fname)?;
    let fnames = member_files(&dataset, vrt_fname);

    let mut times = Vec::with_capacity(fnames.len());
    for fname in fnames {
        let member = Dataset::open(&fname)?;
        let start_date = member
            .metadata_item(RANGE_BEGINNING_DATE, "")
            .ok_or_else(|| RastimeError::MetadataKeyNotFound {
                key: RANGE_BEGINNING_DATE.to_string(),
                context: format!("file '{}'", fname),
            })?;
        times.push(string_to_date(&start_date)?);
    }

    Ok(times)
}

/// Extracts time info from per-band metadata of a single multi-band file.
///
/// Bands are visited in index order (band 1 first), and the returned
/// timestamps align with that order. A band missing the date key aborts the
/// extraction.
pub fn get_times_from_band_metadata<P: AsRef<Path>>(fname: P) -> Result<Vec<NaiveDateTime>> {
    let fname = fname.as_ref();
    let dataset = Dataset::open(fname)?;
    let bands = dataset.raster_count();

    let mut times = Vec::with_capacity(bands);
    for band_index in 1..=bands {
        let band = dataset.rasterband(band_index)?;
        let start_date = band
            .metadata_item(RANGE_BEGINNING_DATE, "")
            .ok_or_else(|| RastimeError::MetadataKeyNotFound {
                key: RANGE_BEGINNING_DATE.to_string(),
                context: format!("band {} of '{}'", band_index, fname.display()),
            })?;
        times.push(string_to_date(&start_date)?);
    }

    Ok(times)
}

/// Extracts the band count and internal block size of a raster file.
///
/// Returns `(band_count, block_x, block_y)`, the natural chunk shape for a
/// downstream array layer to read the file with. The block size is taken
/// from band 1 and assumed representative of all bands.
pub fn get_chunk_size<P: AsRef<Path>>(filename: P) -> Result<(usize, usize, usize)> {
    let dataset = Dataset::open(filename.as_ref())?;
    let raster_count = dataset.raster_count();

    // Internal block size from the first band
    let band = dataset.rasterband(1)?;
    let (block_x, block_y) = band.block_size();

    Ok((raster_count, block_x, block_y))
}

/// Returns the container's member file list with the container itself
/// removed.
///
/// GDAL puts the container's own path first, but that is a convention of the
/// format driver, not a guarantee, so the leading entry is dropped only when
/// it matches the container (by full path, or by file name alone since GDAL
/// may absolutize the entry). Later entries are members unless they equal
/// the container path exactly; a member that merely shares the container's
/// file name from another directory is kept.
fn member_files(dataset: &Dataset, container: &Path) -> Vec<String> {
    let mut files = file_list(dataset);

    let leading_is_container = files.first().is_some_and(|first| {
        let first = Path::new(first);
        first == container
            || (container.file_name().is_some() && first.file_name() == container.file_name())
    });
    if leading_is_container {
        files.remove(0);
    }

    files.retain(|entry| Path::new(entry) != container);
    files
}

/// File list of an open dataset, via `GDALGetFileList`.
///
/// The high-level crate does not wrap this call, so it goes through the C
/// API. An empty list maps to an empty vector.
fn file_list(dataset: &Dataset) -> Vec<String> {
    let mut files = Vec::new();
    unsafe {
        let list = gdal_sys::GDALGetFileList(dataset.c_dataset());
        if !list.is_null() {
            let mut entry = list;
            while !(*entry).is_null() {
                files.push(CStr::from_ptr(*entry).to_string_lossy().into_owned());
                entry = entry.add(1);
            }
            gdal_sys::CSLDestroy(list);
        }
    }
    files
}
