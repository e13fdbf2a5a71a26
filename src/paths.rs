//! Output path derivation
//!
//! Processed rasters land next to each other in per-product output
//! directories; the directory name doubles as a postfix in the file name so
//! a file remains identifiable when moved out of its directory.

use std::path::{Path, PathBuf};

/// Generates an output file name from an output directory and a source file.
///
/// The postfix is the output directory's final component; the source file
/// loses its directory and extension. The result is
/// `<output_dir>/<basename>.<postfix>.tif`:
///
/// ```
/// use std::path::Path;
/// use rastime::paths::generate_output_fname;
///
/// let out = generate_output_fname(Path::new("/out/monthly"), Path::new("/data/ndvi_2020.tif"));
/// assert_eq!(out, Path::new("/out/monthly/ndvi_2020.monthly.tif"));
/// ```
pub fn generate_output_fname(output_dir: &Path, fname: &Path) -> PathBuf {
    let postfix = output_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let basename = fname
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    output_dir.join(format!("{}.{}.tif", basename, postfix))
}
