//! Archive entry-name listing.

use std::fs::File;
use std::path::Path;

use zip::result::ZipError;

use crate::InspectError;
use crate::Result;

/// Reads every entry name from a ZIP archive, in stored order.
///
/// The archive is opened read-only and the handle is released when
/// this function returns, on every exit path. Entry payloads are never
/// decompressed; only central-directory metadata is touched, so the
/// listing works regardless of the compression methods used inside the
/// archive.
///
/// # Errors
///
/// Returns [`InspectError::InvalidFormat`] if the file is not a
/// well-formed ZIP container, and [`InspectError::Io`] for any other
/// failure while opening or reading.
pub fn read_entry_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let mut archive = zip::ZipArchive::new(file).map_err(convert_zip_error)?;

    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        // by_index_raw skips decompressor setup, so unsupported
        // compression methods do not fail a pure listing.
        let entry = archive.by_index_raw(i).map_err(convert_zip_error)?;
        names.push(entry.name().to_string());
    }

    Ok(names)
}

/// Maps `zip` errors onto the inspection taxonomy: I/O failures stay
/// I/O failures, everything else means the container is malformed.
fn convert_zip_error(err: ZipError) -> InspectError {
    match err {
        ZipError::Io(io_err) => InspectError::Io(io_err),
        other => InspectError::InvalidFormat {
            reason: other.to_string(),
        },
    }
}
