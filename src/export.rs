//! Writing the itinerary text export to disk

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::Result;
use crate::models::ItineraryResult;

/// Write the export into `directory`, creating it if needed
///
/// The file holds the raw itinerary text byte-for-byte. Returns the path written.
pub fn write_export(result: &ItineraryResult, directory: impl AsRef<Path>) -> Result<PathBuf> {
    let directory = directory.as_ref();
    fs::create_dir_all(directory)?;

    let path = directory.join(&result.export_filename);
    fs::write(&path, result.export_contents())?;

    info!(path = %path.display(), bytes = result.raw_text.len(), "Wrote itinerary export");
    Ok(path)
}
