//! Image-set persistence and ZIP packaging.
//!
//! DESIGN
//! ======
//! A generated set of surfaces is stored as one directory per agency ID
//! under the uploads root, one PNG per surface. Download packaging zips
//! that directory flat, in deterministic (sorted) file order, entirely in
//! memory — four PNGs fit comfortably.
//!
//! ERROR HANDLING
//! ==============
//! All fallible paths surface as [`PackageError`]; routes map variants to
//! HTTP statuses. The agency ID doubles as a directory name, so it is
//! validated against path traversal before any filesystem access.

#[cfg(test)]
#[path = "package_test.rs"]
mod package_test;

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use composer::net::SaveImagesRequest;

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("No agency ID provided")]
    EmptyAgencyId,
    #[error("invalid agency ID: {0}")]
    InvalidAgencyId(String),
    #[error("malformed data URL for {0}")]
    MalformedDataUrl(&'static str),
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("no generated images for agency ID: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Validate and normalize an agency ID for use as a directory name.
///
/// # Errors
///
/// Rejects blank IDs and IDs that could escape the uploads root.
pub fn validate_agency_id(raw: &str) -> Result<&str, PackageError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(PackageError::EmptyAgencyId);
    }
    if id.contains('/') || id.contains('\\') || id.contains("..") {
        return Err(PackageError::InvalidAgencyId(id.to_owned()));
    }
    Ok(id)
}

/// Extract and decode the base64 payload of a `data:image/...;base64,` URL.
fn decode_data_url(data_url: &str, key: &'static str) -> Result<Vec<u8>, PackageError> {
    let Some((_, payload)) = data_url.split_once(',') else {
        return Err(PackageError::MalformedDataUrl(key));
    };
    Ok(STANDARD.decode(payload)?)
}

/// Persist all four exported surfaces as PNGs under `uploads_dir/<agency_id>/`.
///
/// Returns the directory the images were written to. Re-exporting for the
/// same agency ID overwrites the previous set in place.
///
/// # Errors
///
/// Fails on invalid agency IDs, undecodable payloads, or filesystem errors.
pub fn save_images(uploads_dir: &Path, request: &SaveImagesRequest) -> Result<PathBuf, PackageError> {
    let agency_id = validate_agency_id(&request.agency_id)?;
    let dir = uploads_dir.join(agency_id);
    fs::create_dir_all(&dir)?;

    for (key, data_url) in request.images.entries() {
        let bytes = decode_data_url(data_url, key)?;
        // Decode fully before writing; garbage payloads fail the request.
        let decoded = image::load_from_memory(&bytes)?;
        decoded.save_with_format(dir.join(format!("{key}.png")), ImageFormat::Png)?;
    }

    Ok(dir)
}

/// Build an in-memory ZIP of every file in the agency's upload directory.
///
/// # Errors
///
/// Returns [`PackageError::NotFound`] when nothing has been generated for
/// the ID yet; otherwise filesystem or zip errors.
pub fn build_package(uploads_dir: &Path, agency_id: &str) -> Result<Vec<u8>, PackageError> {
    let agency_id = validate_agency_id(agency_id)?;
    let dir = uploads_dir.join(agency_id);
    if !dir.is_dir() {
        return Err(PackageError::NotFound(agency_id.to_owned()));
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    entries.sort();

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for path in entries {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        writer.start_file(name, options)?;
        writer.write_all(&fs::read(&path)?)?;
    }

    Ok(writer.finish()?.into_inner())
}
