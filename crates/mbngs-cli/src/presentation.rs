//! Output helpers shared by the handlers.
//!
//! Results go to stdout as pretty JSON so they can be piped into other
//! tools; status messages go to stderr.

use std::io::Write;
use std::path::{Path, PathBuf};

use mbngs_ws::ImageSize;
use serde::Serialize;

use crate::error::CliError;

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write a body as-is followed by a newline.
pub fn write_text<W: Write>(out: &mut W, text: &str) -> Result<(), CliError> {
    writeln!(out, "{}", text.trim_end())?;
    Ok(())
}

/// Save downloaded bytes, creating parent directories as needed.
pub fn save_file(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

/// File name for an image when no output path was given:
/// `{mbid}-{cover}[-{size}].jpg`.
pub fn default_image_path(mbid: &str, cover: &str, size: ImageSize) -> PathBuf {
    let name = match size.suffix() {
        Some(suffix) => format!("{mbid}-{cover}-{suffix}.jpg"),
        None => format!("{mbid}-{cover}.jpg"),
    };
    PathBuf::from(name)
}
