//! File helpers for rewrapping documents in place.

use std::{fs, path::Path};

use crate::wrap;

/// Rewrite a file in place with its contents wrapped.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, indent: &str, width: usize) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    let wrapped = wrap(&text, indent, width);
    fs::write(path, wrapped + "\n")
}
