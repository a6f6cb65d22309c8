use crate::shared::error::CritError;
use crate::shared::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Maximum on-disk or on-wire size of an index (100 MB)
pub const MAX_INDEX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum size of an index after decompression (512 MB)
///
/// A full Debian main `Packages` file is roughly 60 MB uncompressed.
pub const MAX_DECOMPRESSED_SIZE: u64 = 512 * 1024 * 1024;

fn violation(path: &Path, reason: String, hint: &str) -> anyhow::Error {
    CritError::SecurityError {
        path: path.to_path_buf(),
        reason,
        hint: hint.to_string(),
    }
    .into()
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        return Err(violation(
            path,
            format!("{} is a symbolic link", file_description),
            "Pass the path of the file the link points to; symbolic links are not followed.",
        ));
    }

    if !metadata.is_file() {
        return Err(violation(
            path,
            format!("{} is not a regular file", file_description),
            "Pass a Packages or Packages.gz file, not a directory or device.",
        ));
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(violation(
            path,
            format!(
                "file is too large ({} bytes, maximum allowed size is {} bytes)",
                file_size, max_size
            ),
            "Use the index of a single suite, component and architecture.",
        ));
    }
    Ok(())
}

/// Reads at most `max_size` bytes from `reader`.
///
/// # Security
/// Bounds decompression output so a small gzip bomb cannot exhaust memory.
///
/// # Errors
/// Returns an error if the stream yields more than `max_size` bytes or fails
pub fn read_bounded<R: Read>(reader: R, max_size: u64, description: &str) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader
        .take(max_size + 1)
        .read_to_end(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))?;

    if buffer.len() as u64 > max_size {
        anyhow::bail!(
            "Security: {} exceeds the maximum allowed size of {} bytes.",
            description,
            max_size
        );
    }

    Ok(buffer)
}
