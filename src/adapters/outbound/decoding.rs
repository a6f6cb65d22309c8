//! Turning raw index bytes into text
//!
//! Shared by every [`IndexSource`](crate::ports::outbound::IndexSource)
//! adapter: the same bytes decode the same way whether they came from disk or
//! from a mirror.

use crate::shared::error::CritError;
use crate::shared::security::{read_bounded, MAX_DECOMPRESSED_SIZE};
use crate::shared::Result;
use flate2::read::MultiGzDecoder;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Returns true when `bytes` start with the gzip magic number
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Decodes index bytes into UTF-8 text, gunzipping when needed
///
/// `location` only labels errors.
///
/// # Errors
/// Returns [`CritError::IndexDecodeError`] if the gzip stream is corrupt, its
/// output exceeds [`MAX_DECOMPRESSED_SIZE`] or the text is not UTF-8
pub fn decode_index(bytes: Vec<u8>, location: &str) -> Result<String> {
    let bytes = if is_gzip(&bytes) {
        read_bounded(
            MultiGzDecoder::new(bytes.as_slice()),
            MAX_DECOMPRESSED_SIZE,
            "decompressed package index",
        )
        .map_err(|e| CritError::IndexDecodeError {
            location: location.to_string(),
            details: e.to_string(),
        })?
    } else {
        bytes
    };

    let text = String::from_utf8(bytes).map_err(|e| CritError::IndexDecodeError {
        location: location.to_string(),
        details: format!("content is not valid UTF-8: {}", e.utf8_error()),
    })?;

    tracing::debug!(location, bytes = text.len(), "package index decoded");
    Ok(text)
}
