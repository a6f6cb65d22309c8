use crate::adapters::outbound::decoding::decode_index;
use crate::ports::outbound::{IndexLocation, IndexSource};
use crate::shared::error::CritError;
use crate::shared::security::{
    read_bounded, validate_file_size, validate_regular_file, MAX_INDEX_FILE_SIZE,
};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs::File;
use std::path::Path;

/// FileSystemIndexReader adapter for package indexes on local disk
///
/// Accepts plain `Packages` files as well as gzip-compressed `Packages.gz`;
/// compression is detected from the content, not the file name.
pub struct FileSystemIndexReader;

impl FileSystemIndexReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads at most [`MAX_INDEX_FILE_SIZE`] bytes, in case the file grew
    /// after its size was checked
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let file = File::open(path)
            .map_err(|e| anyhow::anyhow!("Failed to open package index: {}", e))?;
        read_bounded(file, MAX_INDEX_FILE_SIZE, "package index")
    }

    pub fn read_path(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CritError::IndexNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "No index file at \"{}\".\n   \
                     Download a Packages or Packages.gz file from a mirror, or pass its location with --index.",
                    path.display()
                ),
            }
            .into());
        }

        // Symlinks, non-regular files and oversized files are security errors
        let size = validate_regular_file(path, "package index")?;
        validate_file_size(size, path, MAX_INDEX_FILE_SIZE)?;

        let location = path.display().to_string();
        let bytes = self
            .read_file(path)
            .map_err(|e| CritError::IndexReadError {
                location: location.clone(),
                details: e.to_string(),
            })?;

        decode_index(bytes, &location)
    }
}

impl Default for FileSystemIndexReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IndexSource for FileSystemIndexReader {
    async fn read_index(&self, location: &IndexLocation) -> Result<String> {
        match location {
            IndexLocation::Path(path) => self.read_path(path),
            IndexLocation::Url(url) => Err(CritError::IndexReadError {
                location: url.clone(),
                details: "this reader only accepts filesystem paths".to_string(),
            }
            .into()),
        }
    }
}
