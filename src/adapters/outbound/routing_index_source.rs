use super::filesystem::FileSystemIndexReader;
use super::network::MirrorIndexClient;
use crate::ports::outbound::{IndexLocation, IndexSource};
use crate::shared::Result;
use async_trait::async_trait;

/// RoutingIndexSource adapter picking the reader for a location
///
/// Paths go to [`FileSystemIndexReader`], URLs to [`MirrorIndexClient`].
pub struct RoutingIndexSource {
    files: FileSystemIndexReader,
    mirror: MirrorIndexClient,
}

impl RoutingIndexSource {
    pub fn new() -> Result<Self> {
        Ok(Self {
            files: FileSystemIndexReader::new(),
            mirror: MirrorIndexClient::new()?,
        })
    }
}

#[async_trait]
impl IndexSource for RoutingIndexSource {
    async fn read_index(&self, location: &IndexLocation) -> Result<String> {
        match location {
            IndexLocation::Path(_) => self.files.read_index(location).await,
            IndexLocation::Url(_) => self.mirror.read_index(location).await,
        }
    }
}
