use crate::shared::Result;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

/// Where a package index is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexLocation {
    Path(PathBuf),
    Url(String),
}

impl IndexLocation {
    /// Classifies `location`: `http://` and `https://` prefixes are URLs,
    /// anything else is a filesystem path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            IndexLocation::Url(location.to_string())
        } else {
            IndexLocation::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for IndexLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexLocation::Path(path) => write!(f, "{}", path.display()),
            IndexLocation::Url(url) => write!(f, "{}", url),
        }
    }
}

/// IndexSource port for obtaining the raw text of a package index
///
/// # Async Support
/// Fetching may go over the network, so the port is async. Implementations
/// must be `Send + Sync` so the use case can hold them across await points.
#[async_trait]
pub trait IndexSource: Send + Sync {
    /// Returns the decompressed UTF-8 text of the index at `location`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The index does not exist or cannot be fetched
    /// - The content exceeds the size limits
    /// - The content is neither gzip nor valid UTF-8 text
    async fn read_index(&self, location: &IndexLocation) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_locations() {
        assert_eq!(
            IndexLocation::parse("https://deb.debian.org/debian/dists/stable/main/binary-amd64/Packages.gz"),
            IndexLocation::Url(
                "https://deb.debian.org/debian/dists/stable/main/binary-amd64/Packages.gz".to_string()
            )
        );
        assert!(matches!(IndexLocation::parse("HTTP://mirror/Packages"), IndexLocation::Url(_)));
    }

    #[test]
    fn test_parse_path_locations() {
        assert_eq!(
            IndexLocation::parse("Packages"),
            IndexLocation::Path(PathBuf::from("Packages"))
        );
        assert!(matches!(IndexLocation::parse("./ftp/Packages.gz"), IndexLocation::Path(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(IndexLocation::parse("dir/Packages").to_string(), "dir/Packages");
        assert_eq!(IndexLocation::parse("http://m/P").to_string(), "http://m/P");
    }
}
