use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Argument parse failures map to [`ExitCode::InvalidArguments`], except
/// `--help` and `--version` which exit with [`ExitCode::Success`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report produced
    Success = 0,
    /// Fatal ingestion, configuration or output failure
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Fatal errors of an analysis run.
///
/// Record-level problems are never reported through this type; they are
/// counted in `ParseDiagnostics` and the run continues.
#[derive(Debug, Error)]
pub enum CritError {
    #[error("Package index not found: {path}\n\n💡 Hint: {suggestion}")]
    IndexNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read package index: {location}\nDetails: {details}\n\n💡 Hint: Please verify that the index exists and you have read permissions")]
    IndexReadError { location: String, details: String },

    #[error("Failed to decode package index: {location}\nDetails: {details}\n\n💡 Hint: The index must be UTF-8 text, optionally gzip-compressed (Packages or Packages.gz)")]
    IndexDecodeError { location: String, details: String },

    #[error("Failed to fetch package index: {url}\nDetails: {details}\n\n💡 Hint: Please check your network connection and the mirror URL")]
    IndexFetchError { url: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_index_not_found_display() {
        let error = CritError::IndexNotFound {
            path: PathBuf::from("/srv/mirror/Packages"),
            suggestion: "Pass --index".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Package index not found"));
        assert!(display.contains("/srv/mirror/Packages"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Pass --index"));
    }

    #[test]
    fn test_index_decode_error_display() {
        let error = CritError::IndexDecodeError {
            location: "Packages.gz".to_string(),
            details: "invalid gzip header".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to decode package index"));
        assert!(display.contains("Packages.gz"));
        assert!(display.contains("invalid gzip header"));
    }

    #[test]
    fn test_index_fetch_error_display() {
        let error = CritError::IndexFetchError {
            url: "https://deb.debian.org/debian/dists/stable/main/binary-amd64/Packages.gz"
                .to_string(),
            details: "status 404".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to fetch package index"));
        assert!(display.contains("status 404"));
        assert!(display.contains("network connection"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = CritError::InvalidConfig {
            message: "workers must be at least 1".to_string(),
            hint: "Remove the workers key".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid configuration"));
        assert!(display.contains("workers must be at least 1"));
        assert!(display.contains("Remove the workers key"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = CritError::FileWriteError {
            path: PathBuf::from("/test/result.csv"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/result.csv"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = CritError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
