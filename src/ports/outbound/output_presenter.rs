use crate::shared::Result;

/// OutputPresenter port for delivering rendered output
///
/// Abstracts the destination (stdout, file) of formatted content.
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if:
    /// - Writing to the destination fails
    /// - The destination is refused by security checks
    fn present(&self, content: &str) -> Result<()>;
}
