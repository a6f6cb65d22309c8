use crate::application::read_models::CriticalityReadModel;
use crate::shared::Result;

/// CriticalityFormatter port for rendering an analysis result
///
/// Implemented once per output format (CSV, JSON, Graphviz DOT).
pub trait CriticalityFormatter {
    /// Renders the read model into the format's textual representation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &CriticalityReadModel) -> Result<String>;
}
