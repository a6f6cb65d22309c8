use crate::adapters::outbound::formatters::{CsvFormatter, DotFormatter, JsonFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::CriticalityFormatter;

/// Factory for creating report formatters
///
/// Selects the infrastructure adapter for an application-level format choice.
pub struct FormatterFactory;

impl FormatterFactory {
    /// # Examples
    /// ```
    /// use pkgcrit::application::dto::OutputFormat;
    /// use pkgcrit::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Csv);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn CriticalityFormatter> {
        match format {
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Formatter for the `--graph` export
    pub fn create_graph() -> Box<dyn CriticalityFormatter> {
        Box::new(DotFormatter::new())
    }

    /// # Examples
    /// ```
    /// use pkgcrit::application::dto::OutputFormat;
    /// use pkgcrit::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Csv => "📝 Generating CSV report...",
            OutputFormat::Json => "📝 Generating JSON report...",
        }
    }
}
