/// Formatter adapters for the supported report formats
mod csv_formatter;
mod dot_formatter;
mod json_formatter;

pub use csv_formatter::CsvFormatter;
pub use dot_formatter::DotFormatter;
pub use json_formatter::JsonFormatter;
