/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod formatter;
pub mod index_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::CriticalityFormatter;
pub use index_source::{IndexLocation, IndexSource};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
