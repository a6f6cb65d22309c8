/// Mock implementations for testing
mod mock_index_source;
mod mock_progress_reporter;

pub use mock_index_source::MockIndexSource;
pub use mock_progress_reporter::MockProgressReporter;
