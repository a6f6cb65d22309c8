/// Ports module defining the interfaces the application core depends on
///
/// Only driven (outbound) ports exist: the CLI calls the use case directly.
pub mod outbound;
