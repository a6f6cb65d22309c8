/// ProgressReporter port for user feedback during an analysis
///
/// Implementations write to stderr so stdout stays reserved for the report.
pub trait ProgressReporter {
    fn report(&self, message: &str);

    /// Reports `current` out of `total` units done
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or non-fatal error
    fn report_error(&self, message: &str);

    fn report_completion(&self, message: &str);
}
