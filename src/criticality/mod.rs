/// Criticality domain - pure business logic
///
/// Parsing of package indexes, dependency graph construction, closure
/// computation and the criticality signals derived from it. Nothing in this
/// layer performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
