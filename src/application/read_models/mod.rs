//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving formatters a denormalized picture of one
//! analysis, independent of the domain types.

mod criticality_read_model;
mod criticality_read_model_builder;
mod package_view;

pub use criticality_read_model::{
    CriticalityReadModel, DependencyEdgeView, GraphSummaryView, ReportMetadataView,
};
pub use criticality_read_model_builder::CriticalityReadModelBuilder;
pub use package_view::PackageView;
