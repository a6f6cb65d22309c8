mod clause_extractor;
mod closure_engine;
mod graph_builder;
mod line_classifier;
mod page_rank;
mod record_parser;
mod reference_counter;
mod report_generator;

pub use clause_extractor::ClauseExtractor;
pub use closure_engine::ClosureEngine;
pub use graph_builder::GraphBuilder;
pub use line_classifier::{LineClass, LineClassifier};
pub use page_rank::PageRankScorer;
pub use record_parser::{ParsedIndex, RecordParser};
pub use reference_counter::ReferenceCounter;
pub use report_generator::ReportGenerator;
