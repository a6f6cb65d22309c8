/// Use cases module containing application business logic orchestration
mod analyze_index;

pub use analyze_index::AnalyzeIndexUseCase;
