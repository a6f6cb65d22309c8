/// Crate-wide Result alias.
///
/// Fatal failures travel as `anyhow::Error`, usually wrapping a [`CritError`](super::error::CritError).
pub type Result<T> = std::result::Result<T, anyhow::Error>;
