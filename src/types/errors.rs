use thiserror::Error;

/// Errors surfaced by the matching engine.
///
/// Input incompleteness (missing name, missing reference candidates) is
/// never an error: it degrades to a 0.0 signal score inside the scorers.
/// Everything here is a hard failure that propagates to the caller
/// unmodified; the engine never converts a failure into a "no match".
#[derive(Debug, Error)]
pub enum MatchError {
    /// Signal weights for a resolved category do not sum to 1.0.
    /// Raised at resolution time, never silently renormalized.
    #[error("invalid signal weights for category '{category}': sum is {sum}")]
    InvalidWeights { category: String, sum: f64 },
    /// Inquiry store failure during candidate retrieval.
    #[error("inquiry store error: {0}")]
    Store(String),
    /// Configuration store failure during threshold resolution.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type MatchResult<T> = Result<T, MatchError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
