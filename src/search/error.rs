//! Error types for interval search operations.

use std::fmt;

/// Result type for interval search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur during an interval search.
#[derive(Debug, Clone)]
pub enum SearchError {
    /// Invalid bracketing interval (non-finite bound, or a >= b).
    InvalidInterval { a: f64, b: f64, context: String },

    /// Invalid convergence tolerance (non-finite, zero, or negative).
    InvalidTolerance { epsilon: f64, context: String },

    /// The objective returned a non-finite value at a probed point.
    EvaluationFailed { x: f64, value: f64, context: String },

    /// The search did not converge within the iteration cap.
    DidNotConverge {
        iterations: usize,
        epsilon: f64,
        context: String,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { a, b, context } => {
                write!(
                    f,
                    "Invalid interval [{}, {}] in {}: bounds must be finite with a < b",
                    a, b, context
                )
            }
            Self::InvalidTolerance { epsilon, context } => {
                write!(
                    f,
                    "Invalid tolerance {} in {}: epsilon must be finite and positive",
                    epsilon, context
                )
            }
            Self::EvaluationFailed { x, value, context } => {
                write!(
                    f,
                    "Objective returned a non-finite value in {}: f({}) = {}",
                    context, x, value
                )
            }
            Self::DidNotConverge {
                iterations,
                epsilon,
                context,
            } => {
                write!(
                    f,
                    "{}: did not converge after {} iterations (epsilon: {})",
                    context, iterations, epsilon
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}
