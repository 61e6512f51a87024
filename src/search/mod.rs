//! Derivative-free minimization of univariate functions over a bracket.
//!
//! This module provides bracketing searches for a minimum of `f: (f64) -> f64`
//! on an interval `[a, b]`. All methods narrow the bracket until its width
//! falls under the requested tolerance and return the midpoint of the final
//! bracket together with a full, ordered trace of the search.
//!
//! # Methods
//!
//! - [`golden_section`] - interior probes at the inverse golden ratio, one
//!   new evaluation per iteration
//! - [`fibonacci`] - same probe geometry with the step count fixed up front
//!   from the bracket width and tolerance
//! - [`extremum_localization`] - interval halving with two straddle probes
//!   around each midpoint
//!
//! # Quick Start
//!
//! ```ignore
//! use unimin::search::{golden_section, SearchRequest};
//!
//! // Minimize f(x) = (x - 1)^2 on [0, 2]
//! let request = SearchRequest::new(0.0, 2.0, 0.01);
//! let result = golden_section(|x| (x - 1.0) * (x - 1.0), &request)?;
//! assert!((result.x - 1.0).abs() < 0.01);
//!
//! // Every narrowing step is on record
//! for record in &result.trace {
//!     println!("{}: x = {}, f = {}", record.iteration, record.x, record.f);
//! }
//! ```
//!
//! Method selection can also be deferred to runtime through [`minimize`]:
//!
//! ```ignore
//! use unimin::search::{minimize, Method, SearchRequest};
//!
//! let request = SearchRequest::new(0.425, 1.275, 0.0045);
//! let result = minimize(|x| x * x + 1.0 / (x * x), Method::Fibonacci, &request)?;
//! ```

pub mod error;

mod fibonacci;
mod golden;
mod localization;
pub(crate) mod utils;

pub use error::{SearchError, SearchResult};
pub use fibonacci::fibonacci;
pub use golden::golden_section;
pub use localization::extremum_localization;

/// Search method for bracketed minimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Golden-section search; one new evaluation per iteration.
    GoldenSection,
    /// Fibonacci search; step count precomputed from width and tolerance.
    Fibonacci,
    /// Interval halving with straddle probes around the midpoint.
    ExtremumLocalization,
}

/// Bracketing interval and convergence tolerance for a search.
///
/// Carries the raw inputs only; each search validates them at call time, so
/// an out-of-order or non-finite request fails at the call, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRequest {
    /// Left bracket endpoint
    pub a: f64,
    /// Right bracket endpoint
    pub b: f64,
    /// Convergence tolerance on the bracket width
    pub epsilon: f64,
}

impl SearchRequest {
    /// Create a request for the bracket `[a, b]` with tolerance `epsilon`.
    pub fn new(a: f64, b: f64, epsilon: f64) -> Self {
        Self { a, b, epsilon }
    }

    /// Width of the bracketing interval.
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Check the bracket and tolerance, naming `context` in any error.
    pub(crate) fn validate(&self, context: &str) -> SearchResult<()> {
        if !self.a.is_finite() || !self.b.is_finite() || self.a >= self.b {
            return Err(SearchError::InvalidInterval {
                a: self.a,
                b: self.b,
                context: context.to_string(),
            });
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(SearchError::InvalidTolerance {
                epsilon: self.epsilon,
                context: context.to_string(),
            });
        }
        Ok(())
    }
}

/// One logged step of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    /// 1-based step index, contiguous across the trace
    pub iteration: usize,
    /// Point logged for this step
    pub x: f64,
    /// Objective value logged for this step
    pub f: f64,
}

/// Result from a bracketed minimization.
///
/// The trace records every narrowing step in order; its last entry always
/// repeats the returned minimum, so the trace is never empty on success.
#[derive(Debug, Clone, PartialEq)]
pub struct Minimum {
    /// The minimum point found (midpoint of the final bracket)
    pub x: f64,
    /// Function value at the minimum
    pub f_min: f64,
    /// Number of iterations used; equals the final trace index
    pub iterations: usize,
    /// Number of objective evaluations
    pub nfev: usize,
    /// Final bracket width
    pub bracket_width: f64,
    /// Ordered per-iteration record of the search
    pub trace: Vec<IterationRecord>,
}

/// Minimize `f` over the requested bracket with the selected method.
///
/// # Arguments
/// * `f` - Objective function to minimize
/// * `method` - Search method to run
/// * `request` - Bracketing interval and convergence tolerance
///
/// # Returns
/// Minimum of `f` in `[a, b]` with the full iteration trace
///
/// # Errors
/// Propagates the selected method's errors unchanged.
pub fn minimize<F>(f: F, method: Method, request: &SearchRequest) -> SearchResult<Minimum>
where
    F: Fn(f64) -> f64,
{
    match method {
        Method::GoldenSection => golden_section(f, request),
        Method::Fibonacci => fibonacci(f, request),
        Method::ExtremumLocalization => extremum_localization(f, request),
    }
}
