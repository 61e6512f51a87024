//! Shared helpers for the interval search algorithms.

use super::error::{SearchError, SearchResult};

/// Hard cap on narrowing iterations.
///
/// Tolerances far below the representable width of the bracket stall the
/// width condition (the interval stops shrinking at one ulp); the cap turns
/// that stall into a `DidNotConverge` error instead of an endless loop.
pub const MAX_ITERATIONS: usize = 10_000;

/// Evaluate the objective at `x`, rejecting non-finite results.
///
/// Every probe goes through this check so that a NaN or infinite objective
/// value surfaces as `EvaluationFailed` at the offending point rather than
/// poisoning the bracket comparisons.
#[inline]
pub fn eval_checked<F>(f: &F, x: f64, context: &str) -> SearchResult<f64>
where
    F: Fn(f64) -> f64,
{
    let value = f(x);
    if !value.is_finite() {
        return Err(SearchError::EvaluationFailed {
            x,
            value,
            context: context.to_string(),
        });
    }
    Ok(value)
}
