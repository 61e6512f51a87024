//! Golden-section search.

use super::error::{SearchError, SearchResult};
use super::utils::{MAX_ITERATIONS, eval_checked};
use super::{IterationRecord, Minimum, SearchRequest};

/// Golden-section search over a bracketing interval.
///
/// Keeps two interior probes placed by the inverse golden ratio and shrinks
/// the bracket toward the better one. One probe survives each shrink, so
/// every iteration costs a single new objective evaluation. Each iteration
/// appends the current left probe to the trace before narrowing; the final
/// record holds the midpoint of the converged bracket and its exact value.
///
/// # Arguments
/// * `f` - Objective function to minimize
/// * `request` - Bracketing interval and convergence tolerance
///
/// # Returns
/// Minimum of `f` in `[a, b]` with the full iteration trace
///
/// # Errors
/// * `InvalidInterval` if a bound is non-finite or a >= b
/// * `InvalidTolerance` if epsilon is non-finite, zero, or negative
/// * `EvaluationFailed` if `f` returns a non-finite value at a probe
/// * `DidNotConverge` if the width condition is still unmet at the iteration cap
///
/// # Note
/// Robust on unimodal objectives; linear convergence with ratio ≈ 0.618 per
/// iteration. An exact probe tie narrows to the right half, matching the
/// strict `<` comparison.
pub fn golden_section<F>(f: F, request: &SearchRequest) -> SearchResult<Minimum>
where
    F: Fn(f64) -> f64,
{
    let context = "golden_section";
    request.validate(context)?;

    // Inverse golden ratio: tau = (sqrt(5) - 1) / 2 ≈ 0.618034
    let tau = ((5.0_f64).sqrt() - 1.0) / 2.0;

    let mut a = request.a;
    let mut b = request.b;
    let epsilon = request.epsilon;

    // Initial interior points
    let mut x1 = b - tau * (b - a);
    let mut x2 = a + tau * (b - a);
    let mut f1 = eval_checked(&f, x1, context)?;
    let mut f2 = eval_checked(&f, x2, context)?;
    let mut nfev = 2;

    let mut trace = Vec::new();
    let mut n = 1;

    while (b - a) > epsilon {
        if n > MAX_ITERATIONS {
            return Err(SearchError::DidNotConverge {
                iterations: MAX_ITERATIONS,
                epsilon,
                context: context.to_string(),
            });
        }

        // Log the probe under comparison, then narrow the bracket
        trace.push(IterationRecord {
            iteration: n,
            x: x1,
            f: f1,
        });
        if f1 < f2 {
            // Minimum is in [a, x2]
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = b - tau * (b - a);
            f1 = eval_checked(&f, x1, context)?;
        } else {
            // Minimum is in [x1, b]
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = a + tau * (b - a);
            f2 = eval_checked(&f, x2, context)?;
        }
        nfev += 1;
        n += 1;
    }

    // Midpoint of the final bracket, evaluated exactly
    let x_min = 0.5 * (a + b);
    let f_min = eval_checked(&f, x_min, context)?;
    nfev += 1;
    trace.push(IterationRecord {
        iteration: n,
        x: x_min,
        f: f_min,
    });

    Ok(Minimum {
        x: x_min,
        f_min,
        iterations: n,
        nfev,
        bracket_width: b - a,
        trace,
    })
}
