//! Fibonacci search with a precomputed step count.

use super::error::{SearchError, SearchResult};
use super::utils::{MAX_ITERATIONS, eval_checked};
use super::{IterationRecord, Minimum, SearchRequest};

/// Number of narrowing steps that bring `width` under `epsilon`.
///
/// Solves width / phi^n <= epsilon for the smallest integer n. Clamped to at
/// least 1 so the trace keeps its 1-based final record even when the bracket
/// is already narrower than the tolerance. Returned as `f64`: the caller
/// checks the iteration cap before casting, which also covers a bracket
/// width that overflows to infinity.
#[inline]
fn required_steps(width: f64, epsilon: f64) -> f64 {
    let phi = (1.0 + (5.0_f64).sqrt()) / 2.0;
    ((width / epsilon).ln() / phi.ln()).ceil().max(1.0)
}

/// Fibonacci search over a bracketing interval.
///
/// The limiting form of the classic Fibonacci method: successive Fibonacci
/// ratios are replaced by their limit 1/phi, and the number of narrowing
/// steps is fixed up front from the bracket width and tolerance instead of
/// being re-checked each iteration. Probes sit at `b - (b - a) / phi` and
/// `a + (b - a) / phi`; each shrink keeps one probe, so an iteration costs a
/// single new evaluation. The final record is tagged with the precomputed
/// step count and holds the midpoint of the final bracket.
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
/// * `DidNotConverge` if the precomputed step count exceeds the iteration cap
///
/// # Note
/// The step count depends only on the bracket and the tolerance, never on
/// the objective, so the trace length is known before the first evaluation.
pub fn fibonacci<F>(f: F, request: &SearchRequest) -> SearchResult<Minimum>
where
    F: Fn(f64) -> f64,
{
    let context = "fibonacci";
    request.validate(context)?;

    // Golden ratio: phi = (1 + sqrt(5)) / 2 ≈ 1.618034
    let phi = (1.0 + (5.0_f64).sqrt()) / 2.0;

    let steps = required_steps(request.width(), request.epsilon);
    if steps > MAX_ITERATIONS as f64 {
        return Err(SearchError::DidNotConverge {
            iterations: MAX_ITERATIONS,
            epsilon: request.epsilon,
            context: context.to_string(),
        });
    }
    let n = steps as usize;

    let mut a = request.a;
    let mut b = request.b;

    // Initial interior points
    let mut x1 = b - (b - a) / phi;
    let mut x2 = a + (b - a) / phi;
    let mut f1 = eval_checked(&f, x1, context)?;
    let mut f2 = eval_checked(&f, x2, context)?;
    let mut nfev = 2;

    let mut trace = Vec::with_capacity(n);
    for i in 1..n {
        // Log the probe under comparison, then narrow the bracket
        trace.push(IterationRecord {
            iteration: i,
            x: x1,
            f: f1,
        });
        if f1 < f2 {
            // Minimum is in [a, x2]
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = b - (b - a) / phi;
            f1 = eval_checked(&f, x1, context)?;
        } else {
            // Minimum is in [x1, b]
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = a + (b - a) / phi;
            f2 = eval_checked(&f, x2, context)?;
        }
        nfev += 1;
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn shifted_square(x: f64) -> f64 {
        (x - 1.0) * (x - 1.0)
    }

    fn reciprocal_bowl(x: f64) -> f64 {
        x * x + 1.0 / (x * x)
    }

    #[test]
    fn test_fibonacci_shifted_square() {
        let request = SearchRequest::new(0.0, 2.0, 0.01);
        let result = fibonacci(shifted_square, &request).expect("fibonacci failed");
        assert_relative_eq!(result.x, 0.9980806212745005, epsilon = 1e-12);
        assert!(result.f_min < 1e-5);
        assert_eq!(result.iterations, 12);
        assert_eq!(result.trace.len(), 12);
        assert!((result.x - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_fibonacci_shifted_square_trace() {
        let request = SearchRequest::new(0.0, 2.0, 0.01);
        let result = fibonacci(shifted_square, &request).expect("fibonacci failed");
        let first = result.trace[0];
        assert_eq!(first.iteration, 1);
        assert_relative_eq!(first.x, 0.7639320225002104, epsilon = 1e-15);
        let last = result.trace[result.trace.len() - 1];
        assert_eq!(last.iteration, result.iterations);
        assert_eq!(last.x, result.x);
        assert_eq!(last.f, result.f_min);
        for (i, record) in result.trace.iter().enumerate() {
            assert_eq!(record.iteration, i + 1);
        }
    }

    #[test]
    fn test_fibonacci_reciprocal_bowl() {
        let request = SearchRequest::new(0.425, 1.275, 0.0045);
        let result = fibonacci(reciprocal_bowl, &request).expect("fibonacci failed");
        assert_relative_eq!(result.x, 1.0011532799093334, epsilon = 1e-12);
        assert_relative_eq!(result.f_min, 2.000005314091329, epsilon = 1e-12);
        assert_eq!(result.iterations, 11);
        assert!((result.x - 1.0).abs() < 0.01);
        assert!((result.f_min - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_fibonacci_step_count_bound() {
        // Smallest n with width / phi^n <= epsilon
        let phi = (1.0 + (5.0_f64).sqrt()) / 2.0;
        let cases = [(0.0, 2.0, 0.01, 12), (0.425, 1.275, 0.0045, 11)];
        for (a, b, epsilon, expected) in cases {
            let n = required_steps(b - a, epsilon);
            assert_eq!(n as usize, expected);
            assert!((b - a) / phi.powi(expected as i32) <= epsilon);
            assert!((b - a) / phi.powi(expected as i32 - 1) > epsilon);
        }
    }

    #[test]
    fn test_fibonacci_final_width_closed_form() {
        // n - 1 shrinks by 1/phi each: width = w0 / phi^(n-1)
        let phi = (1.0 + (5.0_f64).sqrt()) / 2.0;
        let request = SearchRequest::new(0.425, 1.275, 0.0045);
        let result = fibonacci(reciprocal_bowl, &request).expect("fibonacci failed");
        let expected = 0.85 / phi.powi(result.iterations as i32 - 1);
        assert_relative_eq!(result.bracket_width, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_fibonacci_step_count_ignores_objective() {
        let request = SearchRequest::new(0.0, 2.0, 0.01);
        let square = fibonacci(shifted_square, &request).expect("fibonacci failed");
        let sine = fibonacci(|x: f64| x.sin(), &request).expect("fibonacci failed");
        assert_eq!(square.trace.len(), sine.trace.len());
        assert_eq!(square.iterations, sine.iterations);
    }

    #[test]
    fn test_fibonacci_tolerance_coarser_than_bracket() {
        // Computed step count clamps to 1: no narrowing, one final record
        let request = SearchRequest::new(0.0, 1.0, 2.0);
        let result = fibonacci(shifted_square, &request).expect("fibonacci failed");
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.trace[0].iteration, 1);
        assert!((result.x - 0.5).abs() < 1e-15);
        assert!((result.f_min - 0.25).abs() < 1e-15);
        assert!((result.bracket_width - 1.0).abs() < 1e-15);
        assert_eq!(result.nfev, 3);
    }

    #[test]
    fn test_fibonacci_nfev_counts_probe_reuse() {
        let request = SearchRequest::new(0.0, 2.0, 0.01);
        let result = fibonacci(shifted_square, &request).expect("fibonacci failed");
        assert_eq!(result.nfev, result.trace.len() + 2);
        assert_eq!(result.nfev, 14);
    }

    #[test]
    fn test_fibonacci_idempotent() {
        let request = SearchRequest::new(0.425, 1.275, 0.0045);
        let first = fibonacci(reciprocal_bowl, &request).expect("fibonacci failed");
        let second = fibonacci(reciprocal_bowl, &request).expect("fibonacci failed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_fibonacci_invalid_interval() {
        let request = SearchRequest::new(2.0, 2.0, 0.01);
        let result = fibonacci(shifted_square, &request);
        assert!(matches!(result, Err(SearchError::InvalidInterval { .. })));
    }

    #[test]
    fn test_fibonacci_invalid_tolerance() {
        let request = SearchRequest::new(0.0, 2.0, f64::NAN);
        let result = fibonacci(shifted_square, &request);
        assert!(matches!(result, Err(SearchError::InvalidTolerance { .. })));
    }

    #[test]
    fn test_fibonacci_evaluation_failure_reports_probe() {
        let request = SearchRequest::new(0.0, 2.0, 0.01);
        let result = fibonacci(|_| f64::INFINITY, &request);
        match result {
            Err(SearchError::EvaluationFailed { x, value, .. }) => {
                assert!((x - 0.7639320225002104).abs() < 1e-12);
                assert!(value.is_infinite());
            }
            other => panic!("expected EvaluationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_fibonacci_step_count_overflow() {
        // Finite bounds whose width overflows to infinity
        let request = SearchRequest::new(-f64::MAX, f64::MAX, 0.01);
        let result = fibonacci(shifted_square, &request);
        assert!(matches!(
            result,
            Err(SearchError::DidNotConverge {
                iterations: MAX_ITERATIONS,
                ..
            })
        ));
    }
}
