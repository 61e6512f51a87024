//! unimin - Derivative-free univariate minimization with full iteration traces
//!
//! unimin locates the minimum of a scalar function over a bracketing interval
//! using derivative-free searches, and returns the whole narrowing history
//! alongside the minimizer so callers can inspect, tabulate, or plot every
//! step of the run.
//!
//! # Modules
//!
//! - [`search`] - Bracketed minimization: golden-section search, Fibonacci
//!   search, and extremum localization by interval halving
//! - [`formula`] - A constrained arithmetic-expression parser that turns
//!   user-entered formula text into an objective function
//!
//! # Example
//!
//! ```ignore
//! use unimin::{golden_section, minimize, Formula, Method, SearchRequest};
//!
//! // Closures work directly
//! let request = SearchRequest::new(0.0, 2.0, 0.01);
//! let result = golden_section(|x| (x - 1.0) * (x - 1.0), &request)?;
//! assert!((result.x - 1.0).abs() < 0.01);
//!
//! // User-entered formulas are parsed, never executed
//! let formula = Formula::parse("lam*lam + 1/(lam*lam)", "lam")?;
//! let request = SearchRequest::new(0.425, 1.275, 0.0045);
//! let result = minimize(formula.objective(), Method::Fibonacci, &request)?;
//!
//! // The trace records every narrowing step, ending at the minimum
//! for record in &result.trace {
//!     println!("{:>3}  {:<20}  {:<20}", record.iteration, record.x, record.f);
//! }
//! ```
//!
//! All searches share one contract: the bracket width never grows, record
//! indices run 1, 2, 3, ... across the trace, and the final record holds the
//! midpoint of the converged bracket with an exact objective value there.

pub mod formula;
pub mod search;

// Re-export main types for convenience
pub use formula::{Formula, FormulaError, FormulaResult};
pub use search::{
    IterationRecord, Method, Minimum, SearchError, SearchRequest, SearchResult,
    extremum_localization, fibonacci, golden_section, minimize,
};
