//! Parsing of user-supplied objective formulas.
//!
//! A [`Formula`] is a validated arithmetic expression in one free variable,
//! restricted to numeric literals, the four arithmetic operators plus `^`,
//! parentheses, unary minus, and a fixed set of elementary functions
//! (`sin`, `cos`, `tan`, `exp`, `ln`, `log10`, `sqrt`, `abs`). Parsing
//! nothing but this grammar means a formula can only ever compute a number;
//! there is no general evaluation of user input anywhere, and expression
//! nesting is capped so pathological input fails with an error rather than
//! exhausting the stack.
//!
//! Operator precedence follows the usual arithmetic conventions: `*` and `/`
//! associate left (`1/lam*lam` is `(1/lam)*lam`), `^` associates right and
//! binds tighter than unary minus (`-lam^2` is `-(lam^2)`).
//!
//! # Quick Start
//!
//! ```ignore
//! use unimin::formula::Formula;
//! use unimin::search::{golden_section, SearchRequest};
//!
//! let formula = Formula::parse("lam*lam + 1/(lam*lam)", "lam")?;
//! let request = SearchRequest::new(0.425, 1.275, 0.0045);
//! let result = golden_section(formula.objective(), &request)?;
//! assert!((result.x - 1.0).abs() < 0.01);
//! ```

mod ast;
mod parser;
mod token;

pub mod error;

pub use error::{FormulaError, FormulaResult};

use ast::Expr;

/// A parsed arithmetic formula in one free variable.
///
/// Construction validates the source completely; evaluation afterwards is
/// total, returning NaN or an infinity on domain errors (division by zero,
/// logarithm of a negative, and so on) rather than failing. The interval
/// searches reject those non-finite values at the probe where they occur.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    expr: Expr,
    source: String,
    variable: String,
}

impl Formula {
    /// Parse `source` as a formula over the free variable `variable`.
    ///
    /// # Arguments
    /// * `source` - Formula text, e.g. `"lam*lam + 1/(lam*lam)"`
    /// * `variable` - Name of the free variable, e.g. `"lam"`
    ///
    /// # Errors
    /// * `InvalidToken` on characters outside the grammar
    /// * `UnexpectedToken` / `UnexpectedEnd` on malformed expressions
    /// * `UnknownFunction` on calls outside the elementary set
    /// * `UnknownVariable` on identifiers other than `variable`
    /// * `TooDeep` on expressions nested past the parser's depth cap
    pub fn parse(source: &str, variable: &str) -> FormulaResult<Self> {
        let expr = parser::parse(source, variable)?;
        Ok(Self {
            expr,
            source: source.to_string(),
            variable: variable.to_string(),
        })
    }

    /// Evaluate the formula with the free variable bound to `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }

    /// Borrow the formula as an objective function for the searches.
    pub fn objective(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.eval(x)
    }

    /// The original source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The name of the free variable.
    pub fn variable(&self) -> &str {
        &self.variable
    }
}
