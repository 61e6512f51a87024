//! Expression tree for parsed formulas.

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Exponentiation.
    Pow,
}

impl BinaryOp {
    /// Apply the operator to two operands.
    ///
    /// Total on all of `f64`: division by zero and out-of-range powers
    /// follow IEEE semantics and surface as infinities or NaN.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

/// Elementary function callable from a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFunction {
    Sin,
    Cos,
    Tan,
    Exp,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log10,
    Sqrt,
    Abs,
}

impl MathFunction {
    /// Look up a function by its formula-source name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "exp" => Some(Self::Exp),
            "ln" => Some(Self::Ln),
            "log10" => Some(Self::Log10),
            "sqrt" => Some(Self::Sqrt),
            "abs" => Some(Self::Abs),
            _ => None,
        }
    }

    /// Apply the function to an argument.
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Exp => x.exp(),
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Sqrt => x.sqrt(),
            Self::Abs => x.abs(),
        }
    }
}

/// Parsed formula expression over one free variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// The formula's single free variable.
    Variable,
    /// Unary negation.
    Neg(Box<Expr>),
    /// Binary operation.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Elementary function call.
    Call {
        function: MathFunction,
        argument: Box<Expr>,
    },
}

impl Expr {
    /// Evaluate the expression with the free variable bound to `x`.
    ///
    /// Total: domain errors propagate as NaN or infinities, never panics.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Variable => x,
            Self::Neg(inner) => -inner.eval(x),
            Self::Binary { op, lhs, rhs } => op.apply(lhs.eval(x), rhs.eval(x)),
            Self::Call { function, argument } => function.apply(argument.eval(x)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_apply() {
        assert_eq!(BinaryOp::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(BinaryOp::Sub.apply(2.0, 3.0), -1.0);
        assert_eq!(BinaryOp::Mul.apply(2.0, 3.0), 6.0);
        assert_eq!(BinaryOp::Div.apply(3.0, 2.0), 1.5);
        assert!((BinaryOp::Pow.apply(2.0, 10.0) - 1024.0).abs() < 1e-10);
    }

    #[test]
    fn test_binary_op_division_by_zero_is_total() {
        assert!(BinaryOp::Div.apply(1.0, 0.0).is_infinite());
        assert!(BinaryOp::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_math_function_from_name() {
        assert_eq!(MathFunction::from_name("sin"), Some(MathFunction::Sin));
        assert_eq!(MathFunction::from_name("log10"), Some(MathFunction::Log10));
        assert_eq!(MathFunction::from_name("arctanh"), None);
        assert_eq!(MathFunction::from_name("SIN"), None);
    }

    #[test]
    fn test_math_function_apply() {
        assert!((MathFunction::Sin.apply(0.0)).abs() < 1e-15);
        assert!((MathFunction::Ln.apply(std::f64::consts::E) - 1.0).abs() < 1e-15);
        assert!((MathFunction::Log10.apply(100.0) - 2.0).abs() < 1e-15);
        assert!((MathFunction::Sqrt.apply(9.0) - 3.0).abs() < 1e-15);
        assert!((MathFunction::Abs.apply(-3.5) - 3.5).abs() < 1e-15);
    }

    #[test]
    fn test_expr_eval() {
        // lam^2 - abs(lam)
        let expr = Expr::Binary {
            op: BinaryOp::Sub,
            lhs: Box::new(Expr::Binary {
                op: BinaryOp::Pow,
                lhs: Box::new(Expr::Variable),
                rhs: Box::new(Expr::Number(2.0)),
            }),
            rhs: Box::new(Expr::Call {
                function: MathFunction::Abs,
                argument: Box::new(Expr::Variable),
            }),
        };
        assert!((expr.eval(-3.0) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_expr_eval_negation() {
        let expr = Expr::Neg(Box::new(Expr::Variable));
        assert_eq!(expr.eval(4.0), -4.0);
    }
}
