//! Error types for formula parsing.

use std::fmt;

/// Result type for formula operations.
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Errors raised while parsing a formula.
///
/// Positions are byte offsets into the source string.
#[derive(Debug, Clone)]
pub enum FormulaError {
    /// The source contains a character sequence that is not a token.
    InvalidToken { text: String, position: usize },

    /// A well-formed token appeared where the grammar does not allow it.
    UnexpectedToken { found: String, position: usize },

    /// The source ended in the middle of an expression.
    UnexpectedEnd,

    /// A call names a function outside the fixed elementary set.
    UnknownFunction { name: String, position: usize },

    /// An identifier does not match the declared free variable.
    UnknownVariable {
        name: String,
        variable: String,
        position: usize,
    },

    /// Expression nesting exceeds the parser's depth cap.
    TooDeep { position: usize },
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { text, position } => {
                write!(f, "Invalid token '{}' at position {}", text, position)
            }
            Self::UnexpectedToken { found, position } => {
                write!(f, "Unexpected '{}' at position {}", found, position)
            }
            Self::UnexpectedEnd => {
                write!(f, "Formula ended unexpectedly")
            }
            Self::UnknownFunction { name, position } => {
                write!(f, "Unknown function '{}' at position {}", name, position)
            }
            Self::UnknownVariable {
                name,
                variable,
                position,
            } => {
                write!(
                    f,
                    "Unknown variable '{}' at position {}: the formula variable is '{}'",
                    name, position, variable
                )
            }
            Self::TooDeep { position } => {
                write!(f, "Formula nesting too deep at position {}", position)
            }
        }
    }
}

impl std::error::Error for FormulaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_variable() {
        let err = FormulaError::UnknownVariable {
            name: "x".to_string(),
            variable: "lam".to_string(),
            position: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("'x'"));
        assert!(msg.contains("'lam'"));
        assert!(msg.contains("position 4"));
    }

    #[test]
    fn test_display_unexpected_end() {
        let err = FormulaError::UnexpectedEnd;
        assert!(err.to_string().contains("ended unexpectedly"));
    }

    #[test]
    fn test_display_too_deep() {
        let err = FormulaError::TooDeep { position: 17 };
        let msg = err.to_string();
        assert!(msg.contains("nesting too deep"));
        assert!(msg.contains("position 17"));
    }
}
