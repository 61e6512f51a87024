//! Recursive-descent parser for formula source text.

use logos::Logos;

use super::ast::{BinaryOp, Expr, MathFunction};
use super::error::{FormulaError, FormulaResult};
use super::token::Token;

/// Parse `source` into an expression over the free variable `variable`.
///
/// Grammar, loosest to tightest binding:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := unary (('*' | '/') unary)*
/// unary      := '-' unary | power
/// power      := primary ('^' unary)?
/// primary    := number | ident '(' expression ')' | ident | '(' expression ')'
/// ```
///
/// `+ - * /` associate left; `^` associates right and binds tighter than a
/// leading minus, so `-x^2` is `-(x^2)` and `1/x*x` is `(1/x)*x`. Nesting
/// deeper than `MAX_DEPTH` is rejected as `TooDeep` instead of recursing
/// further.
pub(crate) fn parse(source: &str, variable: &str) -> FormulaResult<Expr> {
    let tokens = lex(source)?;
    let mut parser = Parser {
        tokens,
        cursor: 0,
        depth: 0,
        variable,
    };
    let expr = parser.expression()?;
    parser.finish()?;
    Ok(expr)
}

/// Tokenize the whole source, pairing each token with its byte offset.
fn lex(source: &str) -> FormulaResult<Vec<(Token, usize)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(item) = lexer.next() {
        match item {
            Ok(token) => tokens.push((token, lexer.span().start)),
            Err(()) => {
                return Err(FormulaError::InvalidToken {
                    text: lexer.slice().to_string(),
                    position: lexer.span().start,
                });
            }
        }
    }
    Ok(tokens)
}

/// Nesting-depth cap for the recursive-descent walk.
///
/// A long run of nested parentheses or unary minuses would otherwise recurse
/// without bound and overflow the stack; past the cap the parser returns
/// `TooDeep`. The cap also bounds the depth of the finished tree, keeping
/// the recursive `Expr::eval` (and the boxed tree's drop) shallow.
const MAX_DEPTH: usize = 256;

struct Parser<'a> {
    tokens: Vec<(Token, usize)>,
    cursor: usize,
    depth: usize,
    variable: &'a str,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor).map(|(token, _)| token)
    }

    fn advance(&mut self) -> Option<(Token, usize)> {
        let item = self.tokens.get(self.cursor).cloned();
        if item.is_some() {
            self.cursor += 1;
        }
        item
    }

    /// Byte offset of the token at the cursor, or of the last token once the
    /// input is exhausted.
    fn position(&self) -> usize {
        self.tokens
            .get(self.cursor)
            .or_else(|| self.tokens.last())
            .map(|(_, position)| *position)
            .unwrap_or(0)
    }

    fn descend(&mut self) -> FormulaResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(FormulaError::TooDeep {
                position: self.position(),
            });
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Require that every token was consumed.
    fn finish(&self) -> FormulaResult<()> {
        match self.tokens.get(self.cursor) {
            None => Ok(()),
            Some((token, position)) => Err(FormulaError::UnexpectedToken {
                found: token.to_string(),
                position: *position,
            }),
        }
    }

    fn expression(&mut self) -> FormulaResult<Expr> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> FormulaResult<Expr> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.advance();
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> FormulaResult<Expr> {
        self.descend()?;
        let expr = if matches!(self.peek(), Some(Token::Minus)) {
            self.advance();
            Expr::Neg(Box::new(self.unary()?))
        } else {
            self.power()?
        };
        self.ascend();
        Ok(expr)
    }

    // The exponent re-enters `unary`: '^' associates right and accepts a
    // signed exponent
    fn power(&mut self) -> FormulaResult<Expr> {
        let base = self.primary()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.advance();
            let exponent = self.unary()?;
            return Ok(Expr::Binary {
                op: BinaryOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            });
        }
        Ok(base)
    }

    fn primary(&mut self) -> FormulaResult<Expr> {
        self.descend()?;
        let expr = match self.advance() {
            Some((Token::Number(value), _)) => Ok(Expr::Number(value)),
            Some((Token::Ident(name), position)) => {
                if matches!(self.peek(), Some(Token::LParen)) {
                    let function = MathFunction::from_name(&name).ok_or_else(|| {
                        FormulaError::UnknownFunction {
                            name: name.clone(),
                            position,
                        }
                    })?;
                    self.advance();
                    let argument = self.expression()?;
                    self.expect_rparen()?;
                    Ok(Expr::Call {
                        function,
                        argument: Box::new(argument),
                    })
                } else if name == self.variable {
                    Ok(Expr::Variable)
                } else {
                    Err(FormulaError::UnknownVariable {
                        name,
                        variable: self.variable.to_string(),
                        position,
                    })
                }
            }
            Some((Token::LParen, _)) => {
                let inner = self.expression()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            Some((token, position)) => Err(FormulaError::UnexpectedToken {
                found: token.to_string(),
                position,
            }),
            None => Err(FormulaError::UnexpectedEnd),
        };
        self.ascend();
        expr
    }

    fn expect_rparen(&mut self) -> FormulaResult<()> {
        match self.advance() {
            Some((Token::RParen, _)) => Ok(()),
            Some((token, position)) => Err(FormulaError::UnexpectedToken {
                found: token.to_string(),
                position,
            }),
            None => Err(FormulaError::UnexpectedEnd),
        }
    }
}
