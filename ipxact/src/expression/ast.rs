//! Pratt parser turning tokens into an expression tree

use super::{lexer::Token, ExpressionError, Value};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Expr {
    Literal(Value),
    Symbol(String),
    Unary(&'static str, Box<Expr>),
    Binary(&'static str, Box<Expr>, Box<Expr>),
    Ternary(Box<Expr>, Box<Expr>, Box<Expr>),
    Array(Vec<Expr>),
    Call(String, Vec<Expr>),
}

/// Binding power of binary operators as (left, right), following SystemVerilog precedence
fn infix_binding_power(op: &str) -> Option<(u8, u8)> {
    let bp = match op {
        "||" => (3, 4),
        "&&" => (5, 6),
        "|" => (7, 8),
        "^" => (9, 10),
        "&" => (11, 12),
        "==" | "!=" => (13, 14),
        "<" | "<=" | ">" | ">=" => (15, 16),
        "<<" | ">>" | "<<<" | ">>>" => (17, 18),
        "+" | "-" => (19, 20),
        "*" | "/" | "%" => (21, 22),
        // Right associative
        "**" => (24, 23),
        _ => return None,
    };
    Some(bp)
}

const TERNARY_BP: u8 = 2;
const PREFIX_BP: u8 = 25;

/// Most levels of subexpressions and operator applications in one expression. Keeps the recursion
/// of parsing and evaluation bounded.
pub(crate) const MAX_NESTING: usize = 128;

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse the whole token stream into one expression
    pub(crate) fn parse(mut self) -> Result<Expr, ExpressionError> {
        if self.tokens.is_empty() {
            return Err(ExpressionError::Empty);
        }
        let expr = self.expr(0)?;
        match self.peek() {
            None => Ok(expr),
            Some(tok) => Err(ExpressionError::UnexpectedToken(format!("{tok:?}"))),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        tok
    }

    fn descend(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(ExpressionError::TooDeep(MAX_NESTING));
        }
        Ok(())
    }

    fn expect_op(&mut self, op: &'static str) -> Result<(), ExpressionError> {
        match self.next() {
            Some(Token::Op(found)) if found == op => Ok(()),
            Some(tok) => Err(ExpressionError::UnexpectedToken(format!("{tok:?}"))),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    /// Comma separated expressions up to the closing `close`
    fn list(&mut self, close: &'static str) -> Result<Vec<Expr>, ExpressionError> {
        let mut items = vec![];
        if self.peek() == Some(&Token::Op(close)) {
            self.pos += 1;
            return Ok(items);
        }
        loop {
            items.push(self.expr(0)?);
            match self.next() {
                Some(Token::Op(",")) => continue,
                Some(Token::Op(op)) if op == close => return Ok(items),
                Some(tok) => return Err(ExpressionError::UnexpectedToken(format!("{tok:?}"))),
                None => return Err(ExpressionError::UnexpectedEnd),
            }
        }
    }

    fn primary(&mut self) -> Result<Expr, ExpressionError> {
        let tok = self.next().ok_or(ExpressionError::UnexpectedEnd)?;
        let expr = match tok {
            Token::Int(v) => Expr::Literal(Value::Int(v)),
            Token::Real(v) => Expr::Literal(Value::Real(v)),
            Token::Str(s) => Expr::Literal(Value::Str(s)),
            Token::Ident(name) => match name.as_str() {
                "true" => Expr::Literal(Value::Int(1)),
                "false" => Expr::Literal(Value::Int(0)),
                _ => Expr::Symbol(name),
            },
            Token::Function(name) => {
                self.expect_op("(")?;
                Expr::Call(name, self.list(")")?)
            }
            Token::Op("(") => {
                let inner = self.expr(0)?;
                self.expect_op(")")?;
                inner
            }
            Token::Op("{") => Expr::Array(self.list("}")?),
            Token::Op(op @ ("-" | "+" | "~" | "!")) => {
                Expr::Unary(op, Box::new(self.expr(PREFIX_BP)?))
            }
            tok => return Err(ExpressionError::UnexpectedToken(format!("{tok:?}"))),
        };
        Ok(expr)
    }

    fn expr(&mut self, min_bp: u8) -> Result<Expr, ExpressionError> {
        let outer = self.depth;
        let expr = self.nested_expr(min_bp);
        self.depth = outer;
        expr
    }

    /// Every operator application counts as one more level, as it nests the expression parsed so
    /// far one level deeper in the tree
    fn nested_expr(&mut self, min_bp: u8) -> Result<Expr, ExpressionError> {
        self.descend()?;
        let mut lhs = self.primary()?;

        loop {
            let op = match self.peek() {
                Some(Token::Op(op)) => *op,
                Some(tok) => return Err(ExpressionError::UnexpectedToken(format!("{tok:?}"))),
                None => break,
            };

            if op == "?" {
                if TERNARY_BP < min_bp {
                    break;
                }
                self.pos += 1;
                self.descend()?;
                let then = self.expr(0)?;
                self.expect_op(":")?;
                let otherwise = self.expr(TERNARY_BP)?;
                lhs = Expr::Ternary(Box::new(lhs), Box::new(then), Box::new(otherwise));
                continue;
            }

            let Some((l_bp, r_bp)) = infix_binding_power(op) else {
                // `)`, `}`, `,` and `:` end the current subexpression
                break;
            };
            if l_bp < min_bp {
                break;
            }
            self.pos += 1;
            self.descend()?;
            let rhs = self.expr(r_bp)?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }

        Ok(lhs)
    }
}

#[cfg(test)]
fn parse(text: &str) -> Result<Expr, ExpressionError> {
    Parser::new(super::lexer::tokenize(text)?).parse()
}

#[test]
fn precedence_works() {
    use Expr::*;
    assert_eq!(
        parse("1+2*3"),
        Ok(Binary(
            "+",
            Box::new(Literal(Value::Int(1))),
            Box::new(Binary(
                "*",
                Box::new(Literal(Value::Int(2))),
                Box::new(Literal(Value::Int(3)))
            ))
        ))
    );
    assert_eq!(
        parse("2**3**2"),
        Ok(Binary(
            "**",
            Box::new(Literal(Value::Int(2))),
            Box::new(Binary(
                "**",
                Box::new(Literal(Value::Int(3))),
                Box::new(Literal(Value::Int(2)))
            ))
        ))
    );
}

#[test]
fn malformed_input_is_an_error() {
    assert_eq!(parse("2+"), Err(ExpressionError::UnexpectedEnd));
    assert!(parse("(1").is_err());
    assert!(parse("1 2").is_err());
    assert!(parse("2+^^^^").is_err());
    assert!(parse("1 ? 2").is_err());
    assert_eq!(parse(""), Err(ExpressionError::Empty));
}

#[test]
fn nesting_is_limited() {
    let nested = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert!(parse(&nested(MAX_NESTING / 2)).is_ok());
    assert_eq!(
        parse(&nested(500)),
        Err(ExpressionError::TooDeep(MAX_NESTING))
    );
    assert_eq!(
        parse(&"-".repeat(10_000)),
        Err(ExpressionError::TooDeep(MAX_NESTING))
    );

    let long_sum = vec!["1"; 10_000].join("+");
    assert_eq!(parse(&long_sum), Err(ExpressionError::TooDeep(MAX_NESTING)));
}
