//! Evaluation of IP-XACT expressions
//!
//! IP-XACT uses a SystemVerilog-like expression language for values, widths, offsets and
//! presence conditions. Symbols in the expressions are parameter identifiers, which are resolved
//! through a [`ParameterFinder`].

mod ast;
mod lexer;

use std::fmt;

use thiserror::Error;

use crate::parameter_finder::ParameterFinder;
use ast::{Expr, Parser};

/// Parameters may reference each other. A reference chain longer than this is considered
/// circular.
const MAX_REFERENCE_DEPTH: usize = 32;

/// Result of evaluating an expression
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i128),
    Real(f64),
    Str(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Real(_) => "real",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
        }
    }

    fn is_true(&self) -> Result<bool, ExpressionError> {
        match self {
            Value::Int(v) => Ok(*v != 0),
            Value::Real(v) => Ok(*v != 0.0),
            other => Err(ExpressionError::TypeMismatch(other.kind())),
        }
    }

    fn as_real(&self) -> Result<f64, ExpressionError> {
        match self {
            Value::Int(v) => Ok(*v as f64),
            Value::Real(v) => Ok(*v),
            other => Err(ExpressionError::TypeMismatch(other.kind())),
        }
    }

    fn as_integral(&self) -> Result<i128, ExpressionError> {
        match self {
            Value::Int(v) => Ok(*v),
            other => Err(ExpressionError::TypeMismatch(other.kind())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Array(items) => {
                write!(f, "{{")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx != 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Reason an expression could not be evaluated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    #[error("invalid literal {0:?}")]
    InvalidLiteral(String),
    #[error("unexpected token {0}")]
    UnexpectedToken(String),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unknown symbol {0:?}")]
    UnknownSymbol(String),
    #[error("reference to {0:?} is circular")]
    CircularReference(String),
    #[error("unknown function ${0}")]
    UnknownFunction(String),
    #[error("function ${name} takes {expected} argument(s), {found} given")]
    ArgumentCount {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("operand of type {0} is not supported here")]
    TypeMismatch(&'static str),
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
    #[error("{0} is outside the domain of ${1}")]
    Domain(String, &'static str),
    #[error("expression is nested deeper than {0} levels")]
    TooDeep(usize),
}

/// Evaluates IP-XACT expressions
pub trait ExpressionParser {
    /// Evaluate `text`
    fn parse_expression(&self, text: &str) -> Result<Value, ExpressionError>;

    /// Returns true if `text` is empty or evaluates without errors
    fn is_valid_expression(&self, text: &str) -> bool {
        text.trim().is_empty() || self.parse_expression(text).is_ok()
    }

    /// Returns true if `text` is a literal that needs no evaluation
    fn is_plain_value(&self, text: &str) -> bool {
        lexer::is_plain_value(text)
    }

    /// Evaluate `text`, which must result in an integer
    fn parse_int(&self, text: &str) -> Result<i128, ExpressionError> {
        self.parse_expression(text)?.as_integral()
    }
}

/// Returns true if an element with the `isPresent` expression `text` is present
///
/// An empty expression means the element is always present.
pub fn is_present(text: &str, parser: &dyn ExpressionParser) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    matches!(parser.parse_expression(text), Ok(Value::Int(v)) if v != 0)
}

/// Expression parser without any symbols. Every identifier is an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemVerilogParser;

impl ExpressionParser for SystemVerilogParser {
    fn parse_expression(&self, text: &str) -> Result<Value, ExpressionError> {
        evaluate_text(text, &|_| None, 0)
    }
}

/// Expression parser resolving identifiers as parameter IDs through a [`ParameterFinder`]
#[derive(Clone, Copy)]
pub struct IpxactParser<'a> {
    finder: &'a dyn ParameterFinder,
}

impl<'a> IpxactParser<'a> {
    pub fn new(finder: &'a dyn ParameterFinder) -> Self {
        Self { finder }
    }
}

impl<'a> ExpressionParser for IpxactParser<'a> {
    fn parse_expression(&self, text: &str) -> Result<Value, ExpressionError> {
        evaluate_text(text, &|id| self.finder.value_for_id(id), 0)
    }
}

type Resolver<'r> = dyn Fn(&str) -> Option<String> + 'r;

fn evaluate_text(text: &str, resolve: &Resolver<'_>, depth: usize) -> Result<Value, ExpressionError> {
    let tokens = lexer::tokenize(text)?;
    let expr = Parser::new(tokens).parse()?;
    Evaluator { resolve, depth }.eval(&expr)
}

struct Evaluator<'r, 'f> {
    resolve: &'r Resolver<'f>,
    depth: usize,
}

impl<'r, 'f> Evaluator<'r, 'f> {
    fn eval(&self, expr: &Expr) -> Result<Value, ExpressionError> {
        match expr {
            Expr::Literal(v) => Ok(v.clone()),
            Expr::Symbol(name) => self.symbol(name),
            Expr::Unary(op, operand) => unary(op, self.eval(operand)?),
            Expr::Binary(op, lhs, rhs) => match *op {
                // Short circuit
                "&&" => {
                    if !self.eval(lhs)?.is_true()? {
                        return Ok(Value::Int(0));
                    }
                    Ok(Value::Int(self.eval(rhs)?.is_true()? as i128))
                }
                "||" => {
                    if self.eval(lhs)?.is_true()? {
                        return Ok(Value::Int(1));
                    }
                    Ok(Value::Int(self.eval(rhs)?.is_true()? as i128))
                }
                _ => binary(op, self.eval(lhs)?, self.eval(rhs)?),
            },
            Expr::Ternary(cond, then, otherwise) => {
                if self.eval(cond)?.is_true()? {
                    self.eval(then)
                } else {
                    self.eval(otherwise)
                }
            }
            Expr::Array(items) => Ok(Value::Array(
                items
                    .iter()
                    .map(|item| self.eval(item))
                    .collect::<Result<_, _>>()?,
            )),
            Expr::Call(name, args) => {
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                call(name, &args)
            }
        }
    }

    fn symbol(&self, name: &str) -> Result<Value, ExpressionError> {
        let text = (self.resolve)(name)
            .ok_or_else(|| ExpressionError::UnknownSymbol(name.to_owned()))?;
        if self.depth >= MAX_REFERENCE_DEPTH {
            return Err(ExpressionError::CircularReference(name.to_owned()));
        }
        evaluate_text(&text, self.resolve, self.depth + 1)
    }
}

fn unary(op: &str, value: Value) -> Result<Value, ExpressionError> {
    match (op, value) {
        ("+", v @ (Value::Int(_) | Value::Real(_))) => Ok(v),
        ("-", Value::Int(v)) => v.checked_neg().map(Value::Int).ok_or(ExpressionError::Overflow),
        ("-", Value::Real(v)) => Ok(Value::Real(-v)),
        ("~", Value::Int(v)) => Ok(Value::Int(!v)),
        ("!", v) => Ok(Value::Int(!v.is_true()? as i128)),
        (_, v) => Err(ExpressionError::TypeMismatch(v.kind())),
    }
}

fn int_pow(base: i128, exp: i128) -> Result<Value, ExpressionError> {
    if exp < 0 {
        return Ok(Value::Real((base as f64).powf(exp as f64)));
    }
    let exp = u32::try_from(exp).map_err(|_| ExpressionError::Overflow)?;
    base.checked_pow(exp)
        .map(Value::Int)
        .ok_or(ExpressionError::Overflow)
}

fn shift(op: &str, value: i128, amount: i128) -> Result<Value, ExpressionError> {
    if amount < 0 {
        return Err(ExpressionError::Domain(amount.to_string(), "shift"));
    }
    if amount >= 127 {
        return match op {
            "<<" | "<<<" if value != 0 => Err(ExpressionError::Overflow),
            ">>>" if value < 0 => Ok(Value::Int(-1)),
            _ => Ok(Value::Int(0)),
        };
    }
    let result = match op {
        "<<" | "<<<" => value
            .checked_mul(1i128 << amount)
            .ok_or(ExpressionError::Overflow)?,
        // Arithmetic shift keeps the sign
        ">>>" => value >> amount,
        _ => ((value as u128) >> amount) as i128,
    };
    Ok(Value::Int(result))
}

fn compare(op: &str, lhs: &Value, rhs: &Value) -> Result<bool, ExpressionError> {
    use std::cmp::Ordering;

    let ordering = match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        (Value::Array(_), Value::Array(_)) if matches!(op, "==" | "!=") => {
            return Ok((lhs == rhs) == (op == "=="));
        }
        (a, b) => a
            .as_real()?
            .partial_cmp(&b.as_real()?)
            .ok_or(ExpressionError::TypeMismatch("real"))?,
    };
    Ok(match op {
        "==" => ordering == Ordering::Equal,
        "!=" => ordering != Ordering::Equal,
        "<" => ordering == Ordering::Less,
        "<=" => ordering != Ordering::Greater,
        ">" => ordering == Ordering::Greater,
        ">=" => ordering != Ordering::Less,
        _ => unreachable!("only called for comparison operators"),
    })
}

fn binary(op: &str, lhs: Value, rhs: Value) -> Result<Value, ExpressionError> {
    match op {
        "==" | "!=" | "<" | "<=" | ">" | ">=" => {
            return Ok(Value::Int(compare(op, &lhs, &rhs)? as i128))
        }
        "&" | "|" | "^" => {
            let (a, b) = (lhs.as_integral()?, rhs.as_integral()?);
            let result = match op {
                "&" => a & b,
                "|" => a | b,
                _ => a ^ b,
            };
            return Ok(Value::Int(result));
        }
        "<<" | ">>" | "<<<" | ">>>" => return shift(op, lhs.as_integral()?, rhs.as_integral()?),
        _ => {}
    }

    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => {
            let result = match op {
                "+" => a.checked_add(b),
                "-" => a.checked_sub(b),
                "*" => a.checked_mul(b),
                "/" if b == 0 => return Err(ExpressionError::DivisionByZero),
                "/" => a.checked_div(b),
                "%" if b == 0 => return Err(ExpressionError::DivisionByZero),
                "%" => a.checked_rem(b),
                "**" => return int_pow(a, b),
                _ => unreachable!("parser only produces known operators"),
            };
            result.map(Value::Int).ok_or(ExpressionError::Overflow)
        }
        (a, b) => {
            let (a, b) = (a.as_real()?, b.as_real()?);
            let result = match op {
                "+" => a + b,
                "-" => a - b,
                "*" => a * b,
                "/" | "%" if b == 0.0 => return Err(ExpressionError::DivisionByZero),
                "/" => a / b,
                "%" => a % b,
                "**" => a.powf(b),
                _ => unreachable!("parser only produces known operators"),
            };
            Ok(Value::Real(result))
        }
    }
}

fn clog2(value: i128) -> Result<Value, ExpressionError> {
    if value < 0 {
        return Err(ExpressionError::Domain(value.to_string(), "clog2"));
    }
    if value <= 1 {
        return Ok(Value::Int(0));
    }
    Ok(Value::Int(128 - (value - 1).leading_zeros() as i128))
}

fn call(name: &str, args: &[Value]) -> Result<Value, ExpressionError> {
    let expected = match name {
        "clog2" | "sqrt" | "exp" => 1,
        "pow" => 2,
        _ => return Err(ExpressionError::UnknownFunction(name.to_owned())),
    };
    if args.len() != expected {
        return Err(ExpressionError::ArgumentCount {
            name: name.to_owned(),
            expected,
            found: args.len(),
        });
    }

    match name {
        "clog2" => match &args[0] {
            Value::Int(v) => clog2(*v),
            Value::Real(v) => clog2(v.ceil() as i128),
            other => Err(ExpressionError::TypeMismatch(other.kind())),
        },
        "pow" => binary("**", args[0].clone(), args[1].clone()),
        "sqrt" => {
            let v = args[0].as_real()?;
            if v < 0.0 {
                return Err(ExpressionError::Domain(v.to_string(), "sqrt"));
            }
            Ok(Value::Real(v.sqrt()))
        }
        _ => Ok(Value::Real(args[0].as_real()?.exp())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::Parameter, parameter_finder::ListParameterFinder};

    fn eval(text: &str) -> Result<Value, ExpressionError> {
        SystemVerilogParser.parse_expression(text)
    }

    #[test]
    fn arithmetic_works() {
        assert_eq!(eval("4-3"), Ok(Value::Int(1)));
        assert_eq!(eval("2*4"), Ok(Value::Int(8)));
        assert_eq!(eval("14-5*3"), Ok(Value::Int(-1)));
        assert_eq!(eval("(1+2)*3"), Ok(Value::Int(9)));
        assert_eq!(eval("7/2"), Ok(Value::Int(3)));
        assert_eq!(eval("7%4"), Ok(Value::Int(3)));
        assert_eq!(eval("2**10"), Ok(Value::Int(1024)));
        assert_eq!(eval("1.5*2"), Ok(Value::Real(3.0)));
        assert_eq!(eval("8'hFF + 1"), Ok(Value::Int(256)));
        assert_eq!(eval("-'b11"), Ok(Value::Int(-3)));
    }

    #[test]
    fn logic_and_comparison_work() {
        assert_eq!(eval("1 < 2"), Ok(Value::Int(1)));
        assert_eq!(eval("2 <= 1"), Ok(Value::Int(0)));
        assert_eq!(eval("1 == 1 && 2 != 2"), Ok(Value::Int(0)));
        assert_eq!(eval("0 || 3"), Ok(Value::Int(1)));
        assert_eq!(eval("!0"), Ok(Value::Int(1)));
        assert_eq!(eval("true"), Ok(Value::Int(1)));
        assert_eq!(eval("false ? 4 : 5"), Ok(Value::Int(5)));
        assert_eq!(eval("1 ? 0 ? 2 : 3 : 4"), Ok(Value::Int(3)));
        assert_eq!(eval("\"a\" == \"a\""), Ok(Value::Int(1)));
    }

    #[test]
    fn bit_operations_work() {
        assert_eq!(eval("'b1100 & 'b1010"), Ok(Value::Int(0b1000)));
        assert_eq!(eval("'b1100 | 'b1010"), Ok(Value::Int(0b1110)));
        assert_eq!(eval("'b1100 ^ 'b1010"), Ok(Value::Int(0b0110)));
        assert_eq!(eval("1 << 4"), Ok(Value::Int(16)));
        assert_eq!(eval("32 >> 2"), Ok(Value::Int(8)));
        assert_eq!(eval("~0"), Ok(Value::Int(-1)));
    }

    #[test]
    fn functions_work() {
        assert_eq!(eval("$clog2(1)"), Ok(Value::Int(0)));
        assert_eq!(eval("$clog2(8)"), Ok(Value::Int(3)));
        assert_eq!(eval("$clog2(9)"), Ok(Value::Int(4)));
        assert_eq!(eval("$pow(2, 3)"), Ok(Value::Int(8)));
        assert_eq!(eval("$sqrt(16)"), Ok(Value::Real(4.0)));
        assert_eq!(eval("$exp(0)"), Ok(Value::Real(1.0)));
        assert!(matches!(
            eval("$pow(2)"),
            Err(ExpressionError::ArgumentCount { .. })
        ));
        assert_eq!(
            eval("$foo(1)"),
            Err(ExpressionError::UnknownFunction("foo".to_owned()))
        );
    }

    #[test]
    fn arrays_work() {
        assert_eq!(
            eval("{1, 1+1, \"x\"}"),
            Ok(Value::Array(vec![
                Value::Int(1),
                Value::Int(2),
                Value::Str("x".to_owned())
            ]))
        );
        assert_eq!(eval("{1,2}").map(|v| v.to_string()), Ok("{1,2}".to_owned()));
        assert!(eval("{1,2} + 1").is_err());
    }

    #[test]
    fn errors_do_not_panic() {
        assert_eq!(eval("1/0"), Err(ExpressionError::DivisionByZero));
        assert_eq!(eval("1%0"), Err(ExpressionError::DivisionByZero));
        assert_eq!(eval("1.0/0"), Err(ExpressionError::DivisionByZero));
        assert_eq!(
            eval("Six"),
            Err(ExpressionError::UnknownSymbol("Six".to_owned()))
        );
        assert_eq!(eval("2**200"), Err(ExpressionError::Overflow));
        assert!(eval("alabama-man").is_err());
        assert!(eval("\"a\" + 1").is_err());
        assert!(eval("$sqrt(-1)").is_err());
    }

    #[test]
    fn is_valid_expression_accepts_empty() {
        let parser = SystemVerilogParser;
        assert!(parser.is_valid_expression(""));
        assert!(parser.is_valid_expression("  "));
        assert!(parser.is_valid_expression("4-3"));
        assert!(!parser.is_valid_expression("2+^^^^"));
        assert_eq!(parser.parse_expression(""), Err(ExpressionError::Empty));
    }

    #[test]
    fn deeply_nested_expression_is_invalid() {
        let parser = SystemVerilogParser;
        let nested = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
        assert!(parser.is_valid_expression(&nested(30)));
        assert!(!parser.is_valid_expression(&nested(500)));
        assert!(matches!(
            parser.parse_expression(&nested(100_000)),
            Err(ExpressionError::TooDeep(_))
        ));
    }

    #[test]
    fn is_present_works() {
        let parser = SystemVerilogParser;
        assert!(is_present("", &parser));
        assert!(is_present("4-3", &parser));
        assert!(!is_present("4-4", &parser));
        assert!(!is_present("broken+", &parser));
        assert!(!is_present("1.5", &parser));
    }

    #[test]
    fn symbols_resolve_through_finder() {
        let params = vec![
            Parameter::new("width", "8").with_id("id_width"),
            Parameter::new("depth", "id_width*2").with_id("id_depth"),
            Parameter::new("loop", "id_loop+1").with_id("id_loop"),
        ];
        let finder = ListParameterFinder::new(&params);
        let parser = IpxactParser::new(&finder);

        assert_eq!(parser.parse_expression("id_depth+1"), Ok(Value::Int(17)));
        assert_eq!(parser.parse_int("$clog2(id_width)"), Ok(3));
        assert_eq!(
            parser.parse_expression("id_loop"),
            Err(ExpressionError::CircularReference("id_loop".to_owned()))
        );
        assert_eq!(
            parser.parse_expression("width"),
            Err(ExpressionError::UnknownSymbol("width".to_owned()))
        );
    }
}
