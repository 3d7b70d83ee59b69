//! Splits expression text into tokens

use lazy_static::lazy_static;
use regex::Regex;

use super::ExpressionError;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    Int(i128),
    Real(f64),
    Str(String),
    Ident(String),
    /// `$clog2` and friends, without the dollar sign
    Function(String),
    Op(&'static str),
}

/// Operators and punctuation, longest first so that the first match is the longest one
const OPERATORS: [&str; 30] = [
    "<<<", ">>>", "**", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "+", "-", "*", "/", "%",
    "<", ">", "&", "^", "|", "~", "!", "?", ":", "(", ")", "{", "}", ",",
];

// Compile Regexes only once as recommended by the documentation of the Regex crate
lazy_static! {
    /// SystemVerilog based literal, e.g. `8'hFF`, `'b1010`, `'sd5`
    static ref BASED_INT_RE: Regex = Regex::new(
        r"(?x)
        ^([1-9][0-9_]*)?        # optional size (captured as #1)
        '[sS]?                  # apostrophe and optional sign specifier
        ([dDbBoOhH])            # base (captured as #2)
        ([0-9a-fA-F_]+)         # digits (captured as #3)
    ").unwrap();

    static ref REAL_RE: Regex = Regex::new(
        r"(?x)
        ^[0-9][0-9_]*
        (?:
            \.[0-9][0-9_]*(?:[eE][+-]?[0-9]+)?  # fraction with optional exponent
            | [eE][+-]?[0-9]+                   # exponent only
        )
    ").unwrap();

    static ref DEC_INT_RE: Regex = Regex::new(r"^[0-9][0-9_]*").unwrap();

    static ref IDENT_RE: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();

    static ref FUNCTION_RE: Regex = Regex::new(r"^\$([a-zA-Z_][a-zA-Z0-9_]*)").unwrap();

    static ref STRING_RE: Regex = Regex::new(r#"^"([^"]*)""#).unwrap();
}

/// Parse digits of a based literal, dropping digit separators
fn parse_based_digits(digits: &str, base: &str) -> Result<i128, ExpressionError> {
    let radix = match base {
        "b" | "B" => 2,
        "o" | "O" => 8,
        "h" | "H" => 16,
        _ => 10,
    };
    let digits = digits.replace('_', "");
    i128::from_str_radix(&digits, radix).map_err(|_| ExpressionError::InvalidLiteral(digits))
}

/// Truncate `value` to `size` bits, as a sized SystemVerilog literal does
fn truncate_to_size(value: i128, size: &str) -> Result<i128, ExpressionError> {
    let size: u32 = size
        .replace('_', "")
        .parse()
        .map_err(|_| ExpressionError::InvalidLiteral(size.to_owned()))?;
    if size >= 127 {
        return Ok(value);
    }
    Ok(value & ((1i128 << size) - 1))
}

pub(crate) fn tokenize(text: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = vec![];
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        let consumed = if let Some(caps) = BASED_INT_RE.captures(rest) {
            let mut value = parse_based_digits(&caps[3], &caps[2])?;
            if let Some(size) = caps.get(1) {
                value = truncate_to_size(value, size.as_str())?;
            }
            tokens.push(Token::Int(value));
            caps[0].len()
        } else if let Some(m) = REAL_RE.find(rest) {
            let value = m
                .as_str()
                .replace('_', "")
                .parse::<f64>()
                .map_err(|_| ExpressionError::InvalidLiteral(m.as_str().to_owned()))?;
            tokens.push(Token::Real(value));
            m.end()
        } else if let Some(m) = DEC_INT_RE.find(rest) {
            let value = m
                .as_str()
                .replace('_', "")
                .parse::<i128>()
                .map_err(|_| ExpressionError::InvalidLiteral(m.as_str().to_owned()))?;
            tokens.push(Token::Int(value));
            m.end()
        } else if let Some(m) = IDENT_RE.find(rest) {
            tokens.push(Token::Ident(m.as_str().to_owned()));
            m.end()
        } else if let Some(caps) = FUNCTION_RE.captures(rest) {
            tokens.push(Token::Function(caps[1].to_owned()));
            caps[0].len()
        } else if let Some(caps) = STRING_RE.captures(rest) {
            tokens.push(Token::Str(caps[1].to_owned()));
            caps[0].len()
        } else if let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) {
            tokens.push(Token::Op(*op));
            op.len()
        } else {
            let c = rest.chars().next().unwrap_or_default();
            return Err(ExpressionError::UnexpectedCharacter(c));
        };

        rest = rest[consumed..].trim_start();
    }

    Ok(tokens)
}

/// Returns true if `text` is a single literal, optionally negated, with nothing to evaluate
pub(crate) fn is_plain_value(text: &str) -> bool {
    match tokenize(text).as_deref() {
        Ok([Token::Int(_) | Token::Real(_) | Token::Str(_)]) => true,
        Ok([Token::Op("-"), Token::Int(_) | Token::Real(_)]) => true,
        _ => false,
    }
}

#[test]
fn tokenize_literals_works() {
    assert_eq!(tokenize("42"), Ok(vec![Token::Int(42)]));
    assert_eq!(tokenize("1_000"), Ok(vec![Token::Int(1000)]));
    assert_eq!(tokenize("8'hFF"), Ok(vec![Token::Int(255)]));
    assert_eq!(tokenize("4'hFF"), Ok(vec![Token::Int(15)]));
    assert_eq!(tokenize("'b101"), Ok(vec![Token::Int(5)]));
    assert_eq!(tokenize("'sd5"), Ok(vec![Token::Int(5)]));
    assert_eq!(tokenize("'o17"), Ok(vec![Token::Int(15)]));
    assert_eq!(tokenize("2.5"), Ok(vec![Token::Real(2.5)]));
    assert_eq!(tokenize("1e3"), Ok(vec![Token::Real(1000.0)]));
    assert_eq!(
        tokenize("\"text\""),
        Ok(vec![Token::Str("text".to_owned())])
    );
}

#[test]
fn tokenize_operators_takes_longest_match() {
    assert_eq!(
        tokenize("a<=b**2"),
        Ok(vec![
            Token::Ident("a".to_owned()),
            Token::Op("<="),
            Token::Ident("b".to_owned()),
            Token::Op("**"),
            Token::Int(2),
        ])
    );
    assert_eq!(
        tokenize("$clog2(8)"),
        Ok(vec![
            Token::Function("clog2".to_owned()),
            Token::Op("("),
            Token::Int(8),
            Token::Op(")"),
        ])
    );
}

#[test]
fn tokenize_rejects_garbage() {
    assert_eq!(
        tokenize("4 # 2"),
        Err(ExpressionError::UnexpectedCharacter('#'))
    );
    assert!(tokenize("'b102").is_err());
}

#[test]
fn is_plain_value_works() {
    assert!(is_plain_value("8"));
    assert!(is_plain_value("-8"));
    assert!(is_plain_value("'hFF"));
    assert!(is_plain_value("\"text\""));
    assert!(!is_plain_value("4-3"));
    assert!(!is_plain_value("param"));
    assert!(!is_plain_value(""));
}
