use std::{fmt, ops};

use thiserror::Error;

/// Document level failure: the input could not be turned into a model at all
///
/// Element level problems are never reported through this type. Readers are permissive and leave
/// judging the content to the validators.
#[derive(Error, Debug)]
pub enum Error {
    #[error("error while parsing IP-XACT")]
    Parse(#[from] ParseFileError<ParseError>),
    #[error("error while reading input")]
    Io(#[from] std::io::Error),
    #[error("error while writing IP-XACT")]
    Write(#[from] WriteError),
}

/// Error that happened while parsing an IP-XACT document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed XML: {0}")]
    Xml(roxmltree::Error),
    #[error("unsupported root element {0:?}, expected one of \"busDefinition\", \"component\", \"design\"")]
    UnsupportedRoot(String),
}

impl ParseError {
    /// Convert a `roxmltree` error into a positional error, taking the position from the error
    pub(crate) fn from_xml(err: roxmltree::Error) -> PositionalError<ParseError> {
        let pos = err.pos();
        ParseError::Xml(err).with_text_pos_range(pos..pos)
    }

    /// Convert into positional error, adding row and column information
    pub(crate) fn with_text_pos_range(
        self,
        pos: ops::Range<roxmltree::TextPos>,
    ) -> PositionalError<ParseError> {
        PositionalError {
            pos: pos.into(),
            err: self,
        }
    }

    pub(crate) fn with_byte_pos_range(
        self,
        byte_pos: ops::Range<usize>,
        doc: &roxmltree::Document,
    ) -> PositionalError<ParseError> {
        let text_pos = ops::Range {
            start: doc.text_pos_at(byte_pos.start),
            end: doc.text_pos_at(byte_pos.end),
        };
        self.with_text_pos_range(text_pos)
    }
}

/// Error that happened while serializing a model into XML
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("XML writer failed")]
    Xml(#[from] quick_xml::Error),
    #[error("writer produced invalid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Error, Debug)]
#[error("IP-XACT parse error --> {fname}:{err}")]
pub struct ParseFileError<T> {
    fname: String,
    err: PositionalError<T>,
}

impl<T> ParseFileError<T> {
    pub fn inner(&self) -> &T {
        &self.err.err
    }

    pub fn position(&self) -> &Position {
        &self.err.pos
    }
}

/// Representation of a file position in an error
///
/// Indexes start from 1:1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Position {
    Point {
        line: u32,
        col: u32,
    },
    Line {
        line: u32,
        start_col: u32,
        end_col: u32,
    },
    MultiLine {
        start_line: u32,
        start_col: u32,
        end_line: u32,
        end_col: u32,
    },
}

impl From<ops::Range<roxmltree::TextPos>> for Position {
    fn from(value: ops::Range<roxmltree::TextPos>) -> Self {
        if value.start.row != value.end.row {
            return Position::MultiLine {
                start_line: value.start.row,
                start_col: value.start.col,
                end_line: value.end.row,
                end_col: value.end.col,
            };
        }
        if value.start.col == value.end.col {
            Position::Point {
                line: value.start.row,
                col: value.start.col,
            }
        } else {
            Position::Line {
                line: value.start.row,
                start_col: value.start.col,
                end_col: value.end.col,
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Point { line, col } => write!(f, "{line}:{col}"),
            Position::Line {
                line,
                start_col,
                end_col,
            } => write!(f, "{line}:{start_col}-{end_col}"),
            Position::MultiLine {
                start_line,
                start_col,
                end_line,
                end_col,
            } => write!(f, "{start_line}:{start_col}..{end_line}:{end_col}"),
        }
    }
}

#[derive(Error, Debug)]
#[error("{pos}\n{err}")]
pub struct PositionalError<T> {
    pos: Position,
    err: T,
}

impl<T> PositionalError<T> {
    pub(crate) fn with_fname(self, fname: String) -> ParseFileError<T> {
        ParseFileError { fname, err: self }
    }

    pub fn inner(&self) -> &T {
        &self.err
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }
}

#[test]
fn position_from_text_pos_range_works() {
    let point = roxmltree::TextPos::new(3, 7);
    assert_eq!(
        Position::from(point..point),
        Position::Point { line: 3, col: 7 }
    );
    assert_eq!(
        Position::from(point..roxmltree::TextPos::new(3, 12)).to_string(),
        "3:7-12"
    );
    assert_eq!(
        Position::from(point..roxmltree::TextPos::new(5, 1)).to_string(),
        "3:7..5:1"
    );
}
