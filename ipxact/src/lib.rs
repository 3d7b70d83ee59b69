//! IP-XACT (IEEE 1685-2014 and IEEE 1685-2022) document model with readers, writers and
//! validators for bus definitions and components.

// Export full API at crate root
pub use api::*;
pub use error::{Error, ParseError, ParseFileError, Position, PositionalError, WriteError};
pub use library::{DocumentResolver, MemoryLibrary};

mod api;
mod error;
pub mod expression;
mod library;
pub mod model;
pub mod parameter_finder;
pub mod reader;
pub mod validator;
pub mod writer;
