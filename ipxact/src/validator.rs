//! Validation of model elements
//!
//! Every validator answers two questions about an element: is it valid ([`Validator::validate`])
//! and what exactly is wrong with it ([`Validator::find_errors_in`]). Both are built from the same
//! `has_valid_*` predicates of the validator, so they always agree.
//!
//! Validators never fail. Expressions are checked with the [`ExpressionParser`] injected on
//! construction, which decides what symbols are visible.
//!
//! [`ExpressionParser`]: crate::expression::ExpressionParser

mod access_policy;
mod assertion;
mod build_command;
mod bus_definition;
mod channel;
mod clock_driver;
mod common;
mod component;
mod cpu;
mod design;
mod field;
mod file_set;
mod hierarchical;
mod interface_ref;
mod memory_array;
mod memory_map;
mod packet;
mod parameter;
mod power_domain;
mod region;

pub use access_policy::*;
pub use assertion::*;
pub use build_command::*;
pub use bus_definition::*;
pub use channel::*;
pub use clock_driver::*;
pub use component::*;
pub use cpu::*;
pub use design::*;
pub use field::*;
pub use file_set::*;
pub use hierarchical::*;
pub use interface_ref::*;
pub use memory_array::*;
pub use memory_map::*;
pub use packet::*;
pub use parameter::*;
pub use power_domain::*;
pub use region::*;

/// Checks elements of type `T`
pub trait Validator<T: ?Sized> {
    /// Returns true if `item` is valid. May stop at the first violation.
    fn validate(&self, item: &T) -> bool;

    /// Append a message for every violation in `item` to `errors`
    ///
    /// `context` locates the item for the reader of the messages, e.g. `component
    /// tuni.fi:ip:uart:1.0`.
    fn find_errors_in(&self, errors: &mut Vec<String>, item: &T, context: &str);
}
