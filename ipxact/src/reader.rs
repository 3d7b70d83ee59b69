//! Element readers: turn an XML subtree into a model object
//!
//! Every reader takes the node of the element itself and the revision of the containing document.
//! Readers are permissive. Missing elements and missing text leave the corresponding fields at
//! their defaults, and judging the result is left to [`crate::validator`]. The only failures are
//! on document level, see [`read_document`].

mod bus_definition;
mod channel;
mod common;
mod component;
mod design;
mod document;
mod field;
mod file_set;
mod interface_ref;
mod memory_array;
mod memory_map;
mod packet;
mod parameter;
mod xml;

pub use bus_definition::*;
pub use channel::*;
pub use common::*;
pub use component::*;
pub use design::*;
pub use document::*;
pub use field::*;
pub use file_set::*;
pub use interface_ref::*;
pub use memory_array::*;
pub use memory_map::*;
pub use packet::*;
pub use parameter::*;
pub use xml::XmlNode;
pub(crate) use xml::IntoXmlNode;

#[cfg(test)]
pub(crate) use xml::test_util;
