//! In-memory object graph of IP-XACT documents
//!
//! All types here are plain data holders. Ownership follows the XML tree: every element owns its
//! children. Validity is not enforced on construction, see [`crate::validator`].

mod access_policy;
mod build_command;
mod bus_definition;
mod channel;
mod clock_driver;
mod common;
mod component;
mod design;
mod document;
mod field_reference;
mod field_reset;
mod interface_ref;
mod memory_array;
mod memory_map;
mod packet;
mod parameter;
mod power_domain;
mod region;
mod vendor_extension;

pub use access_policy::*;
pub use build_command::*;
pub use bus_definition::*;
pub use channel::*;
pub use clock_driver::*;
pub use common::*;
pub use component::*;
pub use design::*;
pub use document::*;
pub use field_reference::*;
pub use field_reset::*;
pub use interface_ref::*;
pub use memory_array::*;
pub use memory_map::*;
pub use packet::*;
pub use parameter::*;
pub use power_domain::*;
pub use region::*;
pub use vendor_extension::*;
