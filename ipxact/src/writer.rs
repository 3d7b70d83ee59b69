//! Element writers: the dual of [`crate::reader`]
//!
//! Every writer emits its element in the canonical order of the IP-XACT schema: name group first,
//! then the element specific content, then parameters and last vendor extensions. Optional content
//! that is empty is not written at all.

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
pub use xml::XmlWriter;

#[cfg(test)]
pub(crate) mod test_util {
    use super::XmlWriter;

    /// Run `write` against a compact writer and return the produced text
    pub(crate) fn write_to_string(
        write: impl FnOnce(&mut XmlWriter) -> Result<(), crate::error::WriteError>,
    ) -> String {
        let mut writer = XmlWriter::new();
        write(&mut writer).expect("writing failed");
        writer.into_string().expect("writer output is not UTF-8")
    }
}
