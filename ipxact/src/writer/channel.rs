use super::{write_is_present, write_name_group, write_vendor_extensions, XmlWriter};
use crate::{
    error::WriteError,
    model::{Channel, Revision},
};

/// Write an `ipxact:channel` element
pub fn write_channel(
    w: &mut XmlWriter,
    channel: &Channel,
    revision: Revision,
) -> Result<(), WriteError> {
    w.start("ipxact:channel")?;
    write_name_group(w, &channel.name_group, revision)?;
    write_is_present(w, &channel.is_present)?;
    for interface in &channel.bus_interface_refs {
        w.start("ipxact:busInterfaceRef")?;
        w.text_element("ipxact:localName", &interface.local_name)?;
        write_is_present(w, &interface.is_present)?;
        write_vendor_extensions(w, &interface.vendor_extensions)?;
        w.end("ipxact:busInterfaceRef")?;
    }
    write_vendor_extensions(w, &channel.vendor_extensions)?;
    w.end("ipxact:channel")
}
