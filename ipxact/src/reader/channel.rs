use super::{read_is_present, read_name_group, read_vendor_extensions, XmlNode};
use crate::model::{BusInterfaceRef, Channel, Revision};

/// Read an `ipxact:channel` element
pub fn read_channel(node: &XmlNode, revision: Revision) -> Channel {
    Channel {
        name_group: read_name_group(node, revision),
        is_present: read_is_present(node),
        bus_interface_refs: node
            .children_with_tag_name("busInterfaceRef")
            .iter()
            .map(|r| BusInterfaceRef {
                local_name: r.find_text_by_tag_name("localName"),
                is_present: read_is_present(r),
                vendor_extensions: read_vendor_extensions(r),
            })
            .collect(),
        vendor_extensions: read_vendor_extensions(node),
    }
}
