use log::debug;

use super::{
    read_interface_ref, read_is_present, read_name_group, read_parameters, read_vendor_extensions,
    read_vlnv_attributes, read_vlnv_elements, XmlNode,
};
use crate::model::{ComponentInstance, Design, Interconnection, NameGroup, Revision};

/// Read an `ipxact:design` root element
///
/// Ad-hoc connections, hierarchical interfaces and monitor interconnections are skipped.
pub fn read_design(node: &XmlNode, revision: Revision) -> Design {
    let vlnv = read_vlnv_elements(node);
    debug!("reading design {vlnv}");

    let mut design = Design::new(vlnv);
    if !revision.is_std14() {
        design.display_name = node.find_text_by_tag_name("displayName");
        design.short_description = node.find_text_by_tag_name("shortDescription");
    }
    design.description = node.find_text_by_tag_name("description");
    design.component_instances = node
        .grandchildren("componentInstances", "componentInstance")
        .iter()
        .map(|instance| read_component_instance(instance, revision))
        .collect();
    design.interconnections = node
        .grandchildren("interconnections", "interconnection")
        .iter()
        .map(|connection| read_interconnection(connection, revision))
        .collect();
    design.parameters = read_parameters(node, revision);
    design.vendor_extensions = read_vendor_extensions(node);
    design
}

/// Read an `ipxact:componentInstance` element. The instance name is read into the name group.
pub fn read_component_instance(node: &XmlNode, revision: Revision) -> ComponentInstance {
    let mut name_group = NameGroup::new(node.find_text_by_tag_name("instanceName"));
    let named = read_name_group(node, revision);
    name_group.display_name = named.display_name;
    name_group.short_description = named.short_description;
    name_group.description = named.description;

    ComponentInstance {
        name_group,
        is_present: read_is_present(node),
        component_ref: node
            .find_child("componentRef")
            .map(|component_ref| read_vlnv_attributes(&component_ref))
            .unwrap_or_default(),
        vendor_extensions: read_vendor_extensions(node),
    }
}

pub fn read_interconnection(node: &XmlNode, revision: Revision) -> Interconnection {
    Interconnection {
        name_group: read_name_group(node, revision),
        is_present: read_is_present(node),
        active_interfaces: node
            .children_with_tag_name("activeInterface")
            .iter()
            .map(|interface| read_interface_ref(interface, revision))
            .collect(),
        vendor_extensions: read_vendor_extensions(node),
    }
}
