use log::debug;

use super::{
    common::read_text_list, read_boolean, read_name_group, read_parameters,
    read_vendor_extensions, read_vlnv_attributes, read_vlnv_elements, XmlNode,
};
use crate::model::{Assertion, BooleanValue, BusDefinition, Revision};

/// Read an `ipxact:busDefinition` root element
///
/// The maximum numbers of masters and slaves are read from `maxMasters` and `maxSlaves` in IP-XACT
/// 2014 and from `maxInitiators` and `maxTargets` in later revisions.
pub fn read_bus_definition(node: &XmlNode, revision: Revision) -> BusDefinition {
    let vlnv = read_vlnv_elements(node);
    debug!("reading bus definition {vlnv}");

    let mut bus = BusDefinition::new(vlnv);
    if !revision.is_std14() {
        bus.display_name = node.find_text_by_tag_name("displayName");
        bus.short_description = node.find_text_by_tag_name("shortDescription");
    }
    bus.description = node.find_text_by_tag_name("description");

    bus.direct_connection = read_boolean(node, "directConnection") == BooleanValue::True;
    bus.broadcast = read_boolean(node, "broadcast");
    bus.is_addressable = read_boolean(node, "isAddressable") == BooleanValue::True;
    bus.extends = node
        .find_child("extends")
        .map(|extends| read_vlnv_attributes(&extends));

    let (max_masters, max_slaves) = if revision.is_std14() {
        ("maxMasters", "maxSlaves")
    } else {
        ("maxInitiators", "maxTargets")
    };
    bus.max_masters = node.find_text_by_tag_name(max_masters);
    bus.max_slaves = node.find_text_by_tag_name(max_slaves);

    bus.system_group_names = read_text_list(node, "systemGroupNames", "systemGroupName");
    bus.parameters = read_parameters(node, revision);
    bus.assertions = node
        .grandchildren("assertions", "assertion")
        .iter()
        .map(|assertion| read_assertion(assertion, revision))
        .collect();
    bus.vendor_extensions = read_vendor_extensions(node);
    bus
}

/// Read an `ipxact:assertion` element
pub fn read_assertion(node: &XmlNode, revision: Revision) -> Assertion {
    Assertion {
        name_group: read_name_group(node, revision),
        assert: node.find_text_by_tag_name("assert"),
        vendor_extensions: read_vendor_extensions(node),
    }
}
