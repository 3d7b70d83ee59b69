use log::debug;

use super::{
    read_is_present, read_name_group, read_parameters, read_vendor_extensions, read_vlnv_elements,
    XmlNode,
};
use crate::model::{
    AddressSpaceRef, ClockUnit, Component, Cpu, OtherClockDriver, PowerDomain, Region, Revision,
};

/// Read an `ipxact:component` root element
///
/// Only the modeled parts of the component are read. Other elements such as bus interfaces and
/// address spaces are skipped.
pub fn read_component(node: &XmlNode, revision: Revision) -> Component {
    let vlnv = read_vlnv_elements(node);
    debug!("reading component {vlnv}");

    let mut component = Component::new(vlnv);
    if !revision.is_std14() {
        component.display_name = node.find_text_by_tag_name("displayName");
        component.short_description = node.find_text_by_tag_name("shortDescription");
    }
    component.description = node.find_text_by_tag_name("description");

    component.power_domains = node
        .grandchildren("powerDomains", "powerDomain")
        .iter()
        .map(|domain| read_power_domain(domain, revision))
        .collect();
    component.channels = node
        .grandchildren("channels", "channel")
        .iter()
        .map(|channel| super::read_channel(channel, revision))
        .collect();
    component.memory_maps = node
        .grandchildren("memoryMaps", "memoryMap")
        .iter()
        .map(|map| super::read_memory_map(map, revision))
        .collect();
    component.file_sets = node
        .grandchildren("fileSets", "fileSet")
        .iter()
        .map(|file_set| super::read_file_set(file_set, revision))
        .collect();
    component.cpus = node
        .grandchildren("cpus", "cpu")
        .iter()
        .map(|cpu| read_cpu(cpu, revision))
        .collect();
    component.other_clock_drivers = node
        .grandchildren("otherClockDrivers", "otherClockDriver")
        .iter()
        .map(read_other_clock_driver)
        .collect();
    component.parameters = read_parameters(node, revision);
    component.vendor_extensions = read_vendor_extensions(node);
    component
}

/// Read an `ipxact:cpu` element
///
/// IP-XACT 2014 CPUs reference address spaces, IP-XACT 2022 CPUs describe their address space
/// themselves with range, width and regions and reference a memory map. Both are read from either
/// revision.
pub fn read_cpu(node: &XmlNode, revision: Revision) -> Cpu {
    let memory_map_ref = node
        .find_child("memoryMapRef")
        .map(|map_ref| match map_ref.attribute("memoryMapRef") {
            "" => map_ref.text().to_owned(),
            attr => attr.to_owned(),
        })
        .unwrap_or_default();

    Cpu {
        name_group: read_name_group(node, revision),
        is_present: read_is_present(node),
        address_space_refs: node
            .children_with_tag_name("addressSpaceRef")
            .iter()
            .map(|space_ref| AddressSpaceRef {
                address_space_ref: space_ref.attribute("addressSpaceRef").to_owned(),
                is_present: read_is_present(space_ref),
            })
            .collect(),
        range: node.find_text_by_tag_name("range"),
        width: node.find_text_by_tag_name("width"),
        address_unit_bits: node.find_text_by_tag_name("addressUnitBits"),
        regions: node
            .grandchildren("regions", "region")
            .iter()
            .map(|region| read_region(region, revision))
            .collect(),
        memory_map_ref,
        parameters: read_parameters(node, revision),
        vendor_extensions: read_vendor_extensions(node),
    }
}

/// Read an `ipxact:region` element of a CPU
pub fn read_region(node: &XmlNode, revision: Revision) -> Region {
    Region {
        name_group: read_name_group(node, revision),
        address_offset: node.find_text_by_tag_name("addressOffset"),
        range: node.find_text_by_tag_name("range"),
        vendor_extensions: read_vendor_extensions(node),
    }
}

/// Read an `ipxact:powerDomain` element
pub fn read_power_domain(node: &XmlNode, revision: Revision) -> PowerDomain {
    PowerDomain {
        name_group: read_name_group(node, revision),
        always_on: node.find_text_by_tag_name("alwaysOn"),
        sub_domain_of: node.find_text_by_tag_name("subDomainOf"),
        parameters: read_parameters(node, revision),
        vendor_extensions: read_vendor_extensions(node),
    }
}

/// Read an `ipxact:otherClockDriver` element
pub fn read_other_clock_driver(node: &XmlNode) -> OtherClockDriver {
    let clock_unit = |tag: &str| {
        node.find_child(tag)
            .map(|n| ClockUnit::new(n.text()).with_unit(n.attribute("units")))
            .unwrap_or_default()
    };

    OtherClockDriver {
        clock_name: node.attribute("clockName").to_owned(),
        clock_source: node.attribute("clockSource").to_owned(),
        clock_period: clock_unit("clockPeriod"),
        clock_pulse_offset: clock_unit("clockPulseOffset"),
        clock_pulse_value: node.find_text_by_tag_name("clockPulseValue"),
        clock_pulse_duration: clock_unit("clockPulseDuration"),
    }
}
