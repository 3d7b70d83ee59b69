use log::debug;

use super::{
    write_channel, write_file_set, write_is_present, write_memory_map, write_name_group,
    write_parameters, write_vendor_extensions, write_vlnv_elements, XmlWriter,
};
use crate::{
    error::WriteError,
    model::{ClockUnit, Component, Cpu, OtherClockDriver, PowerDomain, Region, Revision},
};

/// Write the content of an `ipxact:component` root element
///
/// The root element itself, with its namespace declarations, is written by
/// [`super::write_document`].
pub fn write_component(
    w: &mut XmlWriter,
    component: &Component,
    revision: Revision,
) -> Result<(), WriteError> {
    debug!("writing component {}", component.vlnv);
    write_vlnv_elements(w, &component.vlnv)?;
    if !revision.is_std14() {
        w.optional_text_element("ipxact:displayName", &component.display_name)?;
        w.optional_text_element("ipxact:shortDescription", &component.short_description)?;
        w.optional_text_element("ipxact:description", &component.description)?;
        write_list(w, "ipxact:powerDomains", &component.power_domains, |w, domain| {
            write_power_domain(w, domain, revision)
        })?;
    }
    write_list(w, "ipxact:channels", &component.channels, |w, channel| {
        write_channel(w, channel, revision)
    })?;
    write_list(w, "ipxact:memoryMaps", &component.memory_maps, |w, map| {
        write_memory_map(w, map, revision)
    })?;
    write_list(w, "ipxact:fileSets", &component.file_sets, |w, file_set| {
        write_file_set(w, file_set, revision)
    })?;
    write_list(w, "ipxact:cpus", &component.cpus, |w, cpu| {
        write_cpu(w, cpu, revision)
    })?;
    write_list(
        w,
        "ipxact:otherClockDrivers",
        &component.other_clock_drivers,
        write_other_clock_driver,
    )?;
    if revision.is_std14() {
        w.optional_text_element("ipxact:description", &component.description)?;
    }
    write_parameters(w, &component.parameters, revision)?;
    write_vendor_extensions(w, &component.vendor_extensions)
}

/// Write an `ipxact:cpu` element
///
/// IP-XACT 2014 CPUs are written with their address space references, later revisions with
/// range, width, address unit bits, regions and memory map reference.
pub fn write_cpu(w: &mut XmlWriter, cpu: &Cpu, revision: Revision) -> Result<(), WriteError> {
    w.start("ipxact:cpu")?;
    write_name_group(w, &cpu.name_group, revision)?;
    write_is_present(w, &cpu.is_present)?;
    if revision.is_std14() {
        for space_ref in &cpu.address_space_refs {
            let attributes = [("addressSpaceRef", space_ref.address_space_ref.as_str())];
            if space_ref.is_present.is_empty() {
                w.empty_with_attributes("ipxact:addressSpaceRef", &attributes)?;
            } else {
                w.start_with_attributes("ipxact:addressSpaceRef", &attributes)?;
                write_is_present(w, &space_ref.is_present)?;
                w.end("ipxact:addressSpaceRef")?;
            }
        }
    } else {
        w.optional_text_element("ipxact:range", &cpu.range)?;
        w.optional_text_element("ipxact:width", &cpu.width)?;
        w.optional_text_element("ipxact:addressUnitBits", &cpu.address_unit_bits)?;
        write_list(w, "ipxact:regions", &cpu.regions, |w, region| {
            write_region(w, region, revision)
        })?;
        w.optional_text_element("ipxact:memoryMapRef", &cpu.memory_map_ref)?;
    }
    write_parameters(w, &cpu.parameters, revision)?;
    write_vendor_extensions(w, &cpu.vendor_extensions)?;
    w.end("ipxact:cpu")
}

pub fn write_region(w: &mut XmlWriter, region: &Region, revision: Revision) -> Result<(), WriteError> {
    w.start("ipxact:region")?;
    write_name_group(w, &region.name_group, revision)?;
    w.text_element("ipxact:addressOffset", &region.address_offset)?;
    w.text_element("ipxact:range", &region.range)?;
    write_vendor_extensions(w, &region.vendor_extensions)?;
    w.end("ipxact:region")
}

pub fn write_power_domain(
    w: &mut XmlWriter,
    domain: &PowerDomain,
    revision: Revision,
) -> Result<(), WriteError> {
    w.start("ipxact:powerDomain")?;
    write_name_group(w, &domain.name_group, revision)?;
    w.optional_text_element("ipxact:alwaysOn", &domain.always_on)?;
    w.optional_text_element("ipxact:subDomainOf", &domain.sub_domain_of)?;
    write_parameters(w, &domain.parameters, revision)?;
    write_vendor_extensions(w, &domain.vendor_extensions)?;
    w.end("ipxact:powerDomain")
}

/// Write an `ipxact:otherClockDriver` element
///
/// The timing elements are always written, even without a value.
pub fn write_other_clock_driver(
    w: &mut XmlWriter,
    driver: &OtherClockDriver,
) -> Result<(), WriteError> {
    w.start_with_attributes(
        "ipxact:otherClockDriver",
        &[
            ("clockName", &driver.clock_name),
            ("clockSource", &driver.clock_source),
        ],
    )?;
    write_clock_unit(w, "ipxact:clockPeriod", &driver.clock_period)?;
    write_clock_unit(w, "ipxact:clockPulseOffset", &driver.clock_pulse_offset)?;
    w.text_element("ipxact:clockPulseValue", &driver.clock_pulse_value)?;
    write_clock_unit(w, "ipxact:clockPulseDuration", &driver.clock_pulse_duration)?;
    w.end("ipxact:otherClockDriver")
}

fn write_clock_unit(w: &mut XmlWriter, tag: &str, clock_unit: &ClockUnit) -> Result<(), WriteError> {
    w.text_element_with_attributes(tag, &[("units", &clock_unit.unit)], &clock_unit.value)
}

/// Write `items` inside `wrapper`, or nothing at all when there are no items
pub(crate) fn write_list<T>(
    w: &mut XmlWriter,
    wrapper: &str,
    items: &[T],
    mut write: impl FnMut(&mut XmlWriter, &T) -> Result<(), WriteError>,
) -> Result<(), WriteError> {
    if items.is_empty() {
        return Ok(());
    }
    w.start(wrapper)?;
    for item in items {
        write(w, item)?;
    }
    w.end(wrapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{AddressSpaceRef, Parameter},
        reader::{read_cpu, read_other_clock_driver, test_util::read_fragment},
        writer::test_util::write_to_string,
    };

    #[test]
    fn write_cpu_std14_works() {
        let mut cpu = Cpu::new("testCpu");
        cpu.is_present = "4-3".to_owned();
        let mut space_ref = AddressSpaceRef::new("default_interconnect");
        space_ref.is_present = "1".to_owned();
        cpu.address_space_refs.push(space_ref);
        cpu.address_space_refs.push(AddressSpaceRef::new("other"));
        cpu.range = "ignored".to_owned();

        assert_eq!(
            write_to_string(|w| write_cpu(w, &cpu, Revision::Std14)),
            "<ipxact:cpu>\
             <ipxact:name>testCpu</ipxact:name>\
             <ipxact:isPresent>4-3</ipxact:isPresent>\
             <ipxact:addressSpaceRef addressSpaceRef=\"default_interconnect\">\
             <ipxact:isPresent>1</ipxact:isPresent>\
             </ipxact:addressSpaceRef>\
             <ipxact:addressSpaceRef addressSpaceRef=\"other\"/>\
             </ipxact:cpu>"
        );
    }

    #[test]
    fn write_cpu_std22_works() {
        let mut cpu = Cpu::new("testCpu");
        cpu.range = "1024".to_owned();
        cpu.width = "32".to_owned();
        cpu.address_unit_bits = "8".to_owned();
        cpu.regions.push(Region::new("region1", "0", "512"));
        cpu.memory_map_ref = "testMap".to_owned();
        cpu.parameters.push(Parameter::new("p", "1"));

        assert_eq!(
            write_to_string(|w| write_cpu(w, &cpu, Revision::Std22)),
            "<ipxact:cpu>\
             <ipxact:name>testCpu</ipxact:name>\
             <ipxact:range>1024</ipxact:range>\
             <ipxact:width>32</ipxact:width>\
             <ipxact:addressUnitBits>8</ipxact:addressUnitBits>\
             <ipxact:regions>\
             <ipxact:region>\
             <ipxact:name>region1</ipxact:name>\
             <ipxact:addressOffset>0</ipxact:addressOffset>\
             <ipxact:range>512</ipxact:range>\
             </ipxact:region>\
             </ipxact:regions>\
             <ipxact:memoryMapRef>testMap</ipxact:memoryMapRef>\
             <ipxact:parameters>\
             <ipxact:parameter>\
             <ipxact:name>p</ipxact:name>\
             <ipxact:value>1</ipxact:value>\
             </ipxact:parameter>\
             </ipxact:parameters>\
             </ipxact:cpu>"
        );

        let read = read_fragment(
            &write_to_string(|w| write_cpu(w, &cpu, Revision::Std22)),
            |node| read_cpu(node, Revision::Std22),
        );
        assert_eq!(read, cpu);
    }

    #[test]
    fn write_other_clock_driver_works() {
        let mut driver = OtherClockDriver::new("testClock");
        driver.clock_source = "source".to_owned();
        driver.clock_period = ClockUnit::new("8").with_unit("ns");
        driver.clock_pulse_value = "1".to_owned();

        let text = write_to_string(|w| write_other_clock_driver(w, &driver));
        assert_eq!(
            text,
            "<ipxact:otherClockDriver clockName=\"testClock\" clockSource=\"source\">\
             <ipxact:clockPeriod units=\"ns\">8</ipxact:clockPeriod>\
             <ipxact:clockPulseOffset></ipxact:clockPulseOffset>\
             <ipxact:clockPulseValue>1</ipxact:clockPulseValue>\
             <ipxact:clockPulseDuration></ipxact:clockPulseDuration>\
             </ipxact:otherClockDriver>"
        );
        assert_eq!(read_fragment(&text, read_other_clock_driver), driver);
    }

    #[test]
    fn write_power_domain_works() {
        let mut domain = PowerDomain::new("core");
        domain.always_on = "1".to_owned();
        domain.sub_domain_of = "top".to_owned();

        assert_eq!(
            write_to_string(|w| write_power_domain(w, &domain, Revision::Std22)),
            "<ipxact:powerDomain>\
             <ipxact:name>core</ipxact:name>\
             <ipxact:alwaysOn>1</ipxact:alwaysOn>\
             <ipxact:subDomainOf>top</ipxact:subDomainOf>\
             </ipxact:powerDomain>"
        );
    }
}
