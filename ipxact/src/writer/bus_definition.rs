use log::debug;

use super::{
    write_boolean, write_name_group, write_parameters, write_vendor_extensions,
    write_vlnv_attributes, write_vlnv_elements, XmlWriter,
};
use crate::{
    error::WriteError,
    model::{Assertion, BusDefinition, Revision},
};

/// Write the content of an `ipxact:busDefinition` root element
///
/// In IP-XACT 2014 the description follows the system group names, in later revisions it belongs
/// to the document name group right after the VLNV.
pub fn write_bus_definition(
    w: &mut XmlWriter,
    bus: &BusDefinition,
    revision: Revision,
) -> Result<(), WriteError> {
    debug!("writing bus definition {}", bus.vlnv);
    write_vlnv_elements(w, &bus.vlnv)?;
    if !revision.is_std14() {
        w.optional_text_element("ipxact:displayName", &bus.display_name)?;
        w.optional_text_element("ipxact:shortDescription", &bus.short_description)?;
        w.optional_text_element("ipxact:description", &bus.description)?;
    }

    w.text_element(
        "ipxact:directConnection",
        &bus.direct_connection.to_string(),
    )?;
    write_boolean(w, "ipxact:broadcast", bus.broadcast)?;
    w.text_element("ipxact:isAddressable", &bus.is_addressable.to_string())?;
    if let Some(extends) = &bus.extends {
        write_vlnv_attributes(w, "ipxact:extends", extends)?;
    }

    let (max_masters, max_slaves) = if revision.is_std14() {
        ("ipxact:maxMasters", "ipxact:maxSlaves")
    } else {
        ("ipxact:maxInitiators", "ipxact:maxTargets")
    };
    w.optional_text_element(max_masters, &bus.max_masters)?;
    w.optional_text_element(max_slaves, &bus.max_slaves)?;
    w.text_list(
        "ipxact:systemGroupNames",
        "ipxact:systemGroupName",
        &bus.system_group_names,
    )?;
    if revision.is_std14() {
        w.optional_text_element("ipxact:description", &bus.description)?;
    }

    write_parameters(w, &bus.parameters, revision)?;
    if !bus.assertions.is_empty() {
        w.start("ipxact:assertions")?;
        for assertion in &bus.assertions {
            write_assertion(w, assertion, revision)?;
        }
        w.end("ipxact:assertions")?;
    }
    write_vendor_extensions(w, &bus.vendor_extensions)
}

/// Write an `ipxact:assertion` element
pub fn write_assertion(
    w: &mut XmlWriter,
    assertion: &Assertion,
    revision: Revision,
) -> Result<(), WriteError> {
    w.start("ipxact:assertion")?;
    write_name_group(w, &assertion.name_group, revision)?;
    w.text_element("ipxact:assert", &assertion.assert)?;
    write_vendor_extensions(w, &assertion.vendor_extensions)?;
    w.end("ipxact:assertion")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{BooleanValue, Vlnv},
        writer::test_util::write_to_string,
    };

    fn test_bus() -> BusDefinition {
        let mut bus = BusDefinition::new(Vlnv::new("TUT", "TestLibrary", "TestBus", "1.0"));
        bus.description = "Bus description".to_owned();
        bus.direct_connection = true;
        bus.broadcast = BooleanValue::False;
        bus.extends = Some(Vlnv::new("TUT", "TestLibrary", "extended", "1.0"));
        bus.max_masters = "1".to_owned();
        bus.max_slaves = "8-1".to_owned();
        bus.system_group_names = vec!["system1".to_owned()];
        bus.assertions.push(Assertion::new("testAssertion1", "1"));
        bus
    }

    #[test]
    fn write_bus_definition_std14_works() {
        assert_eq!(
            write_to_string(|w| write_bus_definition(w, &test_bus(), Revision::Std14)),
            "<ipxact:vendor>TUT</ipxact:vendor>\
             <ipxact:library>TestLibrary</ipxact:library>\
             <ipxact:name>TestBus</ipxact:name>\
             <ipxact:version>1.0</ipxact:version>\
             <ipxact:directConnection>true</ipxact:directConnection>\
             <ipxact:broadcast>false</ipxact:broadcast>\
             <ipxact:isAddressable>false</ipxact:isAddressable>\
             <ipxact:extends vendor=\"TUT\" library=\"TestLibrary\" name=\"extended\" version=\"1.0\"/>\
             <ipxact:maxMasters>1</ipxact:maxMasters>\
             <ipxact:maxSlaves>8-1</ipxact:maxSlaves>\
             <ipxact:systemGroupNames>\
             <ipxact:systemGroupName>system1</ipxact:systemGroupName>\
             </ipxact:systemGroupNames>\
             <ipxact:description>Bus description</ipxact:description>\
             <ipxact:assertions>\
             <ipxact:assertion>\
             <ipxact:name>testAssertion1</ipxact:name>\
             <ipxact:assert>1</ipxact:assert>\
             </ipxact:assertion>\
             </ipxact:assertions>"
        );
    }

    #[test]
    fn write_bus_definition_std22_renames_maximums() {
        let mut bus = test_bus();
        bus.short_description = "brief".to_owned();
        bus.assertions.clear();
        bus.extends = None;
        bus.system_group_names.clear();

        assert_eq!(
            write_to_string(|w| write_bus_definition(w, &bus, Revision::Std22)),
            "<ipxact:vendor>TUT</ipxact:vendor>\
             <ipxact:library>TestLibrary</ipxact:library>\
             <ipxact:name>TestBus</ipxact:name>\
             <ipxact:version>1.0</ipxact:version>\
             <ipxact:shortDescription>brief</ipxact:shortDescription>\
             <ipxact:description>Bus description</ipxact:description>\
             <ipxact:directConnection>true</ipxact:directConnection>\
             <ipxact:broadcast>false</ipxact:broadcast>\
             <ipxact:isAddressable>false</ipxact:isAddressable>\
             <ipxact:maxInitiators>1</ipxact:maxInitiators>\
             <ipxact:maxTargets>8-1</ipxact:maxTargets>"
        );
    }
}
