use super::{
    component::write_list, write_access_policies, write_boolean, write_field_reference,
    write_field_reset, write_is_present, write_memory_array, write_name_group, write_parameters,
    write_vendor_extensions, XmlWriter,
};
use crate::{
    error::WriteError,
    model::{AddressBlock, ArrayHost, Field, MemoryMap, Register, Revision},
};

pub fn write_memory_map(
    w: &mut XmlWriter,
    map: &MemoryMap,
    revision: Revision,
) -> Result<(), WriteError> {
    w.start("ipxact:memoryMap")?;
    write_name_group(w, &map.name_group, revision)?;
    write_is_present(w, &map.is_present)?;
    for block in &map.address_blocks {
        write_address_block(w, block, revision)?;
    }
    w.optional_text_element("ipxact:addressUnitBits", &map.address_unit_bits)?;
    write_vendor_extensions(w, &map.vendor_extensions)?;
    w.end("ipxact:memoryMap")
}

pub fn write_address_block(
    w: &mut XmlWriter,
    block: &AddressBlock,
    revision: Revision,
) -> Result<(), WriteError> {
    w.start("ipxact:addressBlock")?;
    write_name_group(w, &block.name_group, revision)?;
    write_is_present(w, &block.is_present)?;
    w.text_element("ipxact:baseAddress", &block.base_address)?;
    w.text_element("ipxact:range", &block.range)?;
    w.text_element("ipxact:width", &block.width)?;
    write_boolean(w, "ipxact:volatile", block.volatile)?;
    write_parameters(w, &block.parameters, revision)?;
    for register in &block.registers {
        write_register(w, register, revision)?;
    }
    write_vendor_extensions(w, &block.vendor_extensions)?;
    w.end("ipxact:addressBlock")
}

pub fn write_register(
    w: &mut XmlWriter,
    register: &Register,
    revision: Revision,
) -> Result<(), WriteError> {
    w.start("ipxact:register")?;
    write_name_group(w, &register.name_group, revision)?;
    write_is_present(w, &register.is_present)?;
    write_memory_array(w, register.memory.array(), revision, ArrayHost::Memory)?;
    w.text_element("ipxact:addressOffset", &register.address_offset)?;
    w.optional_text_element("ipxact:typeIdentifier", &register.type_identifier)?;
    w.text_element("ipxact:size", &register.size)?;
    write_boolean(w, "ipxact:volatile", register.volatile)?;
    write_access_policies(
        w,
        &register.access_policies,
        revision,
        "ipxact:accessPolicies",
        "ipxact:accessPolicy",
    )?;
    for field in &register.fields {
        write_field(w, field, revision)?;
    }
    write_parameters(w, &register.parameters, revision)?;
    write_vendor_extensions(w, &register.vendor_extensions)?;
    w.end("ipxact:register")
}

/// Write an `ipxact:field` element
///
/// In IP-XACT 2022 an alias is written with `aliasOf` in place of its type identifier, width,
/// volatility and access.
pub fn write_field(w: &mut XmlWriter, field: &Field, revision: Revision) -> Result<(), WriteError> {
    w.start("ipxact:field")?;
    write_name_group(w, &field.name_group, revision)?;
    write_is_present(w, &field.is_present)?;
    write_memory_array(w, field.memory.array(), revision, ArrayHost::Field)?;
    w.text_element("ipxact:bitOffset", &field.bit_offset)?;
    write_list(w, "ipxact:resets", &field.resets, write_field_reset)?;

    match field.alias_of.as_ref().filter(|_| !revision.is_std14()) {
        Some(alias_of) => write_field_reference(w, "ipxact:aliasOf", alias_of)?,
        None => {
            w.optional_text_element("ipxact:typeIdentifier", &field.type_identifier)?;
            w.text_element("ipxact:bitWidth", &field.bit_width)?;
            write_boolean(w, "ipxact:volatile", field.volatile)?;
            write_access_policies(
                w,
                &field.access_policies,
                revision,
                "ipxact:fieldAccessPolicies",
                "ipxact:fieldAccessPolicy",
            )?;
        }
    }

    write_parameters(w, &field.parameters, revision)?;
    write_vendor_extensions(w, &field.vendor_extensions)?;
    w.end("ipxact:field")
}
