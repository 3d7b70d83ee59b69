use super::{
    read_access_policies, read_boolean, read_field_reference, read_field_reset, read_is_present,
    read_memory_array, read_name_group, read_parameters, read_vendor_extensions, XmlNode,
};
use crate::model::{
    AddressBlock, ArrayHost, ArrayableMemory, Field, MemoryMap, Register, Revision,
};

/// Read an `ipxact:memoryMap` element
///
/// Only address blocks are read from the map. Banks, subspace maps and remaps are skipped.
pub fn read_memory_map(node: &XmlNode, revision: Revision) -> MemoryMap {
    MemoryMap {
        name_group: read_name_group(node, revision),
        is_present: read_is_present(node),
        address_blocks: node
            .children_with_tag_name("addressBlock")
            .iter()
            .map(|block| read_address_block(block, revision))
            .collect(),
        address_unit_bits: node.find_text_by_tag_name("addressUnitBits"),
        vendor_extensions: read_vendor_extensions(node),
    }
}

pub fn read_address_block(node: &XmlNode, revision: Revision) -> AddressBlock {
    AddressBlock {
        name_group: read_name_group(node, revision),
        is_present: read_is_present(node),
        base_address: node.find_text_by_tag_name("baseAddress"),
        range: node.find_text_by_tag_name("range"),
        width: node.find_text_by_tag_name("width"),
        volatile: read_boolean(node, "volatile"),
        parameters: read_parameters(node, revision),
        registers: node
            .children_with_tag_name("register")
            .iter()
            .map(|register| read_register(register, revision))
            .collect(),
        vendor_extensions: read_vendor_extensions(node),
    }
}

/// Read an `ipxact:register` element with its fields
pub fn read_register(node: &XmlNode, revision: Revision) -> Register {
    Register {
        name_group: read_name_group(node, revision),
        is_present: read_is_present(node),
        memory: ArrayableMemory::new(read_memory_array(node, revision, ArrayHost::Memory)),
        address_offset: node.find_text_by_tag_name("addressOffset"),
        type_identifier: node.find_text_by_tag_name("typeIdentifier"),
        size: node.find_text_by_tag_name("size"),
        volatile: read_boolean(node, "volatile"),
        access_policies: read_access_policies(node, revision, "accessPolicies", "accessPolicy"),
        fields: node
            .children_with_tag_name("field")
            .iter()
            .map(|field| read_field(field, revision))
            .collect(),
        parameters: read_parameters(node, revision),
        vendor_extensions: read_vendor_extensions(node),
    }
}

/// Read an `ipxact:field` element
///
/// `aliasOf` is only read from IP-XACT 2022 documents.
pub fn read_field(node: &XmlNode, revision: Revision) -> Field {
    let alias_of = if revision.is_std14() {
        None
    } else {
        node.find_child("aliasOf")
            .map(|alias| read_field_reference(&alias))
    };

    Field {
        name_group: read_name_group(node, revision),
        is_present: read_is_present(node),
        memory: ArrayableMemory::new(read_memory_array(node, revision, ArrayHost::Field)),
        bit_offset: node.find_text_by_tag_name("bitOffset"),
        resets: node
            .grandchildren("resets", "reset")
            .iter()
            .map(read_field_reset)
            .collect(),
        type_identifier: node.find_text_by_tag_name("typeIdentifier"),
        bit_width: node.find_text_by_tag_name("bitWidth"),
        volatile: read_boolean(node, "volatile"),
        access_policies: read_access_policies(
            node,
            revision,
            "fieldAccessPolicies",
            "fieldAccessPolicy",
        ),
        alias_of,
        parameters: read_parameters(node, revision),
        vendor_extensions: read_vendor_extensions(node),
    }
}
