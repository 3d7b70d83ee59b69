use super::{
    AccessPolicy, ArrayableMemory, BooleanValue, FieldReference, FieldReset, NameGroup, Named,
    Parameter, VendorExtensions,
};

/// `ipxact:memoryMap` of a component
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryMap {
    pub name_group: NameGroup,
    pub is_present: String,
    pub address_blocks: Vec<AddressBlock>,
    pub address_unit_bits: String,
    pub vendor_extensions: VendorExtensions,
}

impl MemoryMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Default::default()
        }
    }
}

impl Named for MemoryMap {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}

/// `ipxact:addressBlock`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressBlock {
    pub name_group: NameGroup,
    pub is_present: String,
    pub base_address: String,
    /// Size of the block in addressable units
    pub range: String,
    /// Bit width of a row
    pub width: String,
    pub volatile: BooleanValue,
    pub parameters: Vec<Parameter>,
    pub registers: Vec<Register>,
    pub vendor_extensions: VendorExtensions,
}

impl AddressBlock {
    pub fn new(
        name: impl Into<String>,
        base_address: impl Into<String>,
        range: impl Into<String>,
        width: impl Into<String>,
    ) -> Self {
        Self {
            name_group: NameGroup::new(name),
            base_address: base_address.into(),
            range: range.into(),
            width: width.into(),
            ..Default::default()
        }
    }
}

impl Named for AddressBlock {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}

/// `ipxact:register` of an address block
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Register {
    pub name_group: NameGroup,
    pub is_present: String,
    pub memory: ArrayableMemory,
    pub address_offset: String,
    pub type_identifier: String,
    /// Width of the register in bits
    pub size: String,
    pub volatile: BooleanValue,
    /// An IP-XACT 2014 register has a single `access`, read as a policy without mode references
    pub access_policies: Vec<AccessPolicy>,
    pub fields: Vec<Field>,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: VendorExtensions,
}

impl Register {
    pub fn new(
        name: impl Into<String>,
        address_offset: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            name_group: NameGroup::new(name),
            address_offset: address_offset.into(),
            size: size.into(),
            ..Default::default()
        }
    }
}

impl Named for Register {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}

/// `ipxact:field` of a register
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    pub name_group: NameGroup,
    pub is_present: String,
    /// Stride is written as `bitStride`
    pub memory: ArrayableMemory,
    pub bit_offset: String,
    pub resets: Vec<FieldReset>,
    pub type_identifier: String,
    pub bit_width: String,
    pub volatile: BooleanValue,
    /// `fieldAccessPolicies` in IP-XACT 2022, a single `access` in 2014
    pub access_policies: Vec<AccessPolicy>,
    /// IP-XACT 2022 only. An alias takes its width, volatility and access from the aliased field,
    /// so those are not written for it.
    pub alias_of: Option<FieldReference>,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: VendorExtensions,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        bit_offset: impl Into<String>,
        bit_width: impl Into<String>,
    ) -> Self {
        Self {
            name_group: NameGroup::new(name),
            bit_offset: bit_offset.into(),
            bit_width: bit_width.into(),
            ..Default::default()
        }
    }
}

impl Named for Field {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}
