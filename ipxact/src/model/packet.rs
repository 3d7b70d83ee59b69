use super::{Endianness, NameGroup, Named, VendorExtensions};

/// `ipxact:packet`: an ordered set of fields sent over a port
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Packet {
    pub name_group: NameGroup,
    /// Must not be empty for a valid packet
    pub fields: Vec<PacketField>,
    pub vendor_extensions: VendorExtensions,
}

impl Packet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Default::default()
        }
    }
}

impl Named for Packet {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}

/// `ipxact:packetField`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PacketField {
    pub name_group: NameGroup,
    /// Width in bits, an expression
    pub width: String,
    pub value: String,
    pub endianness: Endianness,
    pub vendor_extensions: VendorExtensions,
}

impl PacketField {
    pub fn new(name: impl Into<String>, width: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            width: width.into(),
            ..Default::default()
        }
    }
}

impl Named for PacketField {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}
