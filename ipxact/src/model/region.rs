use super::{NameGroup, Named, VendorExtensions};

/// `ipxact:region` of a CPU address space
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    pub name_group: NameGroup,
    /// Start of the region in addressable units, an expression
    pub address_offset: String,
    /// Size of the region in addressable units, an expression
    pub range: String,
    pub vendor_extensions: VendorExtensions,
}

impl Region {
    pub fn new(
        name: impl Into<String>,
        address_offset: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self {
            name_group: NameGroup::new(name),
            address_offset: address_offset.into(),
            range: range.into(),
            ..Default::default()
        }
    }
}

impl Named for Region {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}
