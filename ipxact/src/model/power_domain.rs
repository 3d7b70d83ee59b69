use super::{NameGroup, Named, Parameter, VendorExtensions};

/// `ipxact:powerDomain` (IP-XACT 2022)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PowerDomain {
    pub name_group: NameGroup,
    /// Expression, nonzero when the domain can never be turned off
    pub always_on: String,
    /// Name of the enclosing power domain
    pub sub_domain_of: String,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: VendorExtensions,
}

impl PowerDomain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Default::default()
        }
    }
}

impl Named for PowerDomain {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}
