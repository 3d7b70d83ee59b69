use super::{NameGroup, Named, VendorExtensions};

/// `ipxact:channel`: connects mirrored bus interfaces inside a component
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Channel {
    pub name_group: NameGroup,
    pub is_present: String,
    pub bus_interface_refs: Vec<BusInterfaceRef>,
    pub vendor_extensions: VendorExtensions,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Default::default()
        }
    }

    /// Names of the referenced bus interfaces, in document order
    pub fn interfaces(&self) -> Vec<&str> {
        self.bus_interface_refs
            .iter()
            .map(|r| r.local_name.as_str())
            .collect()
    }

    pub fn set_interfaces<S: AsRef<str>>(&mut self, names: &[S]) {
        self.bus_interface_refs = names
            .iter()
            .map(|name| BusInterfaceRef::new(name.as_ref()))
            .collect();
    }
}

impl Named for Channel {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}

/// `ipxact:busInterfaceRef` within a channel
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusInterfaceRef {
    pub local_name: String,
    pub is_present: String,
    pub vendor_extensions: VendorExtensions,
}

impl BusInterfaceRef {
    pub fn new(local_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            ..Default::default()
        }
    }
}
