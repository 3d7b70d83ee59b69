use super::{InterfaceRef, NameGroup, Named, Parameter, VendorExtensions, Vlnv};

/// `ipxact:design`: instances of components and the connections between their bus interfaces
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Design {
    pub vlnv: Vlnv,
    /// Written in IP-XACT 2022 only, like in a component
    pub display_name: String,
    pub short_description: String,
    pub description: String,
    pub component_instances: Vec<ComponentInstance>,
    pub interconnections: Vec<Interconnection>,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: VendorExtensions,
}

impl Design {
    pub fn new(vlnv: Vlnv) -> Self {
        Self {
            vlnv,
            ..Default::default()
        }
    }
}

/// `ipxact:componentInstance`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentInstance {
    /// `instanceName` is the name of the group
    pub name_group: NameGroup,
    pub is_present: String,
    /// Instantiated component, `ipxact:componentRef`
    pub component_ref: Vlnv,
    pub vendor_extensions: VendorExtensions,
}

impl ComponentInstance {
    pub fn new(name: impl Into<String>, component_ref: Vlnv) -> Self {
        Self {
            name_group: NameGroup::new(name),
            component_ref,
            ..Default::default()
        }
    }
}

impl Named for ComponentInstance {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}

/// `ipxact:interconnection` between bus interfaces of component instances
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interconnection {
    pub name_group: NameGroup,
    pub is_present: String,
    pub active_interfaces: Vec<InterfaceRef>,
    pub vendor_extensions: VendorExtensions,
}

impl Interconnection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Default::default()
        }
    }

    pub fn with_interface(mut self, interface: InterfaceRef) -> Self {
        self.active_interfaces.push(interface);
        self
    }
}

impl Named for Interconnection {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}
