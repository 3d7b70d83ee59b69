use super::VendorExtensions;

/// An endpoint of a connection in a design, referencing a bus interface of an instance
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceRef {
    /// Instance name. Spelled `componentRef` in IP-XACT 2014 and `componentInstanceRef` in 2022.
    pub component_ref: String,
    pub bus_ref: String,
    pub is_present: String,
    pub vendor_extensions: VendorExtensions,
}

impl InterfaceRef {
    pub fn new(component_ref: impl Into<String>, bus_ref: impl Into<String>) -> Self {
        Self {
            component_ref: component_ref.into(),
            bus_ref: bus_ref.into(),
            ..Default::default()
        }
    }
}
