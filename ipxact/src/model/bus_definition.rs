use super::{NameGroup, Named, Parameter, VendorExtensions, Vlnv};

/// `ipxact:busDefinition`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusDefinition {
    pub vlnv: Vlnv,
    /// IP-XACT 2022 only
    pub display_name: String,
    /// IP-XACT 2022 only
    pub short_description: String,
    pub description: String,
    pub direct_connection: bool,
    pub broadcast: super::BooleanValue,
    pub is_addressable: bool,
    /// The bus definition this one extends
    pub extends: Option<Vlnv>,
    /// Expression. Written as `maxInitiators` in IP-XACT 2022.
    pub max_masters: String,
    /// Expression. Written as `maxTargets` in IP-XACT 2022.
    pub max_slaves: String,
    pub system_group_names: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub assertions: Vec<Assertion>,
    pub vendor_extensions: VendorExtensions,
}

impl BusDefinition {
    pub fn new(vlnv: Vlnv) -> Self {
        Self {
            vlnv,
            ..Default::default()
        }
    }
}

/// `ipxact:assertion`: an expression that must hold for the parameter values of the containing
/// element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assertion {
    pub name_group: NameGroup,
    pub assert: String,
    pub vendor_extensions: VendorExtensions,
}

impl Assertion {
    pub fn new(name: impl Into<String>, assert: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            assert: assert.into(),
            ..Default::default()
        }
    }
}

impl Named for Assertion {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}
