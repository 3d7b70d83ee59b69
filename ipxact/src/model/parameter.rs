use super::{NameGroup, Named, VendorExtensions};

/// `ipxact:parameter`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameter {
    pub name_group: NameGroup,
    /// Unique identifier other expressions use to reference this parameter
    pub parameter_id: String,
    pub prompt: String,
    /// Data type, one of the SystemVerilog types `bit`, `byte`, `int`, `real`, `string`, ... or
    /// empty
    pub type_: String,
    /// `immediate`, `user` or `generated`, empty when not given
    pub resolve: String,
    pub minimum: String,
    pub maximum: String,
    pub value: String,
    pub vendor_extensions: VendorExtensions,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, parameter_id: impl Into<String>) -> Self {
        self.parameter_id = parameter_id.into();
        self
    }
}

impl Named for Parameter {
    fn name_group(&self) -> &NameGroup {
        &self.name_group
    }
}

/// Values accepted for [`Parameter::type_`]
pub const PARAMETER_TYPES: [&str; 9] = [
    "", "bit", "byte", "shortint", "int", "longint", "shortreal", "real", "string",
];

/// Values accepted for [`Parameter::resolve`]
pub const PARAMETER_RESOLVES: [&str; 4] = ["", "immediate", "user", "generated"];
