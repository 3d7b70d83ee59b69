/// `ipxact:reset` of a field
///
/// The three parts are independent. Whether the mask fits the value is not judged here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldReset {
    /// Name of the reset type, empty for the default `HARD` reset
    pub reset_type_reference: String,
    pub reset_value: String,
    pub reset_mask: String,
}

impl FieldReset {
    pub fn new(reset_value: impl Into<String>) -> Self {
        Self {
            reset_value: reset_value.into(),
            ..Default::default()
        }
    }
}
