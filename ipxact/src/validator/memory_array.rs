use super::{common::is_int_at_least, Validator};
use crate::{
    expression::ExpressionParser,
    model::{Dimension, MemoryArray},
};

/// Validator for the `ipxact:array` of a memory element or a field
///
/// Every dimension must evaluate to a positive integer. The stride is optional but must be a
/// non-negative integer when given.
pub struct MemoryArrayValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> MemoryArrayValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    pub fn has_valid_dimension(&self, dimension: &Dimension) -> bool {
        is_int_at_least(self.parser, &dimension.value, 1)
    }

    pub fn has_valid_dimensions(&self, array: &MemoryArray) -> bool {
        !array.dimensions.is_empty()
            && array
                .dimensions
                .iter()
                .all(|dim| self.has_valid_dimension(dim))
    }

    pub fn has_valid_stride(&self, array: &MemoryArray) -> bool {
        array.stride.trim().is_empty() || is_int_at_least(self.parser, &array.stride, 0)
    }
}

impl<'a> Validator<MemoryArray> for MemoryArrayValidator<'a> {
    fn validate(&self, array: &MemoryArray) -> bool {
        self.has_valid_dimensions(array) && self.has_valid_stride(array)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, array: &MemoryArray, context: &str) {
        if array.dimensions.is_empty() {
            errors.push(format!("No dimensions set for array of {context}."));
        }
        for dim in &array.dimensions {
            if !self.has_valid_dimension(dim) {
                errors.push(format!(
                    "Invalid array dimension '{}' set for {context}.",
                    dim.value
                ));
            }
        }
        if !self.has_valid_stride(array) {
            errors.push(format!(
                "Invalid array stride '{}' set for {context}.",
                array.stride
            ));
        }
    }
}

#[test]
fn memory_array_validator_works() {
    use crate::{expression::SystemVerilogParser, validator::test_util::errors_of};

    let parser = SystemVerilogParser;
    let validator = MemoryArrayValidator::new(&parser);
    let mut array = MemoryArray {
        dimensions: vec![Dimension::new("4"), Dimension::new("2*2")],
        stride: "32".to_owned(),
    };
    assert!(validator.validate(&array));

    array.dimensions.push(Dimension::new("0"));
    array.stride = "x".to_owned();
    assert!(!validator.validate(&array));
    assert_eq!(
        errors_of(&validator, &array, "register status"),
        vec![
            "Invalid array dimension '0' set for register status.",
            "Invalid array stride 'x' set for register status.",
        ]
    );

    assert_eq!(
        errors_of(&validator, &MemoryArray::default(), "field f"),
        vec!["No dimensions set for array of field f."]
    );
}
