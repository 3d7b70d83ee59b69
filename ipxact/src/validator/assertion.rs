use super::{common::has_valid_name, Validator};
use crate::{
    expression::{ExpressionParser, Value},
    model::Assertion,
};

/// Validator for `ipxact:assertion`
///
/// An assertion holds when its expression evaluates to a nonzero number.
pub struct AssertionValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> AssertionValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    pub fn has_valid_name(&self, assertion: &Assertion) -> bool {
        has_valid_name(&assertion.name_group.name)
    }

    pub fn has_valid_assert(&self, assertion: &Assertion) -> bool {
        match self.parser.parse_expression(&assertion.assert) {
            Ok(Value::Int(v)) => v != 0,
            Ok(Value::Real(v)) => v != 0.0,
            _ => false,
        }
    }
}

impl<'a> Validator<Assertion> for AssertionValidator<'a> {
    fn validate(&self, assertion: &Assertion) -> bool {
        self.has_valid_name(assertion) && self.has_valid_assert(assertion)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, assertion: &Assertion, context: &str) {
        let name = &assertion.name_group.name;
        if !self.has_valid_name(assertion) {
            errors.push(format!(
                "Invalid name '{name}' set for assertion within {context}."
            ));
        }
        if !self.has_valid_assert(assertion) {
            errors.push(format!(
                "Invalid assert '{}' set for assertion {name} within {context}.",
                assertion.assert
            ));
        }
    }
}

#[test]
fn assertion_validator_works() {
    use crate::{expression::SystemVerilogParser, validator::test_util::errors_of};

    let parser = SystemVerilogParser;
    let validator = AssertionValidator::new(&parser);
    assert!(validator.validate(&Assertion::new("widthIsEven", "8 % 2 == 0")));
    assert!(!validator.validate(&Assertion::new("widthIsOdd", "8 % 2 == 1")));
    assert!(!validator.validate(&Assertion::new("empty", "")));

    assert_eq!(
        errors_of(&validator, &Assertion::new("", "1 +"), "bus definition b"),
        vec![
            "Invalid name '' set for assertion within bus definition b.",
            "Invalid assert '1 +' set for assertion  within bus definition b.",
        ]
    );
}
