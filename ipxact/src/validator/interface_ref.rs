use super::{common::is_valid_is_present, Validator};
use crate::{expression::ExpressionParser, model::InterfaceRef};

/// Validator for an interface reference of a design connection
pub struct InterfaceRefValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> InterfaceRefValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    pub fn has_valid_component_ref(&self, interface: &InterfaceRef) -> bool {
        !interface.component_ref.trim().is_empty()
    }

    pub fn has_valid_bus_ref(&self, interface: &InterfaceRef) -> bool {
        !interface.bus_ref.trim().is_empty()
    }

    pub fn has_valid_is_present(&self, interface: &InterfaceRef) -> bool {
        is_valid_is_present(self.parser, &interface.is_present)
    }
}

impl<'a> Validator<InterfaceRef> for InterfaceRefValidator<'a> {
    fn validate(&self, interface: &InterfaceRef) -> bool {
        self.has_valid_component_ref(interface)
            && self.has_valid_bus_ref(interface)
            && self.has_valid_is_present(interface)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, interface: &InterfaceRef, context: &str) {
        if !self.has_valid_component_ref(interface) {
            errors.push(format!(
                "No component instance reference set for interface in {context}."
            ));
        }
        if !self.has_valid_bus_ref(interface) {
            errors.push(format!(
                "No bus interface reference set for interface of {} in {context}.",
                interface.component_ref
            ));
        }
        if !self.has_valid_is_present(interface) {
            errors.push(format!(
                "Invalid is present expression '{}' set for interface {}.{} in {context}.",
                interface.is_present, interface.component_ref, interface.bus_ref
            ));
        }
    }
}

#[test]
fn interface_ref_validator_works() {
    use crate::{expression::SystemVerilogParser, validator::test_util::errors_of};

    let parser = SystemVerilogParser;
    let validator = InterfaceRefValidator::new(&parser);

    let mut interface = InterfaceRef::new("uart_0", "apb");
    interface.is_present = "1".to_owned();
    assert!(validator.validate(&interface));

    interface.bus_ref = String::new();
    interface.is_present = "3".to_owned();
    assert_eq!(
        errors_of(&validator, &interface, "interconnection bus_1"),
        vec![
            "No bus interface reference set for interface of uart_0 in interconnection bus_1.",
            "Invalid is present expression '3' set for interface uart_0. in interconnection bus_1.",
        ]
    );
    assert!(!validator.validate(&InterfaceRef::new("", "apb")));
}
