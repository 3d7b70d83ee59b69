use log::warn;

use super::{
    common::is_optional_int_at_least, duplicate_names, AssertionValidator, HierarchicalValidator,
    ParameterValidator, Validator,
};
use crate::{
    expression::ExpressionParser,
    library::DocumentResolver,
    model::{BusDefinition, DocumentKind, EntityId},
};

/// Validator for `ipxact:busDefinition`
///
/// The extended bus definition is looked up through the [`DocumentResolver`].
pub struct BusDefinitionValidator<'a> {
    parser: &'a dyn ExpressionParser,
    resolver: &'a dyn DocumentResolver,
    parameter_validator: ParameterValidator<'a>,
    assertion_validator: AssertionValidator<'a>,
    hierarchy: HierarchicalValidator,
}

impl<'a> BusDefinitionValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser, resolver: &'a dyn DocumentResolver) -> Self {
        Self {
            parser,
            resolver,
            parameter_validator: ParameterValidator::new(parser),
            assertion_validator: AssertionValidator::new(parser),
            hierarchy: HierarchicalValidator::new(),
        }
    }

    pub fn has_valid_vlnv(&self, bus: &BusDefinition) -> bool {
        bus.vlnv.is_valid()
    }

    pub fn has_valid_max_masters(&self, bus: &BusDefinition) -> bool {
        is_optional_int_at_least(self.parser, &bus.max_masters, 0)
    }

    pub fn has_valid_max_slaves(&self, bus: &BusDefinition) -> bool {
        is_optional_int_at_least(self.parser, &bus.max_slaves, 0)
    }

    /// The extended definition must be another bus definition known to the resolver
    pub fn has_valid_extend(&self, bus: &BusDefinition) -> bool {
        let Some(extends) = &bus.extends else {
            return true;
        };
        if *extends == bus.vlnv || !extends.is_valid() {
            return false;
        }
        match self.resolver.resolve(extends) {
            Some(document) => matches!(document.kind, DocumentKind::BusDefinition(_)),
            None => {
                warn!("{} extends {extends}, which was not found", bus.vlnv);
                false
            }
        }
    }

    pub fn has_valid_system_group_names(&self, bus: &BusDefinition) -> bool {
        bus.system_group_names
            .iter()
            .all(|name| !name.trim().is_empty())
    }

    pub fn has_valid_parameters(&self, bus: &BusDefinition) -> bool {
        duplicate_names(&bus.parameters).is_empty()
            && bus
                .parameters
                .iter()
                .all(|parameter| self.parameter_validator.validate(parameter))
    }

    pub fn has_valid_assertions(&self, bus: &BusDefinition) -> bool {
        duplicate_names(&bus.assertions).is_empty()
            && bus
                .assertions
                .iter()
                .all(|assertion| self.assertion_validator.validate(assertion))
    }

    /// Returns false if the last check of a bus definition found the parameter or assertion `id`
    /// to share its name with a sibling
    pub fn is_child_valid(&self, id: EntityId) -> bool {
        self.hierarchy.is_child_valid(id)
    }

    fn record_child_validities(&self, bus: &BusDefinition) {
        self.hierarchy.clear();
        self.hierarchy.record_unique_names(&bus.parameters);
        self.hierarchy.record_unique_names(&bus.assertions);
    }
}

impl<'a> Validator<BusDefinition> for BusDefinitionValidator<'a> {
    fn validate(&self, bus: &BusDefinition) -> bool {
        self.record_child_validities(bus);
        self.has_valid_vlnv(bus)
            && self.has_valid_max_masters(bus)
            && self.has_valid_max_slaves(bus)
            && self.has_valid_extend(bus)
            && self.has_valid_system_group_names(bus)
            && self.has_valid_parameters(bus)
            && self.has_valid_assertions(bus)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, bus: &BusDefinition, context: &str) {
        self.record_child_validities(bus);
        let vlnv = &bus.vlnv;
        if !self.has_valid_vlnv(bus) {
            errors.push(format!(
                "The type of the bus definition within {context} is not valid: {vlnv}."
            ));
        }
        if !self.has_valid_max_masters(bus) {
            errors.push(format!(
                "Invalid maximum number of initiators '{}' set for bus definition {vlnv}.",
                bus.max_masters
            ));
        }
        if !self.has_valid_max_slaves(bus) {
            errors.push(format!(
                "Invalid maximum number of targets '{}' set for bus definition {vlnv}.",
                bus.max_slaves
            ));
        }
        if let Some(extends) = &bus.extends {
            if !self.has_valid_extend(bus) {
                errors.push(format!(
                    "Could not find extended bus definition {extends} for bus definition {vlnv}."
                ));
            }
        }
        if !self.has_valid_system_group_names(bus) {
            errors.push(format!(
                "Empty system group name set for bus definition {vlnv}."
            ));
        }

        let child_context = format!("bus definition {vlnv}");
        for name in duplicate_names(&bus.parameters) {
            errors.push(format!(
                "Parameter name {name} within {child_context} is not unique."
            ));
        }
        for parameter in &bus.parameters {
            self.parameter_validator
                .find_errors_in(errors, parameter, &child_context);
        }
        for name in duplicate_names(&bus.assertions) {
            errors.push(format!(
                "Assertion name {name} within {child_context} is not unique."
            ));
        }
        for assertion in &bus.assertions {
            self.assertion_validator
                .find_errors_in(errors, assertion, &child_context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expression::SystemVerilogParser,
        library::MemoryLibrary,
        model::{Assertion, Component, Parameter, Vlnv},
        validator::test_util::errors_of,
    };

    fn apb() -> BusDefinition {
        BusDefinition::new(Vlnv::new("tuni.fi", "interface", "apb", "1.0"))
    }

    #[test]
    fn minimal_bus_is_valid() {
        let parser = SystemVerilogParser;
        let validator = BusDefinitionValidator::new(&parser, &());
        let mut bus = apb();
        bus.max_masters = "1".to_owned();
        bus.system_group_names = vec!["system".to_owned()];
        assert!(validator.validate(&bus));
        assert!(errors_of(&validator, &bus, "test").is_empty());
    }

    #[test]
    fn extends_must_resolve_to_bus_definition() {
        let base = Vlnv::new("tuni.fi", "interface", "base", "1.0");
        let component = Vlnv::new("tuni.fi", "ip", "uart", "1.0");
        let mut library = MemoryLibrary::new();
        library.insert(BusDefinition::new(base.clone()).into());
        library.insert(Component::new(component.clone()).into());

        let parser = SystemVerilogParser;
        let validator = BusDefinitionValidator::new(&parser, &library);

        let mut bus = apb();
        bus.extends = Some(base);
        assert!(validator.has_valid_extend(&bus));

        bus.extends = Some(component);
        assert!(!validator.has_valid_extend(&bus));

        bus.extends = Some(bus.vlnv.clone());
        assert!(!validator.has_valid_extend(&bus));

        bus.extends = Some(Vlnv::new("tuni.fi", "interface", "missing", "1.0"));
        assert_eq!(
            errors_of(&validator, &bus, "test"),
            vec![
                "Could not find extended bus definition tuni.fi:interface:missing:1.0 for bus \
                 definition tuni.fi:interface:apb:1.0."
            ]
        );
    }

    #[test]
    fn every_cause_is_reported() {
        let parser = SystemVerilogParser;
        let validator = BusDefinitionValidator::new(&parser, &());

        let mut bus = BusDefinition::new(Vlnv::new("tuni.fi", "", "apb", "1.0"));
        bus.max_masters = "-1".to_owned();
        bus.max_slaves = "many".to_owned();
        bus.system_group_names = vec![" ".to_owned()];
        bus.parameters = vec![Parameter::new("width", "8"), Parameter::new("width", "16")];
        bus.assertions = vec![Assertion::new("check", "0")];

        assert!(!validator.validate(&bus));
        assert_eq!(
            errors_of(&validator, &bus, "test"),
            vec![
                "The type of the bus definition within test is not valid: tuni.fi::apb:1.0.",
                "Invalid maximum number of initiators '-1' set for bus definition tuni.fi::apb:1.0.",
                "Invalid maximum number of targets 'many' set for bus definition tuni.fi::apb:1.0.",
                "Empty system group name set for bus definition tuni.fi::apb:1.0.",
                "Parameter name width within bus definition tuni.fi::apb:1.0 is not unique.",
                "Invalid assert '0' set for assertion check within bus definition tuni.fi::apb:1.0.",
            ]
        );
        assert!(!validator.is_child_valid(bus.parameters[0].name_group.id()));
        assert!(!validator.is_child_valid(bus.parameters[1].name_group.id()));
        assert!(validator.is_child_valid(bus.assertions[0].name_group.id()));
    }
}
