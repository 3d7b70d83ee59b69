use super::{
    common::{has_valid_name, is_valid_is_present},
    duplicate_names, HierarchicalValidator, InterfaceRefValidator, ParameterValidator, Validator,
};
use crate::{
    expression::ExpressionParser,
    model::{ComponentInstance, Design, EntityId, Interconnection, InterfaceRef},
};

/// Validator for `ipxact:design`
///
/// Interconnections may only refer to instances of the same design. Whether the referenced bus
/// interfaces exist on the instantiated components is not checked.
pub struct DesignValidator<'a> {
    parser: &'a dyn ExpressionParser,
    interface_validator: InterfaceRefValidator<'a>,
    parameter_validator: ParameterValidator<'a>,
    hierarchy: HierarchicalValidator,
}

impl<'a> DesignValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self {
            parser,
            interface_validator: InterfaceRefValidator::new(parser),
            parameter_validator: ParameterValidator::new(parser),
            hierarchy: HierarchicalValidator::new(),
        }
    }

    pub fn has_valid_vlnv(&self, design: &Design) -> bool {
        design.vlnv.is_valid()
    }

    pub fn is_valid_instance(&self, instance: &ComponentInstance) -> bool {
        has_valid_name(&instance.name_group.name)
            && is_valid_is_present(self.parser, &instance.is_present)
            && instance.component_ref.is_valid()
    }

    pub fn has_valid_component_instances(&self, design: &Design) -> bool {
        duplicate_names(&design.component_instances).is_empty()
            && design
                .component_instances
                .iter()
                .all(|instance| self.is_valid_instance(instance))
    }

    /// Returns true if `interface` refers to an instance of `design`
    pub fn has_known_instance(&self, design: &Design, interface: &InterfaceRef) -> bool {
        let instance = interface.component_ref.trim();
        design
            .component_instances
            .iter()
            .any(|candidate| candidate.name_group.name.trim() == instance)
    }

    /// An interconnection joins at least two valid interfaces of instances in the design
    pub fn is_valid_interconnection(&self, design: &Design, connection: &Interconnection) -> bool {
        has_valid_name(&connection.name_group.name)
            && is_valid_is_present(self.parser, &connection.is_present)
            && connection.active_interfaces.len() >= 2
            && connection.active_interfaces.iter().all(|interface| {
                self.interface_validator.validate(interface)
                    && self.has_known_instance(design, interface)
            })
    }

    pub fn has_valid_interconnections(&self, design: &Design) -> bool {
        duplicate_names(&design.interconnections).is_empty()
            && design
                .interconnections
                .iter()
                .all(|connection| self.is_valid_interconnection(design, connection))
    }

    pub fn has_valid_parameters(&self, design: &Design) -> bool {
        duplicate_names(&design.parameters).is_empty()
            && design
                .parameters
                .iter()
                .all(|parameter| self.parameter_validator.validate(parameter))
    }

    /// Returns false if the last check of a design found the instance, interconnection or
    /// parameter `id` to share its name with a sibling
    pub fn is_child_valid(&self, id: EntityId) -> bool {
        self.hierarchy.is_child_valid(id)
    }

    fn record_child_validities(&self, design: &Design) {
        self.hierarchy.clear();
        self.hierarchy
            .record_unique_names(&design.component_instances);
        self.hierarchy.record_unique_names(&design.interconnections);
        self.hierarchy.record_unique_names(&design.parameters);
    }

    fn find_interconnection_errors(
        &self,
        errors: &mut Vec<String>,
        design: &Design,
        connection: &Interconnection,
        context: &str,
    ) {
        let name = &connection.name_group.name;
        if !has_valid_name(name) {
            errors.push(format!(
                "Invalid name '{name}' set for interconnection within {context}."
            ));
        }
        if !is_valid_is_present(self.parser, &connection.is_present) {
            errors.push(format!(
                "Is present expression '{}' in interconnection {name} is invalid.",
                connection.is_present
            ));
        }
        if connection.active_interfaces.len() < 2 {
            errors.push(format!(
                "Interconnection {name} within {context} must connect at least two interfaces."
            ));
        }

        let connection_context = format!("interconnection {name}");
        for interface in &connection.active_interfaces {
            self.interface_validator
                .find_errors_in(errors, interface, &connection_context);
            if !interface.component_ref.trim().is_empty()
                && !self.has_known_instance(design, interface)
            {
                errors.push(format!(
                    "Component instance {} referenced in {connection_context} does not exist \
                     within {context}.",
                    interface.component_ref
                ));
            }
        }
    }
}

impl<'a> Validator<Design> for DesignValidator<'a> {
    fn validate(&self, design: &Design) -> bool {
        self.record_child_validities(design);
        self.has_valid_vlnv(design)
            && self.has_valid_component_instances(design)
            && self.has_valid_interconnections(design)
            && self.has_valid_parameters(design)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, design: &Design, context: &str) {
        self.record_child_validities(design);
        if !self.has_valid_vlnv(design) {
            errors.push(format!(
                "The type of the design within {context} is not valid: {}.",
                design.vlnv
            ));
        }
        let context = format!("design {}", design.vlnv);

        for duplicate in duplicate_names(&design.component_instances) {
            errors.push(format!(
                "Component instance name {duplicate} within {context} is not unique."
            ));
        }
        for instance in &design.component_instances {
            let name = &instance.name_group.name;
            if !has_valid_name(name) {
                errors.push(format!(
                    "Invalid name '{name}' set for component instance within {context}."
                ));
            }
            if !is_valid_is_present(self.parser, &instance.is_present) {
                errors.push(format!(
                    "Is present expression '{}' in component instance {name} is invalid.",
                    instance.is_present
                ));
            }
            if !instance.component_ref.is_valid() {
                errors.push(format!(
                    "Invalid component reference {} set for component instance {name} within \
                     {context}.",
                    instance.component_ref
                ));
            }
        }

        for duplicate in duplicate_names(&design.interconnections) {
            errors.push(format!(
                "Interconnection name {duplicate} within {context} is not unique."
            ));
        }
        for connection in &design.interconnections {
            self.find_interconnection_errors(errors, design, connection, &context);
        }

        for duplicate in duplicate_names(&design.parameters) {
            errors.push(format!(
                "Parameter name {duplicate} within {context} is not unique."
            ));
        }
        for parameter in &design.parameters {
            self.parameter_validator
                .find_errors_in(errors, parameter, &context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expression::SystemVerilogParser, model::Vlnv, validator::test_util::errors_of};

    fn soc() -> Design {
        let mut design = Design::new(Vlnv::new("tuni.fi", "soc", "top.design", "1.0"));
        design.component_instances = vec![
            ComponentInstance::new("cpu_0", Vlnv::new("tuni.fi", "ip", "cpu", "1.0")),
            ComponentInstance::new("uart_0", Vlnv::new("tuni.fi", "ip", "uart", "1.0")),
        ];
        design.interconnections = vec![Interconnection::new("apb_0")
            .with_interface(InterfaceRef::new("cpu_0", "apb_m"))
            .with_interface(InterfaceRef::new("uart_0", "apb"))];
        design
    }

    #[test]
    fn connected_design_is_valid() {
        let parser = SystemVerilogParser;
        let validator = DesignValidator::new(&parser);
        assert!(validator.validate(&soc()));
        assert!(errors_of(&validator, &soc(), "top.xml").is_empty());
    }

    #[test]
    fn interconnections_are_checked() {
        let parser = SystemVerilogParser;
        let validator = DesignValidator::new(&parser);

        let mut design = soc();
        design.interconnections.push(
            Interconnection::new("apb_0")
                .with_interface(InterfaceRef::new("gpio_0", "apb"))
                .with_interface(InterfaceRef::new("uart_0", "")),
        );
        design.interconnections.push(
            Interconnection::new("dangling").with_interface(InterfaceRef::new("cpu_0", "irq")),
        );

        assert!(!validator.validate(&design));
        assert_eq!(
            errors_of(&validator, &design, "top.xml"),
            vec![
                "Interconnection name apb_0 within design tuni.fi:soc:top.design:1.0 is not unique.",
                "Component instance gpio_0 referenced in interconnection apb_0 does not exist \
                 within design tuni.fi:soc:top.design:1.0.",
                "No bus interface reference set for interface of uart_0 in interconnection apb_0.",
                "Interconnection dangling within design tuni.fi:soc:top.design:1.0 must connect \
                 at least two interfaces.",
            ]
        );
        assert!(!validator.is_child_valid(design.interconnections[0].name_group.id()));
        assert!(validator.is_child_valid(design.interconnections[2].name_group.id()));
    }

    #[test]
    fn instances_are_checked() {
        let parser = SystemVerilogParser;
        let validator = DesignValidator::new(&parser);

        let mut design = soc();
        design.vlnv.version = String::new();
        design
            .component_instances
            .push(ComponentInstance::new("uart_0", Vlnv::new("tuni.fi", "ip", "", "1.0")));

        assert!(!validator.validate(&design));
        assert_eq!(
            errors_of(&validator, &design, "top.xml"),
            vec![
                "The type of the design within top.xml is not valid: tuni.fi:soc:top.design:.",
                "Component instance name uart_0 within design tuni.fi:soc:top.design: is not \
                 unique.",
                "Invalid component reference tuni.fi:ip::1.0 set for component instance uart_0 \
                 within design tuni.fi:soc:top.design:.",
            ]
        );
        assert!(!validator.is_child_valid(design.component_instances[1].name_group.id()));
        assert!(validator.is_child_valid(design.component_instances[0].name_group.id()));
    }
}
