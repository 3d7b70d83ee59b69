use super::{
    common::{has_valid_name, is_valid_is_present},
    duplicate_names, HierarchicalValidator, ParameterValidator, Validator,
};
use crate::{
    expression::ExpressionParser,
    model::{EntityId, Named, PowerDomain},
};

/// Validator for `ipxact:powerDomain`
///
/// Constructed with the power domains of the containing component, which are the valid targets of
/// `subDomainOf`.
pub struct PowerDomainValidator<'a> {
    parser: &'a dyn ExpressionParser,
    parameter_validator: ParameterValidator<'a>,
    hierarchy: HierarchicalValidator,
    domain_names: Vec<String>,
}

impl<'a> PowerDomainValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser, domains: &[PowerDomain]) -> Self {
        Self {
            parser,
            parameter_validator: ParameterValidator::new(parser),
            hierarchy: HierarchicalValidator::new(),
            domain_names: domains.iter().map(|d| d.name().to_owned()).collect(),
        }
    }

    pub fn has_valid_name(&self, domain: &PowerDomain) -> bool {
        has_valid_name(domain.name())
    }

    /// `alwaysOn` is a boolean expression, see [`is_valid_is_present`]
    pub fn has_valid_always_on(&self, domain: &PowerDomain) -> bool {
        is_valid_is_present(self.parser, &domain.always_on)
    }

    /// The enclosing domain must be another known domain
    pub fn has_valid_sub_domain_of(&self, domain: &PowerDomain) -> bool {
        let parent = domain.sub_domain_of.trim();
        parent.is_empty()
            || (parent != domain.name().trim()
                && self.domain_names.iter().any(|name| name.trim() == parent))
    }

    pub fn has_valid_parameters(&self, domain: &PowerDomain) -> bool {
        duplicate_names(&domain.parameters).is_empty()
            && domain
                .parameters
                .iter()
                .all(|parameter| self.parameter_validator.validate(parameter))
    }

    /// Returns false if the last check of a power domain found the parameter `id` to share its
    /// name with a sibling
    pub fn is_child_valid(&self, id: EntityId) -> bool {
        self.hierarchy.is_child_valid(id)
    }
}

impl<'a> Validator<PowerDomain> for PowerDomainValidator<'a> {
    fn validate(&self, domain: &PowerDomain) -> bool {
        self.hierarchy.children_have_unique_names(&domain.parameters);
        self.has_valid_name(domain)
            && self.has_valid_always_on(domain)
            && self.has_valid_sub_domain_of(domain)
            && self.has_valid_parameters(domain)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, domain: &PowerDomain, context: &str) {
        self.hierarchy.children_have_unique_names(&domain.parameters);
        let name = domain.name();
        if !self.has_valid_name(domain) {
            errors.push(format!(
                "Invalid name '{name}' set for power domain within {context}."
            ));
        }
        if !self.has_valid_always_on(domain) {
            errors.push(format!(
                "Invalid always on expression '{}' set for power domain {name} within {context}.",
                domain.always_on
            ));
        }
        if !self.has_valid_sub_domain_of(domain) {
            errors.push(format!(
                "Power domain {name} within {context} is a sub domain of unknown power domain '{}'.",
                domain.sub_domain_of
            ));
        }

        let parameter_context = format!("power domain {name}");
        for duplicate in duplicate_names(&domain.parameters) {
            errors.push(format!(
                "Parameter name {duplicate} within {parameter_context} is not unique."
            ));
        }
        for parameter in &domain.parameters {
            self.parameter_validator
                .find_errors_in(errors, parameter, &parameter_context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expression::SystemVerilogParser, model::Parameter, validator::test_util::errors_of,
    };

    #[test]
    fn sub_domain_must_exist() {
        let mut core = PowerDomain::new("core");
        core.sub_domain_of = "top".to_owned();
        let top = PowerDomain::new("top");
        let domains = vec![core.clone(), top];

        let parser = SystemVerilogParser;
        let validator = PowerDomainValidator::new(&parser, &domains);
        assert!(validator.validate(&core));

        core.sub_domain_of = "missing".to_owned();
        assert!(!validator.validate(&core));
        core.sub_domain_of = "core".to_owned();
        assert!(!validator.has_valid_sub_domain_of(&core));
    }

    #[test]
    fn every_cause_is_reported() {
        let mut domain = PowerDomain::new("pd");
        domain.always_on = "2".to_owned();
        domain.sub_domain_of = "other".to_owned();
        domain.parameters = vec![Parameter::new("p", "1"), Parameter::new("p", "2")];

        let parser = SystemVerilogParser;
        let validator = PowerDomainValidator::new(&parser, std::slice::from_ref(&domain));
        assert!(!validator.validate(&domain));
        assert_eq!(
            errors_of(&validator, &domain, "component c"),
            vec![
                "Invalid always on expression '2' set for power domain pd within component c.",
                "Power domain pd within component c is a sub domain of unknown power domain 'other'.",
                "Parameter name p within power domain pd is not unique.",
            ]
        );
        assert!(!validator.is_child_valid(domain.parameters[1].name_group.id()));
    }
}
