use super::{common::is_int_at_least, hierarchical::duplicates_by, Validator};
use crate::{
    expression::ExpressionParser,
    model::{Access, AccessPolicy, ModeReference},
};

/// Validator for `ipxact:accessPolicy`
pub struct AccessPolicyValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> AccessPolicyValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    /// The mode must be named and the priority, when given, must be a non-negative integer
    pub fn has_valid_mode_ref(&self, mode_ref: &ModeReference) -> bool {
        !mode_ref.reference.trim().is_empty()
            && (mode_ref.priority.trim().is_empty()
                || is_int_at_least(self.parser, &mode_ref.priority, 0))
    }

    /// Access, when given, must be one of the standard values
    pub fn has_valid_access(&self, policy: &AccessPolicy) -> bool {
        policy.access.as_ref().map_or(true, Access::is_standard)
    }

    pub fn has_unique_mode_refs(&self, policy: &AccessPolicy) -> bool {
        duplicates_by(&policy.mode_refs, |mode_ref| mode_ref.reference.as_str()).is_empty()
    }
}

impl<'a> Validator<AccessPolicy> for AccessPolicyValidator<'a> {
    fn validate(&self, policy: &AccessPolicy) -> bool {
        policy
            .mode_refs
            .iter()
            .all(|mode_ref| self.has_valid_mode_ref(mode_ref))
            && self.has_unique_mode_refs(policy)
            && self.has_valid_access(policy)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, policy: &AccessPolicy, context: &str) {
        for mode_ref in &policy.mode_refs {
            if mode_ref.reference.trim().is_empty() {
                errors.push(format!(
                    "Mode reference in access policy of {context} must refer to a mode."
                ));
            }
            if !mode_ref.priority.trim().is_empty()
                && !is_int_at_least(self.parser, &mode_ref.priority, 0)
            {
                errors.push(format!(
                    "Invalid priority '{}' set for mode reference {} in access policy of {context}.",
                    mode_ref.priority, mode_ref.reference
                ));
            }
        }
        for name in duplicates_by(&policy.mode_refs, |mode_ref| mode_ref.reference.as_str()) {
            errors.push(format!(
                "Mode {name} is referenced more than once in access policy of {context}."
            ));
        }
        if let Some(access) = policy.access.as_ref().filter(|_| !self.has_valid_access(policy)) {
            errors.push(format!(
                "Invalid access '{}' set in access policy of {context}.",
                access.as_str()
            ));
        }
    }
}

#[test]
fn access_policy_validator_works() {
    use crate::{expression::SystemVerilogParser, validator::test_util::errors_of};

    let parser = SystemVerilogParser;
    let validator = AccessPolicyValidator::new(&parser);

    let mut policy = AccessPolicy {
        mode_refs: vec![
            ModeReference::new("normal", "0"),
            ModeReference::new("debug", ""),
        ],
        access: Some(Access::ReadOnly),
        ..Default::default()
    };
    assert!(validator.validate(&policy));

    policy.mode_refs.push(ModeReference::new("normal", "-1"));
    policy.mode_refs.push(ModeReference::new(" ", "1"));
    policy.access = Some(Access::Other("sometimes".to_owned()));
    assert!(!validator.validate(&policy));
    assert_eq!(
        errors_of(&validator, &policy, "register ctrl"),
        vec![
            "Invalid priority '-1' set for mode reference normal in access policy of register ctrl.",
            "Mode reference in access policy of register ctrl must refer to a mode.",
            "Mode normal is referenced more than once in access policy of register ctrl.",
            "Invalid access 'sometimes' set in access policy of register ctrl.",
        ]
    );
}
