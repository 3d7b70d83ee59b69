use super::Validator;
use crate::{
    expression::ExpressionParser,
    model::{FieldReference, FieldReferenceKind, FieldReset},
};

/// Validator for `ipxact:reset` of a field
pub struct FieldResetValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> FieldResetValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    /// The reset value is mandatory
    pub fn has_valid_reset_value(&self, reset: &FieldReset) -> bool {
        !reset.reset_value.trim().is_empty() && self.parser.is_valid_expression(&reset.reset_value)
    }

    pub fn has_valid_reset_mask(&self, reset: &FieldReset) -> bool {
        self.parser.is_valid_expression(&reset.reset_mask)
    }
}

impl<'a> Validator<FieldReset> for FieldResetValidator<'a> {
    fn validate(&self, reset: &FieldReset) -> bool {
        self.has_valid_reset_value(reset) && self.has_valid_reset_mask(reset)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, reset: &FieldReset, context: &str) {
        if !self.has_valid_reset_value(reset) {
            errors.push(format!(
                "Invalid reset value '{}' set for {context}.",
                reset.reset_value
            ));
        }
        if !self.has_valid_reset_mask(reset) {
            errors.push(format!(
                "Invalid reset mask '{}' set for {context}.",
                reset.reset_mask
            ));
        }
    }
}

/// Validator for a field reference group
///
/// A reference starts either from an address space or from a memory map (optionally through a
/// remap), and always ends at a field.
pub struct FieldReferenceValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> FieldReferenceValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    pub fn has_single_root(&self, reference: &FieldReference) -> bool {
        let from_space = reference
            .reference(FieldReferenceKind::AddressSpace)
            .is_some();
        let from_map = reference.reference(FieldReferenceKind::MemoryMap).is_some()
            || reference
                .reference(FieldReferenceKind::MemoryRemap)
                .is_some();
        !(from_space && from_map)
    }

    pub fn has_field(&self, reference: &FieldReference) -> bool {
        reference.reference(FieldReferenceKind::Field).is_some()
    }

    /// Every referenced name is given and every index is a valid expression
    pub fn has_valid_references(&self, reference: &FieldReference) -> bool {
        reference.iter().all(|(_, indexed)| {
            !indexed.reference.trim().is_empty()
                && indexed
                    .indices
                    .iter()
                    .all(|index| self.has_valid_index(index))
        })
    }

    fn has_valid_index(&self, index: &str) -> bool {
        !index.trim().is_empty() && self.parser.is_valid_expression(index)
    }
}

impl<'a> Validator<FieldReference> for FieldReferenceValidator<'a> {
    fn validate(&self, reference: &FieldReference) -> bool {
        self.has_single_root(reference)
            && self.has_field(reference)
            && self.has_valid_references(reference)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, reference: &FieldReference, context: &str) {
        if !self.has_single_root(reference) {
            errors.push(format!(
                "Field reference in {context} cannot contain both an address space reference \
                 and a memory map or memory remap reference."
            ));
        }
        if !self.has_field(reference) {
            errors.push(format!(
                "Field reference in {context} must contain a reference to a field."
            ));
        }
        for (kind, indexed) in reference.iter() {
            if indexed.reference.trim().is_empty() {
                errors.push(format!(
                    "Empty {} set for field reference in {context}.",
                    kind.tag()
                ));
            }
            for index in indexed
                .indices
                .iter()
                .filter(|index| !self.has_valid_index(index))
            {
                errors.push(format!(
                    "Invalid index '{index}' set for {} {} in field reference in {context}.",
                    kind.tag(),
                    indexed.reference
                ));
            }
        }
    }
}
