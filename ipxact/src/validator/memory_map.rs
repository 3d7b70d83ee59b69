use super::{
    common::{has_valid_name, is_int_at_least, is_optional_int_at_least, is_valid_is_present},
    duplicate_names,
    hierarchical::duplicates_by,
    AccessPolicyValidator, FieldReferenceValidator, FieldResetValidator, MemoryArrayValidator,
    ParameterValidator, Validator,
};
use crate::{
    expression::ExpressionParser,
    model::{AddressBlock, ArrayableMemory, Field, FieldReset, MemoryMap, Parameter, Register},
};

/// Reset type of a reset, the default `HARD` reset when no type is referenced
fn reset_type(reset: &FieldReset) -> &str {
    match reset.reset_type_reference.trim() {
        "" => "HARD",
        reference => reference,
    }
}

/// Parameters shared by all memory elements: unique names, each valid
fn has_valid_parameters(validator: &ParameterValidator, parameters: &[Parameter]) -> bool {
    duplicate_names(parameters).is_empty()
        && parameters
            .iter()
            .all(|parameter| validator.validate(parameter))
}

fn find_parameter_errors(
    errors: &mut Vec<String>,
    validator: &ParameterValidator,
    parameters: &[Parameter],
    context: &str,
) {
    for duplicate in duplicate_names(parameters) {
        errors.push(format!(
            "Parameter name {duplicate} within {context} is not unique."
        ));
    }
    for parameter in parameters {
        validator.find_errors_in(errors, parameter, context);
    }
}

/// Validator for `ipxact:field`
pub struct FieldValidator<'a> {
    parser: &'a dyn ExpressionParser,
    reset_validator: FieldResetValidator<'a>,
    reference_validator: FieldReferenceValidator<'a>,
    policy_validator: AccessPolicyValidator<'a>,
    array_validator: MemoryArrayValidator<'a>,
    parameter_validator: ParameterValidator<'a>,
}

impl<'a> FieldValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self {
            parser,
            reset_validator: FieldResetValidator::new(parser),
            reference_validator: FieldReferenceValidator::new(parser),
            policy_validator: AccessPolicyValidator::new(parser),
            array_validator: MemoryArrayValidator::new(parser),
            parameter_validator: ParameterValidator::new(parser),
        }
    }

    pub fn has_valid_name(&self, field: &Field) -> bool {
        has_valid_name(&field.name_group.name)
    }

    pub fn has_valid_is_present(&self, field: &Field) -> bool {
        is_valid_is_present(self.parser, &field.is_present)
    }

    pub fn has_valid_memory_array(&self, field: &Field) -> bool {
        has_valid_memory_array(&self.array_validator, &field.memory)
    }

    pub fn has_valid_bit_offset(&self, field: &Field) -> bool {
        is_int_at_least(self.parser, &field.bit_offset, 0)
    }

    /// Every reset is valid and no reset type is used twice
    pub fn has_valid_resets(&self, field: &Field) -> bool {
        duplicates_by(&field.resets, reset_type).is_empty()
            && field
                .resets
                .iter()
                .all(|reset| self.reset_validator.validate(reset))
    }

    /// An alias takes its width from the aliased field
    pub fn has_valid_bit_width(&self, field: &Field) -> bool {
        field.alias_of.is_some() || is_int_at_least(self.parser, &field.bit_width, 1)
    }

    pub fn has_valid_alias(&self, field: &Field) -> bool {
        field
            .alias_of
            .as_ref()
            .map_or(true, |alias| self.reference_validator.validate(alias))
    }

    pub fn has_valid_access_policies(&self, field: &Field) -> bool {
        field
            .access_policies
            .iter()
            .all(|policy| self.policy_validator.validate(policy))
    }

    pub fn has_valid_parameters(&self, field: &Field) -> bool {
        has_valid_parameters(&self.parameter_validator, &field.parameters)
    }
}

impl<'a> Validator<Field> for FieldValidator<'a> {
    fn validate(&self, field: &Field) -> bool {
        self.has_valid_name(field)
            && self.has_valid_is_present(field)
            && self.has_valid_memory_array(field)
            && self.has_valid_bit_offset(field)
            && self.has_valid_resets(field)
            && self.has_valid_bit_width(field)
            && self.has_valid_alias(field)
            && self.has_valid_access_policies(field)
            && self.has_valid_parameters(field)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, field: &Field, context: &str) {
        let name = &field.name_group.name;
        if !self.has_valid_name(field) {
            errors.push(format!("Invalid name '{name}' set for field within {context}."));
        }
        if !self.has_valid_is_present(field) {
            errors.push(format!(
                "Is present expression '{}' in field {name} is invalid.",
                field.is_present
            ));
        }

        let field_context = format!("field {name}");
        if let Some(array) = field.memory.array() {
            self.array_validator
                .find_errors_in(errors, array, &field_context);
        }
        if !self.has_valid_bit_offset(field) {
            errors.push(format!(
                "Invalid bit offset set for field {name} within {context}."
            ));
        }

        let reset_context = format!("field {name} within {context}");
        for reset in &field.resets {
            self.reset_validator
                .find_errors_in(errors, reset, &reset_context);
        }
        for duplicate in duplicates_by(&field.resets, reset_type) {
            errors.push(format!(
                "Reset type {duplicate} is used more than once in {reset_context}."
            ));
        }

        if !self.has_valid_bit_width(field) {
            errors.push(format!(
                "Invalid bit width set for field {name} within {context}."
            ));
        }
        if let Some(alias) = &field.alias_of {
            self.reference_validator
                .find_errors_in(errors, alias, &format!("alias of {field_context}"));
        }
        for policy in &field.access_policies {
            self.policy_validator
                .find_errors_in(errors, policy, &field_context);
        }
        find_parameter_errors(
            errors,
            &self.parameter_validator,
            &field.parameters,
            &field_context,
        );
    }
}

fn has_valid_memory_array(validator: &MemoryArrayValidator, memory: &ArrayableMemory) -> bool {
    memory
        .array()
        .map_or(true, |array| validator.validate(array))
}

/// Validator for `ipxact:register`
///
/// Besides the register itself, checks that the fields are name-unique and fit in the register.
/// Arrayed fields and aliases are not checked for containment.
pub struct RegisterValidator<'a> {
    parser: &'a dyn ExpressionParser,
    field_validator: FieldValidator<'a>,
    policy_validator: AccessPolicyValidator<'a>,
    array_validator: MemoryArrayValidator<'a>,
    parameter_validator: ParameterValidator<'a>,
}

impl<'a> RegisterValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self {
            parser,
            field_validator: FieldValidator::new(parser),
            policy_validator: AccessPolicyValidator::new(parser),
            array_validator: MemoryArrayValidator::new(parser),
            parameter_validator: ParameterValidator::new(parser),
        }
    }

    pub fn has_valid_name(&self, register: &Register) -> bool {
        has_valid_name(&register.name_group.name)
    }

    pub fn has_valid_is_present(&self, register: &Register) -> bool {
        is_valid_is_present(self.parser, &register.is_present)
    }

    pub fn has_valid_memory_array(&self, register: &Register) -> bool {
        has_valid_memory_array(&self.array_validator, &register.memory)
    }

    pub fn has_valid_address_offset(&self, register: &Register) -> bool {
        is_int_at_least(self.parser, &register.address_offset, 0)
    }

    pub fn has_valid_size(&self, register: &Register) -> bool {
        is_int_at_least(self.parser, &register.size, 1)
    }

    pub fn has_valid_access_policies(&self, register: &Register) -> bool {
        register
            .access_policies
            .iter()
            .all(|policy| self.policy_validator.validate(policy))
    }

    /// There is at least one field, names are unique and every field is valid and contained
    pub fn has_valid_fields(&self, register: &Register) -> bool {
        !register.fields.is_empty()
            && duplicate_names(&register.fields).is_empty()
            && register.fields.iter().all(|field| {
                self.field_validator.validate(field) && self.is_field_contained(register, field)
            })
    }

    /// Returns false if the field is known to end past the last bit of the register. Fields whose
    /// bounds do not evaluate are reported by the field check instead.
    pub fn is_field_contained(&self, register: &Register, field: &Field) -> bool {
        if field.alias_of.is_some() || field.memory.array().is_some() {
            return true;
        }
        let (Ok(size), Ok(offset), Ok(width)) = (
            self.parser.parse_int(&register.size),
            self.parser.parse_int(&field.bit_offset),
            self.parser.parse_int(&field.bit_width),
        ) else {
            return true;
        };
        offset
            .checked_add(width)
            .map_or(false, |end| end <= size)
    }

    pub fn has_valid_parameters(&self, register: &Register) -> bool {
        has_valid_parameters(&self.parameter_validator, &register.parameters)
    }
}

impl<'a> Validator<Register> for RegisterValidator<'a> {
    fn validate(&self, register: &Register) -> bool {
        self.has_valid_name(register)
            && self.has_valid_is_present(register)
            && self.has_valid_memory_array(register)
            && self.has_valid_address_offset(register)
            && self.has_valid_size(register)
            && self.has_valid_access_policies(register)
            && self.has_valid_fields(register)
            && self.has_valid_parameters(register)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, register: &Register, context: &str) {
        let name = &register.name_group.name;
        if !self.has_valid_name(register) {
            errors.push(format!(
                "Invalid name '{name}' set for register within {context}."
            ));
        }
        if !self.has_valid_is_present(register) {
            errors.push(format!(
                "Is present expression '{}' in register {name} is invalid.",
                register.is_present
            ));
        }

        let register_context = format!("register {name}");
        if let Some(array) = register.memory.array() {
            self.array_validator
                .find_errors_in(errors, array, &register_context);
        }
        if !self.has_valid_address_offset(register) {
            errors.push(format!(
                "Invalid address offset set for register {name} within {context}."
            ));
        }
        if !self.has_valid_size(register) {
            errors.push(format!("Invalid size specified for {register_context}."));
        }
        for policy in &register.access_policies {
            self.policy_validator
                .find_errors_in(errors, policy, &register_context);
        }

        if register.fields.is_empty() {
            errors.push(format!("Register {name} must contain at least one field."));
        }
        for duplicate in duplicate_names(&register.fields) {
            errors.push(format!(
                "Name {duplicate} of fields in {register_context} is not unique."
            ));
        }
        for field in &register.fields {
            self.field_validator
                .find_errors_in(errors, field, &register_context);
            if !self.is_field_contained(register, field) {
                errors.push(format!(
                    "Field {} is not contained within {register_context}.",
                    field.name_group.name
                ));
            }
        }
        find_parameter_errors(
            errors,
            &self.parameter_validator,
            &register.parameters,
            &register_context,
        );
    }
}

/// Validator for `ipxact:addressBlock`
pub struct AddressBlockValidator<'a> {
    parser: &'a dyn ExpressionParser,
    register_validator: RegisterValidator<'a>,
    parameter_validator: ParameterValidator<'a>,
}

impl<'a> AddressBlockValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self {
            parser,
            register_validator: RegisterValidator::new(parser),
            parameter_validator: ParameterValidator::new(parser),
        }
    }

    pub fn has_valid_name(&self, block: &AddressBlock) -> bool {
        has_valid_name(&block.name_group.name)
    }

    pub fn has_valid_is_present(&self, block: &AddressBlock) -> bool {
        is_valid_is_present(self.parser, &block.is_present)
    }

    pub fn has_valid_base_address(&self, block: &AddressBlock) -> bool {
        is_int_at_least(self.parser, &block.base_address, 0)
    }

    pub fn has_valid_range(&self, block: &AddressBlock) -> bool {
        is_int_at_least(self.parser, &block.range, 1)
    }

    pub fn has_valid_width(&self, block: &AddressBlock) -> bool {
        is_int_at_least(self.parser, &block.width, 1)
    }

    /// Registers are name-unique, valid and no wider than the block
    pub fn has_valid_registers(&self, block: &AddressBlock) -> bool {
        duplicate_names(&block.registers).is_empty()
            && block.registers.iter().all(|register| {
                self.register_validator.validate(register) && self.register_fits(block, register)
            })
    }

    /// Returns false if the register size is known to exceed the width of the block
    pub fn register_fits(&self, block: &AddressBlock, register: &Register) -> bool {
        match (
            self.parser.parse_int(&block.width),
            self.parser.parse_int(&register.size),
        ) {
            (Ok(width), Ok(size)) => size <= width,
            _ => true,
        }
    }

    pub fn has_valid_parameters(&self, block: &AddressBlock) -> bool {
        has_valid_parameters(&self.parameter_validator, &block.parameters)
    }
}

impl<'a> Validator<AddressBlock> for AddressBlockValidator<'a> {
    fn validate(&self, block: &AddressBlock) -> bool {
        self.has_valid_name(block)
            && self.has_valid_is_present(block)
            && self.has_valid_base_address(block)
            && self.has_valid_range(block)
            && self.has_valid_width(block)
            && self.has_valid_parameters(block)
            && self.has_valid_registers(block)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, block: &AddressBlock, context: &str) {
        let name = &block.name_group.name;
        if !self.has_valid_name(block) {
            errors.push(format!(
                "Invalid name '{name}' set for address block within {context}."
            ));
        }
        if !self.has_valid_is_present(block) {
            errors.push(format!(
                "Is present expression '{}' in address block {name} is invalid.",
                block.is_present
            ));
        }
        if !self.has_valid_base_address(block) {
            errors.push(format!(
                "Invalid base address set for address block {name} within {context}."
            ));
        }
        if !self.has_valid_range(block) {
            errors.push(format!(
                "Invalid range set for address block {name} within {context}."
            ));
        }
        if !self.has_valid_width(block) {
            errors.push(format!(
                "Invalid width set for address block {name} within {context}."
            ));
        }

        let block_context = format!("address block {name}");
        find_parameter_errors(
            errors,
            &self.parameter_validator,
            &block.parameters,
            &block_context,
        );
        for duplicate in duplicate_names(&block.registers) {
            errors.push(format!(
                "Name {duplicate} of registers in {block_context} is not unique."
            ));
        }
        for register in &block.registers {
            self.register_validator
                .find_errors_in(errors, register, &block_context);
            if !self.register_fits(block, register) {
                errors.push(format!(
                    "Register {} size must not be greater than the containing {block_context} \
                     width.",
                    register.name_group.name
                ));
            }
        }
    }
}

/// Validator for `ipxact:memoryMap`
pub struct MemoryMapValidator<'a> {
    parser: &'a dyn ExpressionParser,
    block_validator: AddressBlockValidator<'a>,
}

impl<'a> MemoryMapValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self {
            parser,
            block_validator: AddressBlockValidator::new(parser),
        }
    }

    pub fn has_valid_name(&self, map: &MemoryMap) -> bool {
        has_valid_name(&map.name_group.name)
    }

    pub fn has_valid_is_present(&self, map: &MemoryMap) -> bool {
        is_valid_is_present(self.parser, &map.is_present)
    }

    pub fn has_valid_address_unit_bits(&self, map: &MemoryMap) -> bool {
        is_optional_int_at_least(self.parser, &map.address_unit_bits, 1)
    }

    pub fn has_valid_address_blocks(&self, map: &MemoryMap) -> bool {
        duplicate_names(&map.address_blocks).is_empty()
            && map
                .address_blocks
                .iter()
                .all(|block| self.block_validator.validate(block))
    }
}

impl<'a> Validator<MemoryMap> for MemoryMapValidator<'a> {
    fn validate(&self, map: &MemoryMap) -> bool {
        self.has_valid_name(map)
            && self.has_valid_is_present(map)
            && self.has_valid_address_unit_bits(map)
            && self.has_valid_address_blocks(map)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, map: &MemoryMap, context: &str) {
        let name = &map.name_group.name;
        if !self.has_valid_name(map) {
            errors.push(format!(
                "Invalid name '{name}' set for memory map within {context}."
            ));
        }
        if !self.has_valid_is_present(map) {
            errors.push(format!(
                "Is present expression '{}' in memory map {name} is invalid.",
                map.is_present
            ));
        }
        if !self.has_valid_address_unit_bits(map) {
            errors.push(format!(
                "Invalid address unit bits set for memory map {name} within {context}."
            ));
        }

        let map_context = format!("memory map {name}");
        for duplicate in duplicate_names(&map.address_blocks) {
            errors.push(format!(
                "Name {duplicate} of address blocks in {map_context} is not unique."
            ));
        }
        for block in &map.address_blocks {
            self.block_validator
                .find_errors_in(errors, block, &map_context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expression::SystemVerilogParser,
        model::{
            Access, AccessPolicy, FieldReference, FieldReferenceKind, IndexedReference,
        },
        validator::test_util::errors_of,
    };

    fn status_register() -> Register {
        let mut register = Register::new("status", "0", "8");
        register.fields.push(Field::new("ready", "0", "1"));
        register.fields.push(Field::new("error", "1", "1"));
        register
    }

    #[test]
    fn valid_field_passes() {
        let parser = SystemVerilogParser;
        let validator = FieldValidator::new(&parser);

        let mut field = Field::new("mode", "2", "3");
        field.memory.set_dimension("2");
        field.resets.push(FieldReset::new("'h0"));
        field.access_policies.push(AccessPolicy {
            access: Some(Access::ReadWrite),
            ..Default::default()
        });
        assert!(validator.validate(&field));
        assert!(errors_of(&validator, &field, "register ctrl").is_empty());
    }

    #[test]
    fn field_parts_are_checked() {
        let parser = SystemVerilogParser;
        let validator = FieldValidator::new(&parser);

        let mut field = Field::new("mode", "-1", "0");
        field.is_present = "2".to_owned();
        field.memory.set_dimension("0");
        field.resets.push(FieldReset::new("1"));
        field.resets.push(FieldReset::new(""));
        field.access_policies.push(AccessPolicy {
            access: Some(Access::Other("sometimes".to_owned())),
            ..Default::default()
        });

        assert!(!validator.has_valid_bit_offset(&field));
        assert!(!validator.has_valid_resets(&field));
        assert!(!validator.validate(&field));
        assert_eq!(
            errors_of(&validator, &field, "register ctrl"),
            vec![
                "Is present expression '2' in field mode is invalid.",
                "Invalid array dimension '0' set for field mode.",
                "Invalid bit offset set for field mode within register ctrl.",
                "Invalid reset value '' set for field mode within register ctrl.",
                "Reset type HARD is used more than once in field mode within register ctrl.",
                "Invalid bit width set for field mode within register ctrl.",
                "Invalid access 'sometimes' set in access policy of field mode.",
            ]
        );
    }

    #[test]
    fn alias_needs_no_width() {
        let parser = SystemVerilogParser;
        let validator = FieldValidator::new(&parser);

        let mut alias = FieldReference::default();
        alias.set_reference(FieldReferenceKind::Register, IndexedReference::new("ctrl"));
        let mut field = Field::new("alias", "0", "");
        field.alias_of = Some(alias.clone());

        assert!(validator.has_valid_bit_width(&field));
        assert_eq!(
            errors_of(&validator, &field, "register status"),
            vec!["Field reference in alias of field alias must contain a reference to a field."]
        );

        alias.set_reference(FieldReferenceKind::Field, IndexedReference::new("enable"));
        field.alias_of = Some(alias);
        assert!(validator.validate(&field));
    }

    #[test]
    fn register_fields_are_checked() {
        let parser = SystemVerilogParser;
        let validator = RegisterValidator::new(&parser);
        assert!(validator.validate(&status_register()));

        let mut register = status_register();
        register.fields.push(Field::new("ready", "7", "2"));
        assert!(!validator.has_valid_fields(&register));
        assert_eq!(
            errors_of(&validator, &register, "address block regs"),
            vec![
                "Name ready of fields in register status is not unique.",
                "Field ready is not contained within register status.",
            ]
        );

        let empty = Register::new("empty", "4", "0");
        assert_eq!(
            errors_of(&validator, &empty, "address block regs"),
            vec![
                "Invalid size specified for register empty.",
                "Register empty must contain at least one field.",
            ]
        );
    }

    #[test]
    fn field_overflowing_the_offset_range_is_not_contained() {
        let parser = SystemVerilogParser;
        let validator = RegisterValidator::new(&parser);

        let mut register = Register::new("wide", "0", "8");
        let field = Field::new("far", &i128::MAX.to_string(), "1");
        register.fields.push(field);
        assert!(!validator.is_field_contained(&register, &register.fields[0]));
    }

    #[test]
    fn address_block_registers_are_checked() {
        let parser = SystemVerilogParser;
        let validator = AddressBlockValidator::new(&parser);

        let mut block = AddressBlock::new("regs", "'h1000", "16", "8");
        block.registers.push(status_register());
        assert!(validator.validate(&block));

        let mut wide = status_register();
        wide.name_group.name = "wide".to_owned();
        wide.size = "32".to_owned();
        block.registers.push(wide);
        block.registers.push(status_register());
        block.range = "0".to_owned();

        assert!(!validator.validate(&block));
        assert_eq!(
            errors_of(&validator, &block, "memory map map"),
            vec![
                "Invalid range set for address block regs within memory map map.",
                "Name status of registers in address block regs is not unique.",
                "Register wide size must not be greater than the containing address block regs \
                 width.",
            ]
        );
    }

    #[test]
    fn memory_map_blocks_are_checked() {
        let parser = SystemVerilogParser;
        let validator = MemoryMapValidator::new(&parser);

        let mut map = MemoryMap::new("map");
        map.address_unit_bits = "8".to_owned();
        map.address_blocks
            .push(AddressBlock::new("regs", "0", "16", "32"));
        assert!(validator.validate(&map));

        map.address_unit_bits = "0".to_owned();
        map.address_blocks
            .push(AddressBlock::new("regs", "16", "16", "32"));
        assert!(!validator.validate(&map));
        assert_eq!(
            errors_of(&validator, &map, "component tuni.fi:ip:uart:1.0"),
            vec![
                "Invalid address unit bits set for memory map map within component \
                 tuni.fi:ip:uart:1.0.",
                "Name regs of address blocks in memory map map is not unique.",
            ]
        );
    }
}
