use itertools::Itertools;

use super::{
    common::{has_valid_name, is_int_at_least, is_optional_int_at_least, is_valid_is_present},
    duplicate_names, HierarchicalValidator, ParameterValidator, RegionValidator, Validator,
};
use crate::{
    expression::ExpressionParser,
    model::{AddressSpaceRef, Cpu, EntityId, Region, Revision},
};

/// Validator for `ipxact:cpu`
///
/// In IP-XACT 2014 a CPU references address spaces. In 2022 it references a memory map and
/// describes its own address space through `range`, `width` and regions. References are only
/// checked for presence.
pub struct CpuValidator<'a> {
    parser: &'a dyn ExpressionParser,
    revision: Revision,
    region_validator: RegionValidator<'a>,
    parameter_validator: ParameterValidator<'a>,
    hierarchy: HierarchicalValidator,
}

/// A region with its bounds evaluated
struct Span<'r> {
    region: &'r Region,
    start: i128,
    /// `None` when the end is past the largest representable address
    end: Option<i128>,
}

impl Span<'_> {
    fn ends_after(&self, address: i128) -> bool {
        self.end.map_or(true, |end| end > address)
    }
}

impl<'a> CpuValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser, revision: Revision) -> Self {
        Self {
            parser,
            revision,
            region_validator: RegionValidator::new(parser),
            parameter_validator: ParameterValidator::new(parser),
            hierarchy: HierarchicalValidator::new(),
        }
    }

    pub fn has_valid_name(&self, cpu: &Cpu) -> bool {
        has_valid_name(&cpu.name_group.name)
    }

    pub fn has_valid_is_present(&self, cpu: &Cpu) -> bool {
        is_valid_is_present(self.parser, &cpu.is_present)
    }

    pub fn has_valid_address_space_references(&self, cpu: &Cpu) -> bool {
        !cpu.address_space_refs.is_empty()
            && cpu
                .address_space_refs
                .iter()
                .all(|space| self.is_valid_address_space_ref(space))
    }

    fn is_valid_address_space_ref(&self, space: &AddressSpaceRef) -> bool {
        has_valid_name(&space.address_space_ref)
            && is_valid_is_present(self.parser, &space.is_present)
    }

    pub fn has_valid_memory_map_reference(&self, cpu: &Cpu) -> bool {
        has_valid_name(&cpu.memory_map_ref)
    }

    pub fn has_valid_range(&self, cpu: &Cpu) -> bool {
        is_int_at_least(self.parser, &cpu.range, 1)
    }

    pub fn has_valid_width(&self, cpu: &Cpu) -> bool {
        is_int_at_least(self.parser, &cpu.width, 1)
    }

    pub fn has_valid_address_unit_bits(&self, cpu: &Cpu) -> bool {
        is_optional_int_at_least(self.parser, &cpu.address_unit_bits, 1)
    }

    /// Regions are valid, uniquely named, inside the CPU range and do not overlap
    pub fn has_valid_regions(&self, cpu: &Cpu) -> bool {
        duplicate_names(&cpu.regions).is_empty()
            && cpu
                .regions
                .iter()
                .all(|region| self.region_validator.validate(region))
            && self.regions_outside_range(cpu).is_empty()
            && self.overlapping_regions(cpu).is_empty()
    }

    pub fn has_valid_parameters(&self, cpu: &Cpu) -> bool {
        duplicate_names(&cpu.parameters).is_empty()
            && cpu
                .parameters
                .iter()
                .all(|parameter| self.parameter_validator.validate(parameter))
    }

    /// Regions with valid bounds, ordered by start address
    fn spans<'c>(&self, cpu: &'c Cpu) -> Vec<Span<'c>> {
        cpu.regions
            .iter()
            .filter_map(|region| {
                let start = self.parser.parse_int(&region.address_offset).ok()?;
                let range = self.parser.parse_int(&region.range).ok()?;
                (start >= 0 && range >= 1).then(|| Span {
                    region,
                    start,
                    end: start.checked_add(range),
                })
            })
            .sorted_by_key(|span| span.start)
            .collect()
    }

    /// Regions that extend past the range of the CPU. Nothing is reported while the range itself
    /// is invalid.
    fn regions_outside_range<'c>(&self, cpu: &'c Cpu) -> Vec<&'c Region> {
        let Ok(range) = self.parser.parse_int(&cpu.range) else {
            return vec![];
        };
        self.spans(cpu)
            .into_iter()
            .filter(|span| span.ends_after(range))
            .map(|span| span.region)
            .collect()
    }

    /// Pairs of overlapping regions, the one starting first on the left
    fn overlapping_regions<'c>(&self, cpu: &'c Cpu) -> Vec<(&'c Region, &'c Region)> {
        self.spans(cpu)
            .iter()
            .tuple_combinations()
            .filter(|(first, second)| first.ends_after(second.start))
            .map(|(first, second)| (first.region, second.region))
            .collect()
    }
}

impl<'a> Validator<Cpu> for CpuValidator<'a> {
    fn validate(&self, cpu: &Cpu) -> bool {
        self.record_child_validities(cpu);
        let references_valid = if self.revision.is_std14() {
            self.has_valid_address_space_references(cpu)
        } else {
            self.has_valid_memory_map_reference(cpu)
                && self.has_valid_range(cpu)
                && self.has_valid_width(cpu)
                && self.has_valid_address_unit_bits(cpu)
                && self.has_valid_regions(cpu)
        };

        self.has_valid_name(cpu)
            && self.has_valid_is_present(cpu)
            && references_valid
            && self.has_valid_parameters(cpu)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, cpu: &Cpu, context: &str) {
        self.record_child_validities(cpu);
        let name = &cpu.name_group.name;
        if !self.has_valid_name(cpu) {
            errors.push(format!("Invalid name '{name}' set for CPU within {context}."));
        }
        if !self.has_valid_is_present(cpu) {
            errors.push(format!(
                "Is present expression '{}' in CPU {name} is invalid.",
                cpu.is_present
            ));
        }

        if self.revision.is_std14() {
            self.find_address_space_errors(errors, cpu, context);
        } else {
            self.find_address_map_errors(errors, cpu, context);
        }

        let parameter_context = format!("cpu {name}");
        for duplicate in duplicate_names(&cpu.parameters) {
            errors.push(format!(
                "Parameter name {duplicate} within {parameter_context} is not unique."
            ));
        }
        for parameter in &cpu.parameters {
            self.parameter_validator
                .find_errors_in(errors, parameter, &parameter_context);
        }
    }
}

impl<'a> CpuValidator<'a> {
    /// Returns false if the last check of a CPU found the region or parameter `id` to share its
    /// name with a sibling
    pub fn is_child_valid(&self, id: EntityId) -> bool {
        self.hierarchy.is_child_valid(id)
    }

    fn record_child_validities(&self, cpu: &Cpu) {
        self.hierarchy.clear();
        self.hierarchy.record_unique_names(&cpu.regions);
        self.hierarchy.record_unique_names(&cpu.parameters);
    }

    fn find_address_space_errors(&self, errors: &mut Vec<String>, cpu: &Cpu, context: &str) {
        let name = &cpu.name_group.name;
        if cpu.address_space_refs.is_empty() {
            errors.push(format!(
                "No address space reference set for CPU {name} within {context}."
            ));
        }
        for space in &cpu.address_space_refs {
            let reference = &space.address_space_ref;
            if !has_valid_name(reference) {
                errors.push(format!(
                    "Empty address space reference set for CPU {name} within {context}."
                ));
            }
            if !is_valid_is_present(self.parser, &space.is_present) {
                errors.push(format!(
                    "Is present expression '{}' of address space reference {reference} in CPU \
                     {name} is invalid.",
                    space.is_present
                ));
            }
        }
    }

    fn find_address_map_errors(&self, errors: &mut Vec<String>, cpu: &Cpu, context: &str) {
        let name = &cpu.name_group.name;
        if !has_valid_name(&cpu.memory_map_ref) {
            errors.push(format!(
                "No memory map reference set for CPU {name} within {context}."
            ));
        }
        if !self.has_valid_range(cpu) {
            errors.push(format!("Invalid range set for CPU {name}."));
        }
        if !self.has_valid_width(cpu) {
            errors.push(format!("Invalid width set for CPU {name}."));
        }
        if !self.has_valid_address_unit_bits(cpu) {
            errors.push(format!("Invalid address unit bits set for CPU {name}."));
        }

        let region_context = format!("CPU {name}");
        for region in &cpu.regions {
            self.region_validator
                .find_errors_in(errors, region, &region_context);
        }
        for duplicate in duplicate_names(&cpu.regions) {
            errors.push(format!(
                "Name {duplicate} of regions in {region_context} is not unique."
            ));
        }
        for region in self.regions_outside_range(cpu) {
            errors.push(format!(
                "Region {} is not contained within address space of {region_context}.",
                region.name_group.name
            ));
        }
        for (first, second) in self.overlapping_regions(cpu) {
            errors.push(format!(
                "Regions {} and {} overlap within address space of {region_context}.",
                first.name_group.name, second.name_group.name
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expression::SystemVerilogParser, model::Parameter, validator::test_util::errors_of,
    };

    fn std22_cpu() -> Cpu {
        let mut cpu = Cpu::new("testCpu");
        cpu.memory_map_ref = "map".to_owned();
        cpu.range = "1024".to_owned();
        cpu.width = "32".to_owned();
        cpu.address_unit_bits = "8".to_owned();
        cpu
    }

    #[test]
    fn std14_cpu_needs_address_space_reference() {
        let parser = SystemVerilogParser;
        let validator = CpuValidator::new(&parser, Revision::Std14);

        let mut cpu = Cpu::new("testCpu");
        assert_eq!(
            errors_of(&validator, &cpu, "test"),
            vec!["No address space reference set for CPU testCpu within test."]
        );

        cpu.address_space_refs.push(AddressSpaceRef::new(" "));
        assert!(!validator.validate(&cpu));
        assert_eq!(
            errors_of(&validator, &cpu, "test"),
            vec!["Empty address space reference set for CPU testCpu within test."]
        );

        cpu.address_space_refs[0].address_space_ref = "space".to_owned();
        assert!(validator.validate(&cpu));
    }

    #[test]
    fn std22_cpu_needs_memory_map() {
        let parser = SystemVerilogParser;
        let validator = CpuValidator::new(&parser, Revision::Std22);
        assert!(validator.validate(&std22_cpu()));

        let mut cpu = std22_cpu();
        cpu.memory_map_ref = String::new();
        cpu.range = "0".to_owned();
        cpu.width = String::new();
        cpu.address_unit_bits = "x".to_owned();
        assert_eq!(
            errors_of(&validator, &cpu, "test"),
            vec![
                "No memory map reference set for CPU testCpu within test.",
                "Invalid range set for CPU testCpu.",
                "Invalid width set for CPU testCpu.",
                "Invalid address unit bits set for CPU testCpu.",
            ]
        );
    }

    #[test]
    fn regions_must_fit_and_not_overlap() {
        let parser = SystemVerilogParser;
        let validator = CpuValidator::new(&parser, Revision::Std22);

        let mut cpu = std22_cpu();
        cpu.regions = vec![
            Region::new("high", "512", "256"),
            Region::new("low", "0", "512"),
        ];
        assert!(validator.validate(&cpu));

        cpu.regions.push(Region::new("region1", "1000", "100"));
        cpu.regions.push(Region::new("shadow", "256", "16"));
        assert!(!validator.has_valid_regions(&cpu));
        assert_eq!(
            errors_of(&validator, &cpu, "test"),
            vec![
                "Region region1 is not contained within address space of CPU testCpu.",
                "Regions low and shadow overlap within address space of CPU testCpu.",
            ]
        );
    }

    #[test]
    fn region_names_must_be_unique() {
        let parser = SystemVerilogParser;
        let validator = CpuValidator::new(&parser, Revision::Std22);

        let mut cpu = std22_cpu();
        cpu.regions = vec![Region::new("r", "0", "4"), Region::new("r", "4", "0")];
        assert!(!validator.validate(&cpu));
        assert_eq!(
            errors_of(&validator, &cpu, "test"),
            vec![
                "Invalid range set for region r in CPU testCpu.",
                "Name r of regions in CPU testCpu is not unique.",
            ]
        );
    }

    #[test]
    fn name_presence_and_parameters_are_checked() {
        let parser = SystemVerilogParser;
        let validator = CpuValidator::new(&parser, Revision::Std22);

        let mut cpu = std22_cpu();
        cpu.name_group.name = String::new();
        cpu.is_present = "alabama-man".to_owned();
        cpu.parameters = vec![Parameter::new("p", "")];
        assert!(!validator.validate(&cpu));
        assert_eq!(
            errors_of(&validator, &cpu, "test"),
            vec![
                "Invalid name '' set for CPU within test.",
                "Is present expression 'alabama-man' in CPU  is invalid.",
                "No value specified for parameter p within cpu ",
            ]
        );
    }

    #[test]
    fn region_ending_past_the_largest_address_is_outside() {
        let parser = SystemVerilogParser;
        let validator = CpuValidator::new(&parser, Revision::Std22);

        let mut cpu = std22_cpu();
        cpu.range = i128::MAX.to_string();
        cpu.regions = vec![
            Region::new("low", "0", "16"),
            Region::new("top", &i128::MAX.to_string(), "1"),
        ];
        assert!(!validator.validate(&cpu));
        assert_eq!(
            errors_of(&validator, &cpu, "test"),
            vec!["Region top is not contained within address space of CPU testCpu."]
        );

        cpu.regions[0].address_offset = (i128::MAX - 4).to_string();
        assert_eq!(
            errors_of(&validator, &cpu, "test"),
            vec![
                "Region low is not contained within address space of CPU testCpu.",
                "Region top is not contained within address space of CPU testCpu.",
                "Regions low and top overlap within address space of CPU testCpu.",
            ]
        );
    }

    #[test]
    fn child_validity_follows_the_last_check() {
        let parser = SystemVerilogParser;
        let validator = CpuValidator::new(&parser, Revision::Std22);

        let mut cpu = std22_cpu();
        cpu.regions = vec![Region::new("r", "0", "4"), Region::new("r", "4", "4")];
        cpu.parameters = vec![Parameter::new("p", "1"), Parameter::new("p", "2")];
        let removed = cpu.parameters[1].name_group.id();

        errors_of(&validator, &cpu, "test");
        assert!(!validator.is_child_valid(cpu.regions[0].name_group.id()));
        assert!(!validator.is_child_valid(removed));

        cpu.parameters.pop();
        cpu.regions[1].name_group.name = "s".to_owned();
        assert!(validator.validate(&cpu));
        assert!(validator.is_child_valid(cpu.regions[0].name_group.id()));
        assert!(validator.is_child_valid(cpu.parameters[0].name_group.id()));
        assert!(validator.is_child_valid(removed));
    }
}
