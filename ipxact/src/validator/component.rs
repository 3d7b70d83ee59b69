use super::{
    duplicate_names, hierarchical::duplicates_by, ChannelValidator, CpuValidator,
    FileSetValidator, HierarchicalValidator, MemoryMapValidator, OtherClockDriverValidator,
    ParameterValidator, PowerDomainValidator, Validator,
};
use crate::{
    expression::ExpressionParser,
    model::{Component, EntityId, Named, Revision},
};

/// Validator for `ipxact:component`
///
/// Checks the VLNV, name uniqueness within every child collection and every child with its own
/// validator.
pub struct ComponentValidator<'a> {
    parser: &'a dyn ExpressionParser,
    channel_validator: ChannelValidator<'a>,
    memory_map_validator: MemoryMapValidator<'a>,
    cpu_validator: CpuValidator<'a>,
    file_set_validator: FileSetValidator<'a>,
    clock_validator: OtherClockDriverValidator<'a>,
    parameter_validator: ParameterValidator<'a>,
    hierarchy: HierarchicalValidator,
}

impl<'a> ComponentValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser, revision: Revision) -> Self {
        Self {
            parser,
            channel_validator: ChannelValidator::new(parser),
            memory_map_validator: MemoryMapValidator::new(parser),
            cpu_validator: CpuValidator::new(parser, revision),
            file_set_validator: FileSetValidator::new(parser),
            clock_validator: OtherClockDriverValidator::new(parser),
            parameter_validator: ParameterValidator::new(parser),
            hierarchy: HierarchicalValidator::new(),
        }
    }

    pub fn has_valid_vlnv(&self, component: &Component) -> bool {
        component.vlnv.is_valid()
    }

    pub fn has_valid_power_domains(&self, component: &Component) -> bool {
        let validator = PowerDomainValidator::new(self.parser, &component.power_domains);
        duplicate_names(&component.power_domains).is_empty()
            && component
                .power_domains
                .iter()
                .all(|domain| validator.validate(domain))
    }

    pub fn has_valid_channels(&self, component: &Component) -> bool {
        self.children_are_valid(&component.channels, &self.channel_validator)
    }

    pub fn has_valid_memory_maps(&self, component: &Component) -> bool {
        self.children_are_valid(&component.memory_maps, &self.memory_map_validator)
    }

    pub fn has_valid_cpus(&self, component: &Component) -> bool {
        self.children_are_valid(&component.cpus, &self.cpu_validator)
    }

    pub fn has_valid_file_sets(&self, component: &Component) -> bool {
        self.children_are_valid(&component.file_sets, &self.file_set_validator)
    }

    /// Clock drivers are identified by their clock name
    pub fn has_valid_other_clock_drivers(&self, component: &Component) -> bool {
        duplicates_by(&component.other_clock_drivers, |driver| {
            driver.clock_name.as_str()
        })
        .is_empty()
            && component
                .other_clock_drivers
                .iter()
                .all(|driver| self.clock_validator.validate(driver))
    }

    pub fn has_valid_parameters(&self, component: &Component) -> bool {
        self.children_are_valid(&component.parameters, &self.parameter_validator)
    }

    /// Returns false if the last check of a component found the element `id` to share its name
    /// with a sibling. Covers the direct children of the component as well as the parameters of
    /// power domains, the regions and parameters of CPUs and everything below the memory maps
    /// down to register fields.
    pub fn is_child_valid(&self, id: EntityId) -> bool {
        self.hierarchy.is_child_valid(id)
    }

    fn record_child_validities(&self, component: &Component) {
        self.hierarchy.clear();
        self.hierarchy.record_unique_names(&component.power_domains);
        for domain in &component.power_domains {
            self.hierarchy.record_unique_names(&domain.parameters);
        }
        self.hierarchy.record_unique_names(&component.channels);
        self.hierarchy.record_unique_names(&component.memory_maps);
        for map in &component.memory_maps {
            self.hierarchy.record_unique_names(&map.address_blocks);
            for block in &map.address_blocks {
                self.hierarchy.record_unique_names(&block.registers);
                for register in &block.registers {
                    self.hierarchy.record_unique_names(&register.fields);
                }
            }
        }
        self.hierarchy.record_unique_names(&component.cpus);
        for cpu in &component.cpus {
            self.hierarchy.record_unique_names(&cpu.regions);
            self.hierarchy.record_unique_names(&cpu.parameters);
        }
        self.hierarchy.record_unique_names(&component.file_sets);
        self.hierarchy.record_unique_names(&component.parameters);
    }

    /// Children are name-unique and each is valid under `validator`
    fn children_are_valid<T: Named>(&self, children: &[T], validator: &impl Validator<T>) -> bool {
        duplicate_names(children).is_empty()
            && children.iter().all(|child| validator.validate(child))
    }
}

/// Report duplicate names among `children` as `"<kind> name <name> within <context> is not
/// unique."`
fn find_duplicate_errors<T: Named>(
    errors: &mut Vec<String>,
    children: &[T],
    kind: &str,
    context: &str,
) {
    for name in duplicate_names(children) {
        errors.push(format!("{kind} name {name} within {context} is not unique."));
    }
}

impl<'a> Validator<Component> for ComponentValidator<'a> {
    fn validate(&self, component: &Component) -> bool {
        self.record_child_validities(component);
        self.has_valid_vlnv(component)
            && self.has_valid_power_domains(component)
            && self.has_valid_channels(component)
            && self.has_valid_memory_maps(component)
            && self.has_valid_cpus(component)
            && self.has_valid_file_sets(component)
            && self.has_valid_other_clock_drivers(component)
            && self.has_valid_parameters(component)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, component: &Component, context: &str) {
        self.record_child_validities(component);
        if !self.has_valid_vlnv(component) {
            errors.push(format!(
                "The type of the component within {context} is not valid: {}.",
                component.vlnv
            ));
        }
        let context = format!("component {}", component.vlnv);

        let domain_validator = PowerDomainValidator::new(self.parser, &component.power_domains);
        find_duplicate_errors(errors, &component.power_domains, "Power domain", &context);
        for domain in &component.power_domains {
            domain_validator.find_errors_in(errors, domain, &context);
        }

        find_duplicate_errors(errors, &component.channels, "Channel", &context);
        for channel in &component.channels {
            self.channel_validator
                .find_errors_in(errors, channel, &context);
        }

        find_duplicate_errors(errors, &component.memory_maps, "Memory map", &context);
        for map in &component.memory_maps {
            self.memory_map_validator
                .find_errors_in(errors, map, &context);
        }

        find_duplicate_errors(errors, &component.cpus, "CPU", &context);
        for cpu in &component.cpus {
            self.cpu_validator.find_errors_in(errors, cpu, &context);
        }

        find_duplicate_errors(errors, &component.file_sets, "File set", &context);
        for file_set in &component.file_sets {
            self.file_set_validator
                .find_errors_in(errors, file_set, &context);
        }

        for name in duplicates_by(&component.other_clock_drivers, |driver| {
            driver.clock_name.as_str()
        }) {
            errors.push(format!(
                "Other clock driver name {name} within {context} is not unique."
            ));
        }
        for driver in &component.other_clock_drivers {
            self.clock_validator.find_errors_in(errors, driver, &context);
        }

        find_duplicate_errors(errors, &component.parameters, "Parameter", &context);
        for parameter in &component.parameters {
            self.parameter_validator
                .find_errors_in(errors, parameter, &context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expression::SystemVerilogParser,
        model::{
            AddressBlock, Channel, ClockUnit, Cpu, Field, FileSet, MemoryMap, OtherClockDriver,
            Parameter, PowerDomain, Region, Register, Vlnv,
        },
        validator::test_util::errors_of,
    };

    fn uart() -> Component {
        Component::new(Vlnv::new("tuni.fi", "ip", "uart", "1.0"))
    }

    fn clock(name: &str) -> OtherClockDriver {
        OtherClockDriver {
            clock_name: name.to_owned(),
            clock_period: ClockUnit::new("10").with_unit("ns"),
            clock_pulse_offset: ClockUnit::new("0"),
            clock_pulse_value: "1".to_owned(),
            clock_pulse_duration: ClockUnit::new("5").with_unit("ns"),
            ..Default::default()
        }
    }

    #[test]
    fn empty_component_is_valid() {
        let parser = SystemVerilogParser;
        let validator = ComponentValidator::new(&parser, Revision::Std22);
        assert!(validator.validate(&uart()));
        assert!(errors_of(&validator, &uart(), "uart.xml").is_empty());
    }

    #[test]
    fn invalid_vlnv_is_reported() {
        let parser = SystemVerilogParser;
        let validator = ComponentValidator::new(&parser, Revision::Std22);
        let component = Component::new(Vlnv::new("tuni.fi", "ip", "", "1.0"));
        assert!(!validator.validate(&component));
        assert_eq!(
            errors_of(&validator, &component, "uart.xml"),
            vec!["The type of the component within uart.xml is not valid: tuni.fi:ip::1.0."]
        );
    }

    #[test]
    fn duplicate_children_are_reported() {
        let parser = SystemVerilogParser;
        let validator = ComponentValidator::new(&parser, Revision::Std22);

        let mut component = uart();
        component.power_domains = vec![PowerDomain::new("pd"), PowerDomain::new("pd")];
        component.file_sets = vec![FileSet::new("rtl"), FileSet::new("rtl")];
        component.other_clock_drivers = vec![clock("clk"), clock("clk")];
        component.parameters = vec![Parameter::new("width", "8"), Parameter::new("width", "8")];

        assert!(!validator.has_valid_power_domains(&component));
        assert!(!validator.has_valid_file_sets(&component));
        assert!(!validator.has_valid_other_clock_drivers(&component));
        assert!(!validator.has_valid_parameters(&component));
        assert_eq!(
            errors_of(&validator, &component, "uart.xml"),
            vec![
                "Power domain name pd within component tuni.fi:ip:uart:1.0 is not unique.",
                "File set name rtl within component tuni.fi:ip:uart:1.0 is not unique.",
                "Other clock driver name clk within component tuni.fi:ip:uart:1.0 is not unique.",
                "Parameter name width within component tuni.fi:ip:uart:1.0 is not unique.",
            ]
        );
    }

    #[test]
    fn child_errors_use_component_context() {
        let parser = SystemVerilogParser;
        let validator = ComponentValidator::new(&parser, Revision::Std14);

        let mut component = uart();
        component.channels = vec![Channel::new("mirror")];
        component.cpus = vec![Cpu::new("cpu0"), Cpu::new("cpu0")];

        assert!(!validator.validate(&component));
        assert_eq!(
            errors_of(&validator, &component, "uart.xml"),
            vec![
                "Channel mirror within component tuni.fi:ip:uart:1.0 must have at least two bus \
                 interface references.",
                "CPU name cpu0 within component tuni.fi:ip:uart:1.0 is not unique.",
                "No address space reference set for CPU cpu0 within component \
                 tuni.fi:ip:uart:1.0.",
                "No address space reference set for CPU cpu0 within component \
                 tuni.fi:ip:uart:1.0.",
            ]
        );
    }

    #[test]
    fn child_validity_is_recorded_for_every_collection() {
        let parser = SystemVerilogParser;
        let validator = ComponentValidator::new(&parser, Revision::Std22);

        let mut component = uart();
        component.power_domains = vec![PowerDomain::new("pd"), PowerDomain::new("pd")];
        component.parameters = vec![Parameter::new("width", "8"), Parameter::new("width", "8")];
        let mut cpu = Cpu::new("cpu0");
        cpu.regions = vec![Region::new("r", "0", "4"), Region::new("r", "4", "4")];
        component.cpus = vec![cpu];

        // Power domains fail first, the later collections are still recorded
        assert!(!validator.validate(&component));
        assert!(!validator.is_child_valid(component.power_domains[0].name_group.id()));
        assert!(!validator.is_child_valid(component.parameters[1].name_group.id()));
        assert!(!validator.is_child_valid(component.cpus[0].regions[0].name_group.id()));
        assert!(validator.is_child_valid(component.cpus[0].name_group.id()));

        let removed = component.parameters.remove(1);
        component.power_domains[1].name_group.name = "core".to_owned();
        errors_of(&validator, &component, "uart.xml");
        assert!(validator.is_child_valid(component.power_domains[0].name_group.id()));
        assert!(validator.is_child_valid(component.parameters[0].name_group.id()));
        assert!(validator.is_child_valid(removed.name_group.id()));
    }

    #[test]
    fn memory_maps_are_validated_down_to_fields() {
        let parser = SystemVerilogParser;
        let validator = ComponentValidator::new(&parser, Revision::Std22);

        let mut register = Register::new("ctrl", "0", "8");
        register.fields = vec![Field::new("enable", "0", "1"), Field::new("enable", "1", "1")];
        let mut block = AddressBlock::new("regs", "0", "4", "8");
        block.registers.push(register);
        let mut map = MemoryMap::new("map");
        map.address_blocks.push(block);

        let mut component = uart();
        component.memory_maps = vec![map];

        assert!(!validator.has_valid_memory_maps(&component));
        assert_eq!(
            errors_of(&validator, &component, "uart.xml"),
            vec!["Name enable of fields in register ctrl is not unique."]
        );
        let fields = &component.memory_maps[0].address_blocks[0].registers[0].fields;
        assert!(!validator.is_child_valid(fields[1].name_group.id()));

        component.memory_maps[0].address_blocks[0].registers[0].fields[1]
            .name_group
            .name = "busy".to_owned();
        assert!(validator.validate(&component));
        let fields = &component.memory_maps[0].address_blocks[0].registers[0].fields;
        assert!(validator.is_child_valid(fields[1].name_group.id()));
    }
}
