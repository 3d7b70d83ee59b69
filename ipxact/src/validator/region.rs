use super::{
    common::{has_valid_name, is_int_at_least},
    Validator,
};
use crate::{expression::ExpressionParser, model::Region};

/// Validator for a single `ipxact:region` of a CPU
///
/// Placement of the region within the address space is checked by
/// [`CpuValidator`](super::CpuValidator).
pub struct RegionValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> RegionValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    pub fn has_valid_name(&self, region: &Region) -> bool {
        has_valid_name(&region.name_group.name)
    }

    /// The offset must be a non-negative integer
    pub fn has_valid_address_offset(&self, region: &Region) -> bool {
        is_int_at_least(self.parser, &region.address_offset, 0)
    }

    /// The range must be a positive integer
    pub fn has_valid_range(&self, region: &Region) -> bool {
        is_int_at_least(self.parser, &region.range, 1)
    }
}

impl<'a> Validator<Region> for RegionValidator<'a> {
    fn validate(&self, region: &Region) -> bool {
        self.has_valid_name(region)
            && self.has_valid_address_offset(region)
            && self.has_valid_range(region)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, region: &Region, context: &str) {
        let name = &region.name_group.name;
        if !self.has_valid_name(region) {
            errors.push(format!(
                "Invalid name specified for region {name} in {context}."
            ));
        }
        if !self.has_valid_address_offset(region) {
            errors.push(format!(
                "Invalid address offset set for region {name} in {context}."
            ));
        }
        if !self.has_valid_range(region) {
            errors.push(format!("Invalid range set for region {name} in {context}."));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expression::SystemVerilogParser, validator::test_util::errors_of};

    #[test]
    fn address_offset_must_be_non_negative() {
        let parser = SystemVerilogParser;
        let validator = RegionValidator::new(&parser);
        for (offset, valid) in [
            ("12*2+13-5", true),
            ("0", true),
            ("40000000000", true),
            ("14-5*3", false),
            ("text", false),
            ("\"text\"", false),
            ("", false),
        ] {
            let region = Region::new("testRegion", offset, "10");
            assert_eq!(validator.has_valid_address_offset(&region), valid, "{offset}");
        }
    }

    #[test]
    fn range_must_be_positive() {
        let parser = SystemVerilogParser;
        let validator = RegionValidator::new(&parser);
        for (range, valid) in [
            ("12*2+13-5", true),
            ("40000000000", true),
            ("0", false),
            ("14-5*3", false),
            ("text", false),
            ("", false),
        ] {
            let region = Region::new("testRegion", "10", range);
            assert_eq!(validator.has_valid_range(&region), valid, "{range}");
        }

        let region = Region::new("testRegion", "10", "0");
        assert_eq!(
            errors_of(&validator, &region, "CPU testCpu"),
            vec!["Invalid range set for region testRegion in CPU testCpu."]
        );
    }

    #[test]
    fn blank_name_is_invalid() {
        let parser = SystemVerilogParser;
        let validator = RegionValidator::new(&parser);
        let region = Region::new("   ", "0", "1");
        assert!(!validator.validate(&region));
        assert_eq!(
            errors_of(&validator, &region, "CPU testCpu"),
            vec!["Invalid name specified for region     in CPU testCpu."]
        );
    }
}
