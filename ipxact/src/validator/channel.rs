use super::{
    common::{has_valid_name, is_valid_is_present},
    Validator,
};
use crate::{
    expression::ExpressionParser,
    model::{BusInterfaceRef, Channel},
};

/// Validator for `ipxact:channel`
///
/// A channel connects at least two bus interfaces. Whether the referenced interfaces exist in the
/// component is not checked here.
pub struct ChannelValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> ChannelValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    pub fn has_valid_name(&self, channel: &Channel) -> bool {
        has_valid_name(&channel.name_group.name)
    }

    pub fn has_valid_is_present(&self, channel: &Channel) -> bool {
        is_valid_is_present(self.parser, &channel.is_present)
    }

    pub fn has_enough_references(&self, channel: &Channel) -> bool {
        channel.bus_interface_refs.len() >= 2
    }

    pub fn has_valid_reference(&self, reference: &BusInterfaceRef) -> bool {
        has_valid_name(&reference.local_name) && is_valid_is_present(self.parser, &reference.is_present)
    }

    /// Enough references, all of which are valid
    pub fn has_valid_bus_interface_references(&self, channel: &Channel) -> bool {
        self.has_enough_references(channel)
            && channel
                .bus_interface_refs
                .iter()
                .all(|reference| self.has_valid_reference(reference))
    }
}

impl<'a> Validator<Channel> for ChannelValidator<'a> {
    fn validate(&self, channel: &Channel) -> bool {
        self.has_valid_name(channel)
            && self.has_valid_is_present(channel)
            && self.has_valid_bus_interface_references(channel)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, channel: &Channel, context: &str) {
        let name = &channel.name_group.name;
        if !self.has_valid_name(channel) {
            errors.push(format!(
                "Invalid name {name} specified for channel within {context}."
            ));
        }
        if !self.has_valid_is_present(channel) {
            errors.push(format!(
                "Invalid is present expression '{}' set for channel {name} within {context}.",
                channel.is_present
            ));
        }
        if !self.has_enough_references(channel) {
            errors.push(format!(
                "Channel {name} within {context} must have at least two bus interface references."
            ));
        }
        for reference in &channel.bus_interface_refs {
            if !self.has_valid_reference(reference) {
                errors.push(format!(
                    "Invalid bus interface reference '{}' set for channel {name} within {context}.",
                    reference.local_name
                ));
            }
        }
    }
}
