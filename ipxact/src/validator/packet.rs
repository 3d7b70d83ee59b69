use super::{common::has_valid_name, Validator};
use crate::model::{Packet, PacketField};

/// Validator for `ipxact:packetField`
///
/// The width is only required to be present. It is not evaluated.
#[derive(Clone, Copy, Debug, Default)]
pub struct PacketFieldValidator;

impl PacketFieldValidator {
    pub fn has_valid_name(&self, field: &PacketField) -> bool {
        has_valid_name(&field.name_group.name)
    }

    pub fn has_valid_width(&self, field: &PacketField) -> bool {
        !field.width.trim().is_empty()
    }
}

impl Validator<PacketField> for PacketFieldValidator {
    fn validate(&self, field: &PacketField) -> bool {
        self.has_valid_name(field) && self.has_valid_width(field)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, field: &PacketField, context: &str) {
        let name = &field.name_group.name;
        if !self.has_valid_name(field) {
            errors.push(format!(
                "Invalid name '{name}' set for packet field within {context}."
            ));
        }
        if !self.has_valid_width(field) {
            errors.push(format!(
                "No width set for packet field {name} within {context}."
            ));
        }
    }
}

/// Validator for `ipxact:packet`
///
/// A packet is valid when it has a name and at least one field, and all of its fields are valid.
#[derive(Clone, Copy, Debug, Default)]
pub struct PacketValidator {
    field_validator: PacketFieldValidator,
}

impl PacketValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_valid_name(&self, packet: &Packet) -> bool {
        has_valid_name(&packet.name_group.name)
    }

    pub fn has_valid_fields(&self, packet: &Packet) -> bool {
        !packet.fields.is_empty()
            && packet
                .fields
                .iter()
                .all(|field| self.field_validator.validate(field))
    }
}

impl Validator<Packet> for PacketValidator {
    fn validate(&self, packet: &Packet) -> bool {
        self.has_valid_name(packet) && self.has_valid_fields(packet)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, packet: &Packet, context: &str) {
        let name = &packet.name_group.name;
        if !self.has_valid_name(packet) {
            errors.push(format!("Invalid name '{name}' set for packet within {context}."));
        }
        if packet.fields.is_empty() {
            errors.push(format!(
                "Packet {name} within {context} must have at least one packet field."
            ));
        }

        let field_context = format!("packet {name}");
        for field in &packet.fields {
            self.field_validator
                .find_errors_in(errors, field, &field_context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::test_util::errors_of;

    #[test]
    fn packet_needs_a_field() {
        let validator = PacketValidator::new();
        let mut packet = Packet::new("p1");
        assert!(!validator.validate(&packet));
        assert_eq!(
            errors_of(&validator, &packet, "port data"),
            vec!["Packet p1 within port data must have at least one packet field."]
        );

        packet.fields.push(PacketField::new("f1", "8"));
        assert!(validator.validate(&packet));
        assert!(errors_of(&validator, &packet, "port data").is_empty());
    }

    #[test]
    fn invalid_field_invalidates_packet() {
        let validator = PacketValidator::new();
        let mut packet = Packet::new("p1");
        packet.fields.push(PacketField::new("f1", "8"));
        packet.fields.push(PacketField::new(" ", ""));

        assert!(!validator.validate(&packet));
        assert_eq!(
            errors_of(&validator, &packet, "port data"),
            vec![
                "Invalid name ' ' set for packet field within packet p1.",
                "No width set for packet field   within packet p1.",
            ]
        );
    }

    #[test]
    fn width_is_not_evaluated() {
        let validator = PacketFieldValidator;
        assert!(validator.validate(&PacketField::new("f1", "not an expression")));
        assert!(!validator.validate(&PacketField::new("f1", "")));
    }
}
