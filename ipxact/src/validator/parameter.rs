use super::{common::has_valid_name, Validator};
use crate::{
    expression::{ExpressionParser, Value},
    model::{Parameter, PARAMETER_RESOLVES, PARAMETER_TYPES},
};

/// Validator for `ipxact:parameter`
///
/// A parameter needs a name and a value. The value, minimum and maximum must fit the type of the
/// parameter, and the value must lie within the bounds. Parameters resolved by the user or a
/// generator need an identifier.
pub struct ParameterValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> ParameterValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    pub fn has_valid_name(&self, parameter: &Parameter) -> bool {
        has_valid_name(&parameter.name_group.name)
    }

    pub fn has_valid_type(&self, parameter: &Parameter) -> bool {
        PARAMETER_TYPES.contains(&parameter.type_.as_str())
    }

    pub fn has_valid_value(&self, parameter: &Parameter) -> bool {
        !parameter.value.is_empty()
            && self.is_valid_for_type(&parameter.value, &parameter.type_)
            && !self.value_is_less_than_minimum(parameter)
            && !self.value_is_greater_than_maximum(parameter)
    }

    pub fn has_valid_minimum(&self, parameter: &Parameter) -> bool {
        parameter.minimum.is_empty() || self.is_valid_for_type(&parameter.minimum, &parameter.type_)
    }

    pub fn has_valid_maximum(&self, parameter: &Parameter) -> bool {
        parameter.maximum.is_empty() || self.is_valid_for_type(&parameter.maximum, &parameter.type_)
    }

    pub fn has_valid_resolve(&self, parameter: &Parameter) -> bool {
        PARAMETER_RESOLVES.contains(&parameter.resolve.as_str())
    }

    /// User and generator resolved parameters must have an identifier
    pub fn has_valid_value_id(&self, parameter: &Parameter) -> bool {
        !matches!(parameter.resolve.as_str(), "user" | "generated")
            || !parameter.parameter_id.is_empty()
    }

    /// Returns true if `value` is acceptable for a parameter of type `type_`
    ///
    /// Untyped and string parameters accept anything. Arrays are valid when every element is.
    pub fn is_valid_for_type(&self, value: &str, type_: &str) -> bool {
        if type_.is_empty() || type_ == "string" {
            return true;
        }
        match self.parser.parse_expression(value) {
            Ok(value) => value_fits_type(&value, type_),
            Err(_) => false,
        }
    }

    pub fn value_is_less_than_minimum(&self, parameter: &Parameter) -> bool {
        self.value_violates(parameter, &parameter.minimum, |value, bound| value < bound)
    }

    pub fn value_is_greater_than_maximum(&self, parameter: &Parameter) -> bool {
        self.value_violates(parameter, &parameter.maximum, |value, bound| value > bound)
    }

    /// Compare every element of the value against `bound`. Bit and string parameters and
    /// untyped parameters have no bounds.
    fn value_violates(
        &self,
        parameter: &Parameter,
        bound: &str,
        violates: impl Fn(f64, f64) -> bool,
    ) -> bool {
        if bound.is_empty() || matches!(parameter.type_.as_str(), "" | "bit" | "string") {
            return false;
        }
        let (Ok(bound), Ok(value)) = (
            self.parser.parse_expression(bound),
            self.parser.parse_expression(&parameter.value),
        ) else {
            return false;
        };
        let Some(bound) = numeric(&bound) else {
            return false;
        };
        flatten(&value)
            .into_iter()
            .filter_map(numeric)
            .any(|value| violates(value, bound))
    }
}

impl<'a> Validator<Parameter> for ParameterValidator<'a> {
    fn validate(&self, parameter: &Parameter) -> bool {
        self.has_valid_name(parameter)
            && self.has_valid_type(parameter)
            && self.has_valid_value(parameter)
            && self.has_valid_minimum(parameter)
            && self.has_valid_maximum(parameter)
            && self.has_valid_resolve(parameter)
            && self.has_valid_value_id(parameter)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, parameter: &Parameter, context: &str) {
        let name = &parameter.name_group.name;
        if !self.has_valid_name(parameter) {
            errors.push(format!(
                "No valid name specified for parameter {name} within {context}"
            ));
        }

        if parameter.value.is_empty() {
            errors.push(format!(
                "No value specified for parameter {name} within {context}"
            ));
        } else {
            let value = &parameter.value;
            if !self.is_valid_for_type(value, &parameter.type_) {
                errors.push(format!(
                    "Value '{value}' is not valid for type {} in parameter {name} within {context}",
                    parameter.type_
                ));
            }
            if self.value_is_less_than_minimum(parameter) {
                errors.push(format!(
                    "Value '{value}' violates minimum value {} in parameter {name} within {context}",
                    parameter.minimum
                ));
            }
            if self.value_is_greater_than_maximum(parameter) {
                errors.push(format!(
                    "Value '{value}' violates maximum value {} in parameter {name} within {context}",
                    parameter.maximum
                ));
            }
        }

        if !self.has_valid_type(parameter) {
            errors.push(format!(
                "Invalid type {} specified for parameter {name} within {context}",
                parameter.type_
            ));
        }
        if !self.has_valid_minimum(parameter) {
            errors.push(format!(
                "Minimum value {} is not valid for format {} in parameter {name} within {context}",
                parameter.minimum, parameter.type_
            ));
        }
        if !self.has_valid_maximum(parameter) {
            errors.push(format!(
                "Maximum value {} is not valid for format {} in parameter {name} within {context}",
                parameter.maximum, parameter.type_
            ));
        }
        if !self.has_valid_resolve(parameter) {
            errors.push(format!(
                "Invalid resolve {} specified for parameter {name} within {context}",
                parameter.resolve
            ));
        } else if !self.has_valid_value_id(parameter) {
            errors.push(format!(
                "No identifier specified for parameter {name} with resolve {} within {context}",
                parameter.resolve
            ));
        }
    }
}

fn value_fits_type(value: &Value, type_: &str) -> bool {
    match (value, type_) {
        (Value::Array(items), _) => items.iter().all(|item| value_fits_type(item, type_)),
        (Value::Int(v), "bit") => *v >= 0,
        (Value::Int(v), "byte") => i8::try_from(*v).is_ok(),
        (Value::Int(v), "shortint") => i16::try_from(*v).is_ok(),
        (Value::Int(v), "int") => i32::try_from(*v).is_ok(),
        (Value::Int(v), "longint") => i64::try_from(*v).is_ok() || u64::try_from(*v).is_ok(),
        (Value::Int(_) | Value::Real(_), "shortreal" | "real") => true,
        _ => false,
    }
}

fn flatten(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().flat_map(flatten).collect(),
        other => vec![other],
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Int(v) => Some(*v as f64),
        Value::Real(v) => Some(*v),
        _ => None,
    }
}
