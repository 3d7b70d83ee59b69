use super::Validator;
use crate::{
    expression::{ExpressionParser, Value},
    model::{ClockUnit, OtherClockDriver, TIME_UNITS},
};

/// Validator for `ipxact:otherClockDriver`
pub struct OtherClockDriverValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> OtherClockDriverValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    pub fn has_valid_clock_name(&self, driver: &OtherClockDriver) -> bool {
        !driver.clock_name.trim().is_empty()
    }

    pub fn has_valid_clock_period(&self, driver: &OtherClockDriver) -> bool {
        self.is_valid_time(&driver.clock_period, |v| v > 0.0)
    }

    pub fn has_valid_clock_pulse_offset(&self, driver: &OtherClockDriver) -> bool {
        self.is_valid_time(&driver.clock_pulse_offset, |v| v >= 0.0)
    }

    /// The pulse value is the logic level of the pulse, 0 or 1
    pub fn has_valid_clock_pulse_value(&self, driver: &OtherClockDriver) -> bool {
        matches!(self.parser.parse_int(&driver.clock_pulse_value), Ok(0 | 1))
    }

    pub fn has_valid_clock_pulse_duration(&self, driver: &OtherClockDriver) -> bool {
        self.is_valid_time(&driver.clock_pulse_duration, |v| v > 0.0)
    }

    fn is_valid_time(&self, time: &ClockUnit, accept: impl Fn(f64) -> bool) -> bool {
        let in_range = match self.parser.parse_expression(&time.value) {
            Ok(Value::Int(v)) => accept(v as f64),
            Ok(Value::Real(v)) => accept(v),
            _ => false,
        };
        in_range && TIME_UNITS.contains(&time.unit.as_str())
    }
}

impl<'a> Validator<OtherClockDriver> for OtherClockDriverValidator<'a> {
    fn validate(&self, driver: &OtherClockDriver) -> bool {
        self.has_valid_clock_name(driver)
            && self.has_valid_clock_period(driver)
            && self.has_valid_clock_pulse_offset(driver)
            && self.has_valid_clock_pulse_value(driver)
            && self.has_valid_clock_pulse_duration(driver)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, driver: &OtherClockDriver, context: &str) {
        let name = &driver.clock_name;
        if !self.has_valid_clock_name(driver) {
            errors.push(format!(
                "No clock name specified for other clock driver within {context}."
            ));
        }
        if !self.has_valid_clock_period(driver) {
            errors.push(format!(
                "Invalid clock period set for other clock driver {name} within {context}."
            ));
        }
        if !self.has_valid_clock_pulse_offset(driver) {
            errors.push(format!(
                "Invalid clock pulse offset set for other clock driver {name} within {context}."
            ));
        }
        if !self.has_valid_clock_pulse_value(driver) {
            errors.push(format!(
                "Invalid clock pulse value set for other clock driver {name} within {context}."
            ));
        }
        if !self.has_valid_clock_pulse_duration(driver) {
            errors.push(format!(
                "Invalid clock pulse duration set for other clock driver {name} within {context}."
            ));
        }
    }
}
