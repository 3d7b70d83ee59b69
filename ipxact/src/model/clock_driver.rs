/// A time value with an optional unit, e.g. `<ipxact:clockPeriod units="ns">8</ipxact:clockPeriod>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockUnit {
    pub value: String,
    /// `ns` or `ps`, empty when not given
    pub unit: String,
}

impl ClockUnit {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: String::new(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

/// `ipxact:otherClockDriver`: a clock that is not driven through a port
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtherClockDriver {
    pub clock_name: String,
    pub clock_source: String,
    pub clock_period: ClockUnit,
    pub clock_pulse_offset: ClockUnit,
    pub clock_pulse_value: String,
    pub clock_pulse_duration: ClockUnit,
}

impl OtherClockDriver {
    pub fn new(clock_name: impl Into<String>) -> Self {
        Self {
            clock_name: clock_name.into(),
            ..Default::default()
        }
    }
}

/// Units a [`ClockUnit`] may carry
pub const TIME_UNITS: [&str; 3] = ["", "ns", "ps"];
