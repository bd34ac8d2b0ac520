use crate::schema::TimePeriod;

// Defaults the surrounding schemas would apply: 30s polling cadence from
// the generic polling-component schema, 19-43 degC from the device's
// supported temperature range.

pub fn update_interval() -> TimePeriod {
    TimePeriod::from_millis(30_000)
}

pub fn visual_min_temperature() -> f32 {
    19.0
}

pub fn visual_max_temperature() -> f32 {
    43.0
}

pub fn visual_temperature_step() -> f32 {
    1.0
}
