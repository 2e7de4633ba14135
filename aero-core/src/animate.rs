//! Count-up projections of snapshot readings
//!
//! Animated numbers are not state. They are recomputed from the current
//! snapshot and the number of ticks since it arrived, easing from zero to
//! the real value.

use crate::snapshot::WeatherSnapshot;

/// Length of a count-up in ticks
pub const COUNT_UP_TICKS: u32 = 24;

/// Cubic ease-out over `0.0..=1.0`
pub fn ease_out(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Value of a count-up toward `target` after `elapsed` ticks
pub fn count_up(target: f64, elapsed: u32) -> f64 {
    if elapsed >= COUNT_UP_TICKS {
        return target;
    }
    target * ease_out(f64::from(elapsed) / f64::from(COUNT_UP_TICKS))
}

fn count_up_int(target: i32, elapsed: u32) -> i32 {
    count_up(f64::from(target), elapsed).round() as i32
}

fn count_up_uint(target: u32, elapsed: u32) -> u32 {
    count_up(f64::from(target), elapsed).round() as u32
}

/// The numbers shown on the dashboard cards at a point in the animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedReadings {
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: u32,
    /// Kept fractional so the gauge moves smoothly
    pub wind_speed: f64,
    pub uv_index: u32,
    pub visibility: u32,
    pub pressure: u32,
    pub air_quality: u32,
}

impl AnimatedReadings {
    pub fn project(snapshot: &WeatherSnapshot, elapsed: u32) -> Self {
        Self {
            temperature: count_up_int(snapshot.temperature, elapsed),
            feels_like: count_up_int(snapshot.feels_like, elapsed),
            humidity: count_up_uint(snapshot.humidity, elapsed),
            wind_speed: count_up(f64::from(snapshot.wind_speed), elapsed),
            uv_index: count_up_uint(snapshot.uv_index, elapsed),
            visibility: count_up_uint(snapshot.visibility, elapsed),
            pressure: count_up_uint(snapshot.pressure, elapsed),
            air_quality: count_up_uint(snapshot.air_quality, elapsed),
        }
    }

    /// Final values, as if the animation had finished
    pub fn settled(snapshot: &WeatherSnapshot) -> Self {
        Self::project(snapshot, COUNT_UP_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SyntheticSource, WeatherSource};

    #[test]
    fn test_ease_out_bounds() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn test_count_up_monotonic() {
        let mut last = 0.0;
        for tick in 0..=COUNT_UP_TICKS {
            let value = count_up(100.0, tick);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_projection_starts_at_zero_and_settles() {
        let snapshot = SyntheticSource.snapshot("Austin");

        let start = AnimatedReadings::project(&snapshot, 0);
        assert_eq!(start.temperature, 0);
        assert_eq!(start.pressure, 0);

        let end = AnimatedReadings::settled(&snapshot);
        assert_eq!(end.temperature, snapshot.temperature);
        assert_eq!(end.humidity, snapshot.humidity);
        assert_eq!(end.pressure, snapshot.pressure);
        assert_eq!(end.wind_speed, f64::from(snapshot.wind_speed));
        assert_eq!(AnimatedReadings::project(&snapshot, 1000), end);
    }

    #[test]
    fn test_projection_is_pure() {
        let snapshot = SyntheticSource.snapshot("Oslo");
        assert_eq!(
            AnimatedReadings::project(&snapshot, 7),
            AnimatedReadings::project(&snapshot, 7)
        );
    }
}
