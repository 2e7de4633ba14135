//! Weather snapshot value types

use std::fmt;

/// A geographic position in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.lat >= 0.0 { 'N' } else { 'S' };
        let ew = if self.lon >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.2}°{}, {:.2}°{}",
            self.lat.abs(),
            ns,
            self.lon.abs(),
            ew
        )
    }
}

/// Sky condition as shown on the hero card and forecast rows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Condition {
    #[default]
    Sunny,
    Cloudy,
    Rain,
    PartlyCloudy,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rain => "Rain",
            Condition::PartlyCloudy => "Partly Cloudy",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An active weather alert
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub kind: String,
    pub message: String,
}

/// One day of the 7-day forecast
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastDay {
    pub day: &'static str,
    pub temp: i32,
    pub condition: Condition,
}

impl ForecastDay {
    /// Overnight low shown next to the high
    pub fn low(&self) -> i32 {
        self.temp - 5
    }
}

/// One fully-resolved weather value for a city.
///
/// Snapshots are produced by a [`WeatherSource`](crate::source::WeatherSource)
/// and never mutated afterwards; the dashboard replaces them wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: String,
    pub condition: Condition,
    pub description: String,
    /// Degrees Celsius
    pub temperature: i32,
    pub high: i32,
    pub low: i32,
    pub feels_like: i32,
    /// Percent
    pub humidity: u32,
    /// km/h
    pub wind_speed: u32,
    /// Degrees clockwise from north
    pub wind_direction: u32,
    /// hPa
    pub pressure: u32,
    /// km
    pub visibility: u32,
    pub uv_index: u32,
    pub air_quality: u32,
    /// Display string, e.g. `06:45 AM`
    pub sunrise: String,
    pub sunset: String,
    pub coords: Coordinates,
    pub alerts: Vec<Alert>,
    /// Exactly seven entries in calendar order
    pub forecast: Vec<ForecastDay>,
}

impl WeatherSnapshot {
    /// Same snapshot pinned to other coordinates.
    ///
    /// Used when the place name came from reverse geocoding: the generated
    /// values follow the name, the position stays where the user is.
    pub fn at(mut self, coords: Coordinates) -> Self {
        self.coords = coords;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_display() {
        assert_eq!(
            Coordinates::new(37.77, -122.42).to_string(),
            "37.77°N, 122.42°W"
        );
        assert_eq!(Coordinates::new(-33.87, 151.21).to_string(), "33.87°S, 151.21°E");
    }

    #[test]
    fn test_forecast_low() {
        let day = ForecastDay {
            day: "Mon",
            temp: 20,
            condition: Condition::Sunny,
        };
        assert_eq!(day.low(), 15);
    }
}
