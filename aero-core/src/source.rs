//! Weather data sources
//!
//! The dashboard treats its data source as a black box: a synchronous,
//! infallible, deterministic `city -> snapshot` function. The only
//! implementation synthesizes values from a hash of the city name.

use crate::snapshot::{Alert, Condition, Coordinates, ForecastDay, WeatherSnapshot};

/// Produces a snapshot for a city name. Must be deterministic.
pub trait WeatherSource: Send + Sync {
    fn snapshot(&self, city: &str) -> WeatherSnapshot;
}

/// Deterministic demo data derived from the city name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticSource;

/// Relative temperature and condition for Mon..Sun
const FORECAST_PATTERN: [(&str, i32, Condition); 7] = [
    ("Mon", 1, Condition::Cloudy),
    ("Tue", 3, Condition::Sunny),
    ("Wed", 0, Condition::Rain),
    ("Thu", -1, Condition::Cloudy),
    ("Fri", 2, Condition::Sunny),
    ("Sat", 4, Condition::Sunny),
    ("Sun", 1, Condition::PartlyCloudy),
];

/// Sum of the UTF-16 code units of the name, wrapping at `u32::MAX`
pub fn city_hash(city: &str) -> u32 {
    city.encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_add(u32::from(unit)))
}

impl WeatherSource for SyntheticSource {
    fn snapshot(&self, city: &str) -> WeatherSnapshot {
        let hash = city_hash(city);
        let temperature = 10 + (hash % 20) as i32;

        let condition = match hash % 3 {
            0 => Condition::Sunny,
            1 => Condition::Cloudy,
            _ => Condition::Rain,
        };

        let alerts = if hash % 5 == 0 {
            vec![Alert {
                kind: "Weather Advisory".into(),
                message: "Strong winds and potential for light rain in the evening.".into(),
            }]
        } else {
            Vec::new()
        };

        let forecast = FORECAST_PATTERN
            .iter()
            .map(|&(day, offset, condition)| ForecastDay {
                day,
                temp: temperature + offset,
                condition,
            })
            .collect();

        let tenth = f64::from(hash % 10) / 10.0;

        WeatherSnapshot {
            city: city.to_string(),
            country: "US".into(),
            condition,
            description: "Light breeze and scattered clouds".into(),
            temperature,
            high: temperature + 4,
            low: temperature - 3,
            feels_like: temperature + 1,
            humidity: 40 + hash % 50,
            wind_speed: 5 + hash % 15,
            wind_direction: hash % 360,
            pressure: 1010 + hash % 10,
            visibility: 5 + hash % 10,
            uv_index: hash % 11,
            air_quality: 20 + hash % 80,
            sunrise: "06:45 AM".into(),
            sunset: "06:12 PM".into(),
            coords: Coordinates::new(34.0 + tenth, -118.0 + tenth),
            alerts,
            forecast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_hash_sums_code_units() {
        assert_eq!(city_hash(""), 0);
        assert_eq!(city_hash("A"), 65);
        assert_eq!(city_hash("Ab"), 65 + 98);
    }

    #[test]
    fn test_snapshot_is_deterministic() {
        let source = SyntheticSource;
        for city in ["Austin", "San Francisco", "Local Area", "Zürich", "東京"] {
            assert_eq!(source.snapshot(city), source.snapshot(city));
        }
    }

    #[test]
    fn test_snapshot_values_for_austin() {
        // A(65) u(117) s(115) t(116) i(105) n(110)
        let hash = 628;
        assert_eq!(city_hash("Austin"), hash);

        let snapshot = SyntheticSource.snapshot("Austin");
        assert_eq!(snapshot.city, "Austin");
        assert_eq!(snapshot.temperature, 10 + 628 % 20);
        assert_eq!(snapshot.condition, Condition::Cloudy);
        assert_eq!(snapshot.humidity, 40 + 628 % 50);
        assert_eq!(snapshot.wind_direction, 628 % 360);
        assert!((snapshot.coords.lat - 34.8).abs() < 1e-9);
        assert!((snapshot.coords.lon - -117.2).abs() < 1e-9);
        assert!(snapshot.alerts.is_empty());
    }

    #[test]
    fn test_snapshot_ranges() {
        for city in ["Austin", "Oslo", "Lima", "San Francisco", "x", ""] {
            let s = SyntheticSource.snapshot(city);
            assert_eq!(s.forecast.len(), 7);
            assert!((10..30).contains(&s.temperature));
            assert!((40..90).contains(&s.humidity));
            assert!((5..20).contains(&s.wind_speed));
            assert!(s.wind_direction < 360);
            assert!((1010..1020).contains(&s.pressure));
            assert!(s.uv_index <= 10);
            assert!((20..100).contains(&s.air_quality));
            assert!(s.coords.lat.is_finite() && s.coords.lon.is_finite());
        }
    }

    #[test]
    fn test_alert_when_hash_divisible_by_five() {
        let city = (0..200)
            .map(|n| format!("City{}", n))
            .find(|c| city_hash(c) % 5 == 0)
            .expect("some name hashes to a multiple of five");
        let snapshot = SyntheticSource.snapshot(&city);
        assert_eq!(snapshot.alerts.len(), 1);
        assert_eq!(snapshot.alerts[0].kind, "Weather Advisory");
    }

    #[test]
    fn test_very_long_name_wraps_instead_of_overflowing() {
        // 70 000 units of 0xFFEE sum to 4 586 260 000, past u32::MAX
        let city = "\u{FFEE}".repeat(70_000);
        assert_eq!(city_hash(&city), 291_292_704);

        let snapshot = SyntheticSource.snapshot(&city);
        // 291 292 704 % 20 == 4
        assert_eq!(snapshot.temperature, 14);
        assert_eq!(snapshot.city.chars().count(), 70_000);
    }

    #[test]
    fn test_forecast_follows_calendar_order() {
        let s = SyntheticSource.snapshot("Austin");
        let days: Vec<_> = s.forecast.iter().map(|d| d.day).collect();
        assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(s.forecast[5].temp, s.temperature + 4);
    }
}
