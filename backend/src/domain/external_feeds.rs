//! Read-only shapes mirroring third-party weather, event and crowd feeds.
//!
//! These values arrive from upstream APIs and are only passed through, so
//! they carry structural serde checks and nothing more.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::levels::CrowdLevel;

/// Current conditions plus a short forecast for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeatherData {
    /// Place name the reading applies to.
    pub location: String,
    pub temperature_celsius: f32,
    /// Short description, e.g. `light rain`.
    pub condition: String,
    pub humidity_percent: u8,
    pub wind_speed_kph: f32,
    /// Upcoming days, earliest first.
    pub forecast: Vec<ForecastDay>,
}

/// Forecast for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub high_celsius: f32,
    pub low_celsius: f32,
    pub condition: String,
    /// Chance of rain, `0..=100`.
    pub precipitation_chance: u8,
}

/// A local event listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventData {
    /// Upstream identifier.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub venue: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    pub category: String,
    /// Cheapest ticket price, when the feed publishes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_from: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Crowd-density reading for a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CrowdData {
    pub location: String,
    pub level: CrowdLevel,
    /// Busiest hours of the day in local time, e.g. `11:00-14:00`.
    pub peak_hours: Vec<String>,
    /// Occupancy relative to capacity, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_percent: Option<u8>,
    pub observed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn weather_with_forecast_deserialises() {
        let weather: WeatherData = serde_json::from_value(json!({
            "location": "Edinburgh",
            "temperatureCelsius": 11.5,
            "condition": "overcast",
            "humidityPercent": 82,
            "windSpeedKph": 24.0,
            "forecast": [{
                "date": "2026-10-17",
                "highCelsius": 13.0,
                "lowCelsius": 6.0,
                "condition": "showers",
                "precipitationChance": 70
            }]
        }))
        .expect("valid weather");
        assert_eq!(weather.forecast.len(), 1);
        assert_eq!(weather.humidity_percent, 82);
    }

    #[rstest]
    fn event_optional_fields_may_be_omitted() {
        let event: EventData = serde_json::from_value(json!({
            "id": "evt-42",
            "name": "Fringe Opening Night",
            "venue": "Usher Hall",
            "startsAt": "2026-08-01T19:30:00Z",
            "category": "theatre"
        }))
        .expect("valid event");
        assert!(event.ends_at.is_none());

        let json = serde_json::to_value(&event).expect("serialise");
        assert!(json.get("priceFrom").is_none());
    }

    #[rstest]
    #[case::unknown_level(json!({
        "location": "Louvre", "level": "packed", "peakHours": [],
        "observedAt": "2026-06-01T10:00:00Z"
    }))]
    #[case::missing_observed_at(json!({
        "location": "Louvre", "level": "high", "peakHours": ["10:00-13:00"]
    }))]
    #[case::capacity_overflow(json!({
        "location": "Louvre", "level": "high", "peakHours": [],
        "capacityPercent": 300, "observedAt": "2026-06-01T10:00:00Z"
    }))]
    fn crowd_data_rejects_malformed_payloads(#[case] payload: serde_json::Value) {
        assert!(serde_json::from_value::<CrowdData>(payload).is_err());
    }
}
