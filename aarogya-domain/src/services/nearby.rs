use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::entities::{Hospital, WeatherReport};

const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";
const OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Half-width of the hospital search box in degrees, roughly 2-3 km
const BOUNDING_BOX_DELTA: f64 = 0.02;

/// Nearby lookup errors
#[derive(Debug, Error)]
pub enum NearbyServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// The outbound request failed
    #[error("Lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The lookup provider returned a non-success status
    #[error("Lookup provider returned status {status}")]
    Upstream { status: u16 },
}

/// Trait for location-based lookups
#[async_trait]
pub trait NearbyServiceTrait: Send + Sync {
    /// Get the current weather at a coordinate from Open-Meteo
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReport, NearbyServiceError>;

    /// Find hospitals around a coordinate via an Overpass bounding-box query
    async fn nearby_hospitals(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<Hospital>, NearbyServiceError>;
}

/// Location lookup service over the public Open-Meteo and Overpass APIs
pub struct NearbyService {
    client: reqwest::Client,
}

impl NearbyService {
    /// Create a new lookup service
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for NearbyService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NearbyServiceTrait for NearbyService {
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReport, NearbyServiceError> {
        debug!(latitude, longitude, "Fetching current weather");

        let response = self
            .client
            .get(OPEN_METEO_URL)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", "temperature_2m,is_day".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NearbyServiceError::Upstream {
                status: response.status().as_u16(),
            });
        }

        let forecast: ForecastResponse = response.json().await?;
        Ok(WeatherReport {
            temperature: forecast.current.temperature_2m,
            is_day: forecast.current.is_day != 0,
        })
    }

    async fn nearby_hospitals(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<Hospital>, NearbyServiceError> {
        let south = lat - BOUNDING_BOX_DELTA;
        let north = lat + BOUNDING_BOX_DELTA;
        let west = lng - BOUNDING_BOX_DELTA;
        let east = lng + BOUNDING_BOX_DELTA;

        let query = format!(
            "[out:json];\nnode[\"amenity\"=\"hospital\"]({south},{west},{north},{east});\nout;"
        );

        debug!(lat, lng, "Querying Overpass for nearby hospitals");

        let response = self.client.post(OVERPASS_URL).body(query).send().await?;

        if !response.status().is_success() {
            return Err(NearbyServiceError::Upstream {
                status: response.status().as_u16(),
            });
        }

        let data: OverpassResponse = response.json().await?;
        Ok(data
            .elements
            .into_iter()
            .map(|element| Hospital {
                id: element.id,
                name: element.tags.get("name").cloned(),
                lat: element.lat,
                lng: element.lon,
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature_2m: f64,
    is_day: i64,
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    id: i64,
    lat: f64,
    lon: f64,
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// Create the default nearby lookup service
pub fn create_default_nearby_service() -> impl NearbyServiceTrait + Send + Sync {
    NearbyService::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_response_deserializes() {
        let forecast: ForecastResponse = serde_json::from_str(
            r#"{"current": {"temperature_2m": 28.4, "is_day": 1}}"#,
        )
        .unwrap();
        assert_eq!(forecast.current.temperature_2m, 28.4);
        assert_eq!(forecast.current.is_day, 1);
    }

    #[test]
    fn overpass_elements_map_to_hospitals() {
        let data: OverpassResponse = serde_json::from_str(
            r#"{"elements": [{"id": 42, "lat": 17.4, "lon": 78.5, "tags": {"name": "City Hospital", "amenity": "hospital"}}]}"#,
        )
        .unwrap();
        assert_eq!(data.elements.len(), 1);
        assert_eq!(data.elements[0].tags.get("name").unwrap(), "City Hospital");
    }

    #[test]
    fn missing_elements_field_defaults_to_empty() {
        let data: OverpassResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(data.elements.is_empty());
    }
}
