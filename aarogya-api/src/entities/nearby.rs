use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use aarogya_domain::entities::{Hospital as DomainHospital, WeatherReport as DomainWeatherReport};

/// Request body for the weather route
#[derive(Debug, Deserialize, ToSchema)]
pub struct WeatherRequest {
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
}

/// Current weather at a coordinate
#[derive(Debug, Serialize, ToSchema)]
pub struct WeatherResponse {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Whether it is currently daytime
    pub is_day: bool,
}

impl From<DomainWeatherReport> for WeatherResponse {
    fn from(report: DomainWeatherReport) -> Self {
        Self {
            temperature: report.temperature,
            is_day: report.is_day,
        }
    }
}

/// Query parameters for the hospitals route
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct HospitalsQueryParams {
    /// Latitude in degrees
    pub lat: Option<f64>,
    /// Longitude in degrees
    pub lng: Option<f64>,
}

/// A hospital near the requested coordinate
#[derive(Debug, Serialize, ToSchema)]
pub struct HospitalResponse {
    /// OpenStreetMap node id
    pub id: i64,
    /// Hospital name, if tagged
    pub name: Option<String>,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl From<DomainHospital> for HospitalResponse {
    fn from(hospital: DomainHospital) -> Self {
        Self {
            id: hospital.id,
            name: hospital.name,
            lat: hospital.lat,
            lng: hospital.lng,
        }
    }
}
