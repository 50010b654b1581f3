use std::time::Duration;

use serde::Deserialize;

use crate::models::{Coordinates, LocationInfo};

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Geocoding is not configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(String),
    #[error("geocoding failed ({status}): {message}")]
    Status { status: String, message: String },
    #[error("No address found for this location")]
    NoResults,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    address_components: Vec<AddressComponent>,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct AddressComponent {
    long_name: String,
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// Reverse geocoder backed by the Google Geocoding API.
pub struct Geocoder {
    api_key: String,
    language: String,
    client: reqwest::Client,
}

impl Geocoder {
    pub fn new(api_key: String, language: String) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| GeocodeError::Request(e.to_string()))?;
        Ok(Self {
            api_key,
            language,
            client,
        })
    }

    pub async fn reverse(&self, coords: Coordinates) -> Result<LocationInfo, GeocodeError> {
        if self.api_key.is_empty() {
            return Err(GeocodeError::MissingApiKey);
        }

        let res = self
            .client
            .get(GEOCODE_URL)
            .query(&[
                ("latlng", format!("{},{}", coords.latitude, coords.longitude)),
                ("language", self.language.clone()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        if !res.status().is_success() {
            return Err(GeocodeError::Request(format!(
                "server returned status {}",
                res.status()
            )));
        }

        let body = res
            .json::<GeocodeResponse>()
            .await
            .map_err(|e| GeocodeError::Request(format!("invalid response: {}", e)))?;

        location_from_response(body)
    }
}

fn location_from_response(body: GeocodeResponse) -> Result<LocationInfo, GeocodeError> {
    if body.status == "ZERO_RESULTS" {
        return Err(GeocodeError::NoResults);
    }
    if body.status != "OK" {
        return Err(GeocodeError::Status {
            message: body.error_message.unwrap_or_default(),
            status: body.status,
        });
    }

    let result = body.results.into_iter().next().ok_or(GeocodeError::NoResults)?;
    let find = |kind: &str| {
        result
            .address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == kind))
            .map(|c| c.long_name.clone())
    };

    let city = find("administrative_area_level_1")
        .or_else(|| find("locality"))
        .unwrap_or_default();
    let district = ["sublocality_level_1", "locality", "administrative_area_level_2"]
        .into_iter()
        .filter_map(|kind| find(kind))
        .find(|name| *name != city)
        .unwrap_or_default();
    let street_address = match (find("route"), find("street_number")) {
        (Some(route), Some(number)) => format!("{route} {number}"),
        (Some(route), None) => route,
        (None, number) => find("premise").or(number).unwrap_or_default(),
    };

    Ok(LocationInfo {
        country: find("country").unwrap_or_default(),
        city,
        district,
        street_address,
        postcode: find("postal_code").unwrap_or_default(),
        latitude: result.geometry.location.lat,
        longitude: result.geometry.location.lng,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<LocationInfo, GeocodeError> {
        location_from_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn maps_components_by_type() {
        let info = parse(
            r#"{
                "status": "OK",
                "results": [{
                    "formatted_address": "175 Sejong-daero, Jongno-gu, Seoul, South Korea",
                    "address_components": [
                        {"long_name": "175", "short_name": "175", "types": ["premise"]},
                        {"long_name": "Sejong-daero", "short_name": "Sejong-daero", "types": ["route"]},
                        {"long_name": "Jongno-gu", "short_name": "Jongno-gu", "types": ["sublocality_level_1", "sublocality", "political"]},
                        {"long_name": "Seoul", "short_name": "Seoul", "types": ["administrative_area_level_1", "political"]},
                        {"long_name": "South Korea", "short_name": "KR", "types": ["country", "political"]},
                        {"long_name": "03172", "short_name": "03172", "types": ["postal_code"]}
                    ],
                    "geometry": {"location": {"lat": 37.5720, "lng": 126.9769}}
                }, {
                    "address_components": [],
                    "geometry": {"location": {"lat": 0.0, "lng": 0.0}}
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(
            info,
            LocationInfo {
                country: "South Korea".into(),
                city: "Seoul".into(),
                district: "Jongno-gu".into(),
                street_address: "Sejong-daero".into(),
                postcode: "03172".into(),
                latitude: 37.5720,
                longitude: 126.9769,
            }
        );
    }

    #[test]
    fn route_and_number_are_joined() {
        let info = parse(
            r#"{
                "status": "OK",
                "results": [{
                    "address_components": [
                        {"long_name": "1600", "types": ["street_number"]},
                        {"long_name": "Amphitheatre Parkway", "types": ["route"]},
                        {"long_name": "Mountain View", "types": ["locality", "political"]},
                        {"long_name": "Santa Clara County", "types": ["administrative_area_level_2", "political"]},
                        {"long_name": "California", "types": ["administrative_area_level_1", "political"]},
                        {"long_name": "United States", "types": ["country", "political"]},
                        {"long_name": "94043", "types": ["postal_code"]}
                    ],
                    "geometry": {"location": {"lat": 37.422, "lng": -122.084}}
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(info.street_address, "Amphitheatre Parkway 1600");
        assert_eq!(info.city, "California");
        assert_eq!(info.district, "Mountain View");
        assert_eq!(info.country, "United States");
    }

    #[test]
    fn error_statuses() {
        assert!(matches!(
            parse(r#"{"status": "ZERO_RESULTS", "results": []}"#),
            Err(GeocodeError::NoResults)
        ));
        assert!(matches!(
            parse(r#"{"status": "OK", "results": []}"#),
            Err(GeocodeError::NoResults)
        ));
        let err = parse(r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "geocoding failed (REQUEST_DENIED): The provided API key is invalid."
        );
    }

    #[tokio::test]
    async fn empty_key_fails_without_request() {
        let geocoder = Geocoder::new(String::new(), "en".into()).unwrap();
        let result = geocoder
            .reverse(Coordinates {
                latitude: 37.5,
                longitude: 127.0,
            })
            .await;
        assert!(matches!(result, Err(GeocodeError::MissingApiKey)));
    }
}
