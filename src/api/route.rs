use serde::{Deserialize, Serialize};

use crate::constants::ROUTE_FETCH_FAILED;
use crate::models::{LineCode, PayloadError, Route, Stop};

/// Body of a route search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    #[serde(rename = "startCD")]
    pub start_cd: String,
    #[serde(rename = "endCD")]
    pub end_cd: String,
    /// Whether the search may use the Metro Seven/Eight Liner
    pub allow78: bool,
}

impl RouteRequest {
    /// Build a request from the search form.
    ///
    /// The form's Seven/Eight Liner choice and the service flag have opposite
    /// senses, so the form value is inverted on the wire.
    #[must_use]
    pub fn from_form(start_cd: &str, end_cd: &str, form_allow78: bool) -> Self {
        Self {
            start_cd: start_cd.trim().to_string(),
            end_cd: end_cd.trim().to_string(),
            allow78: !form_allow78,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationPath {
    pub station_name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "lineCD")]
    pub line_cd: LineCode,
    pub transfer: bool,
}

/// Body of a successful route search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    /// `null` when the service has no stops to report
    #[serde(default)]
    pub path: Option<Vec<StationPath>>,
    pub total_distance: f64,
}

impl TryFrom<RouteResponse> for Route {
    type Error = PayloadError;

    fn try_from(response: RouteResponse) -> Result<Self, Self::Error> {
        let stops = response
            .path
            .unwrap_or_default()
            .into_iter()
            .map(|station| {
                Stop::new(station.station_name, station.lat, station.lon, station.line_cd)
                    .with_transfer(station.transfer)
            })
            .collect();

        Route::new(stops, response.total_distance)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Route service responded with status {0}")]
    Status(u16),

    #[error("Failed to deserialize: {0}")]
    Decode(String),

    #[error("Invalid route: {0}")]
    Payload(#[from] PayloadError),
}

impl FetchError {
    /// Message shown to the user; details stay in the log
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        ROUTE_FETCH_FAILED
    }
}

/// Decode and validate a route response body
///
/// # Errors
///
/// Returns `FetchError::Decode` for malformed JSON or missing fields, and
/// `FetchError::Payload` for values that fail validation.
pub fn parse_route(body: &str) -> Result<Route, FetchError> {
    let response: RouteResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(Route::try_from(response)?)
}

/// Turn an HTTP status and body into a route
///
/// # Errors
///
/// Returns `FetchError::Status` for any non-2xx status without looking at the
/// body, otherwise whatever [`parse_route`] reports.
pub fn route_from_response(status: u16, body: &str) -> Result<Route, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    parse_route(body)
}

/// Join a relative endpoint onto the page origin; absolute endpoints pass through
#[must_use]
pub fn resolve_endpoint(origin: Option<&str>, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }

    match origin {
        Some(origin) => format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        ),
        None => endpoint.to_string(),
    }
}

/// Client for the route search service
#[derive(Debug, Clone)]
pub struct RouteClient {
    endpoint: String,
    http: reqwest::Client,
}

impl RouteClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Client for the current page, resolving `endpoint` against its origin
    #[must_use]
    pub fn for_page(endpoint: &str) -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::new(resolve_endpoint(origin.as_deref(), endpoint))
    }

    /// Request a route and validate the response
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - The response status is not ok
    /// - The response body cannot be deserialized or fails validation
    pub async fn fetch_route(&self, request: &RouteRequest) -> Result<Route, FetchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        route_from_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LatLng;

    #[test]
    fn test_form_allow78_is_inverted() {
        let request = RouteRequest::from_form("2800208", "2800112", true);
        assert!(!request.allow78);

        let request = RouteRequest::from_form("2800208", "2800112", false);
        assert!(request.allow78);
    }

    #[test]
    fn test_request_wire_format() {
        let request = RouteRequest::from_form(" 2800208 ", "2800112", true);
        let json = serde_json::to_value(&request).expect("should serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "startCD": "2800208",
                "endCD": "2800112",
                "allow78": false
            })
        );
    }

    #[test]
    fn test_parse_route() {
        let body = r#"{
            "path": [
                {"stationName": "新宿", "lineCD": 28001, "lat": 35.6938, "lon": 139.7034, "transfer": false},
                {"stationName": "新宿", "lineCD": 11302, "lat": 35.6896, "lon": 139.7006, "transfer": true}
            ],
            "totalDistance": 4.25
        }"#;
        let route = parse_route(body).expect("should parse");

        assert_eq!(route.stops().len(), 2);
        assert_eq!(route.total_distance_km(), 4.25);
        assert_eq!(route.stops()[0].name, "新宿");
        assert_eq!(route.stops()[0].line_code, 28001);
        assert_eq!(route.stops()[1].position, LatLng::new(35.6896, 139.7006));
        assert!(route.stops()[1].transfer);
    }

    #[test]
    fn test_parse_null_path_is_empty_route() {
        let route = parse_route(r#"{"path": null, "totalDistance": 0}"#).expect("should parse");
        assert!(route.is_empty());
    }

    #[test]
    fn test_parse_missing_field_is_decode_error() {
        let body = r#"{"path": [{"stationName": "A", "lineCD": 1, "lon": 139.0, "transfer": false}], "totalDistance": 1.0}"#;
        assert!(matches!(parse_route(body), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_parse_invalid_coordinate_is_payload_error() {
        let body = r#"{"path": [{"stationName": "A", "lineCD": 1, "lat": 95.0, "lon": 139.0, "transfer": false}], "totalDistance": 1.0}"#;
        assert!(matches!(
            parse_route(body),
            Err(FetchError::Payload(PayloadError::InvalidCoordinate { position: 1, .. }))
        ));
    }

    #[test]
    fn test_parse_not_json() {
        assert!(matches!(parse_route("404 page not found"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_error_status_is_reported_before_body() {
        let body = r#"{"path": [], "totalDistance": 1.0}"#;

        assert_eq!(route_from_response(404, "404 page not found"), Err(FetchError::Status(404)));
        assert_eq!(route_from_response(500, body), Err(FetchError::Status(500)));
        assert_eq!(route_from_response(302, body), Err(FetchError::Status(302)));
    }

    #[test]
    fn test_success_status_parses_body() {
        let body = r#"{"path": [{"stationName": "A", "lineCD": 1, "lat": 35.0, "lon": 139.0, "transfer": false}], "totalDistance": 2.5}"#;
        let route = route_from_response(200, body).expect("should parse");

        assert_eq!(route, parse_route(body).expect("should parse"));
        assert!(matches!(route_from_response(200, "not json"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_user_message() {
        assert_eq!(FetchError::Status(404).user_message(), "経路の取得に失敗しました");
        assert_eq!(FetchError::Status(500).to_string(), "Route service responded with status 500");
    }

    #[test]
    fn test_resolve_endpoint() {
        assert_eq!(
            resolve_endpoint(Some("http://localhost:8080"), "/api/route"),
            "http://localhost:8080/api/route"
        );
        assert_eq!(
            resolve_endpoint(Some("http://localhost:8080/"), "api/route"),
            "http://localhost:8080/api/route"
        );
        assert_eq!(
            resolve_endpoint(Some("http://localhost:8080"), "https://routes.example/api/route"),
            "https://routes.example/api/route"
        );
        assert_eq!(resolve_endpoint(None, "/api/route"), "/api/route");
    }
}
