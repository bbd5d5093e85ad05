//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Forecast adapter against a mock Open-Meteo server
//! - The full forecast use case wired to the real adapter

use std::sync::Arc;

use application::{FETCH_FAILED_MESSAGE, FixedClock, ForecastPayload, ForecastService};
use application::ports::ForecastPort;
use chrono::{TimeZone, Utc};
use domain::{Coordinates, Timezone};
use infrastructure::{ForecastAdapter, load_weather_codes};
use integration_weather::WeatherConfig;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter_for(server: &MockServer) -> ForecastAdapter {
    ForecastAdapter::with_config(WeatherConfig {
        base_url: server.uri(),
        timeout_secs: Some(5),
    })
    .unwrap()
}

fn service_for(server: &MockServer) -> ForecastService {
    ForecastService::new(
        Arc::new(adapter_for(server)),
        Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 5, 0).unwrap(),
            Timezone::utc(),
        )),
        Arc::new(load_weather_codes(None).unwrap()),
    )
}

fn sample_body() -> serde_json::Value {
    let times: Vec<String> = (0..24).map(|h| format!("2024-01-15T{h:02}:00")).collect();
    json!({
        "latitude": 48.14,
        "longitude": 11.58,
        "timezone": "GMT",
        "current": {
            "time": "2024-01-15T12:00",
            "interval": 900,
            "temperature_2m": 2.0,
            "precipitation": 0.0,
            "weather_code": 71
        },
        "hourly": {
            "time": times,
            "temperature_2m": vec![1.5; 24],
            "precipitation": vec![0.3; 24],
            "weather_code": vec![73; 24]
        }
    })
}

// ============================================================================
// Forecast Adapter Tests
// ============================================================================

mod forecast_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn fetch_maps_sections() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("latitude", "48.14"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
            .mount(&server)
            .await;

        let upstream = adapter_for(&server)
            .fetch_forecast(&Coordinates::new(48.14, 11.58))
            .await
            .unwrap();

        assert_eq!(upstream.current.unwrap()["weather_code"], json!(71));
        let hourly = upstream.hourly.unwrap();
        assert_eq!(hourly.len(), 24);
        assert_eq!(hourly.record_at(13).unwrap().weather_code, 73);
    }

    #[tokio::test]
    async fn server_error_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = adapter_for(&server)
            .fetch_forecast(&Coordinates::new(0.0, 0.0))
            .await
            .unwrap_err();

        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn availability_follows_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        assert!(adapter_for(&server).is_available().await);
    }
}

// ============================================================================
// End-to-end Forecast Tests
// ============================================================================

mod forecast_service_tests {
    use super::*;

    #[tokio::test]
    async fn renders_snow_forecast() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
            .mount(&server)
            .await;

        let response = service_for(&server)
            .get_forecast(Coordinates::new(48.14, 11.58))
            .await
            .unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["forecast"]["current"]["description"], "Slight snow fall");
        assert_eq!(
            json["forecast"]["current"]["icon_url"],
            "https://openweathermap.org/img/wn/13d@2x.png"
        );
        let hourly = json["forecast"]["hourly"].as_object().unwrap();
        assert_eq!(hourly.len(), 5);
        assert!(hourly.contains_key("2024-01-15T13:00:00+00:00"));
        assert!(hourly.contains_key("2024-01-15T17:00:00+00:00"));
    }

    #[tokio::test]
    async fn upstream_500_degrades_to_failed_fetching() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let response = service_for(&server)
            .get_forecast(Coordinates::new(48.14, 11.58))
            .await
            .unwrap();

        assert_eq!(
            response.forecast,
            ForecastPayload::Failed {
                error: FETCH_FAILED_MESSAGE.to_string()
            }
        );
        assert_eq!(response.latitude, Some(48.14));
    }

    #[tokio::test]
    async fn undecodable_body_degrades_to_failed_fetching() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let response = service_for(&server)
            .get_forecast(Coordinates::new(48.14, 11.58))
            .await
            .unwrap();

        assert!(matches!(response.forecast, ForecastPayload::Failed { .. }));
    }

    #[tokio::test]
    async fn missing_current_section_fails_request() {
        let server = MockServer::start().await;
        let mut body = sample_body();
        body.as_object_mut().unwrap().remove("current");
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let result = service_for(&server)
            .get_forecast(Coordinates::new(48.14, 11.58))
            .await;

        assert!(matches!(result, Err(application::ApplicationError::Domain(_))));
    }
}
