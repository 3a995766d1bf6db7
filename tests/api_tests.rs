//! API surface tests

use bsdate::api::handlers::{
    ApiResponse, DateRequest, DateResponse, EndpointInfo, HealthResponse, RootResponse,
    VersionResponse, DOWNLOAD_FILE_NAME, XLSX_CONTENT_TYPE,
};
use bsdate::api::server::{ApiConfig, AppState};

// ═══════════════════════════════════════════════════════════════════════════
// CONFIG TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_config_default() {
    let config = ApiConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
}

#[test]
fn test_config_custom() {
    let config = ApiConfig {
        host: "0.0.0.0".to_string(),
        port: 3000,
    };
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
}

#[test]
fn test_app_state_version() {
    let state = AppState {
        version: "1.0.0".to_string(),
    };
    assert_eq!(state.version, "1.0.0");
}

// ═══════════════════════════════════════════════════════════════════════════
// API RESPONSE TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_api_response_ok() {
    let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
    assert!(response.success);
    assert_eq!(response.data, Some("test".to_string()));
    assert!(response.error.is_none());
    assert!(!response.request_id.is_empty());
}

#[test]
fn test_api_response_err() {
    let response: ApiResponse<()> = ApiResponse::err("something broke");
    assert!(!response.success);
    assert!(response.data.is_none());
    assert_eq!(response.error, Some("something broke".to_string()));
}

#[test]
fn test_api_response_serializes_without_null_fields() {
    let response: ApiResponse<()> = ApiResponse::err("bad upload");
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"error\":\"bad upload\""));
    assert!(!json.contains("\"data\""));
}

#[test]
fn test_date_request_deserializes() {
    let request: DateRequest = serde_json::from_str(r#"{"date": "2024-04-13"}"#).unwrap();
    assert_eq!(request.date, "2024-04-13");
}

#[test]
fn test_date_response_serializes() {
    let response = DateResponse {
        gregorian: "2024-04-13".to_string(),
        nepali_date: "2080-04-13".to_string(),
        fiscal_quarter: "FY2080/2081 Q1".to_string(),
        bs_month: "Shrawan".to_string(),
    };
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"nepali_date\":\"2080-04-13\""));
    assert!(json.contains("\"bs_month\":\"Shrawan\""));
}

// ═══════════════════════════════════════════════════════════════════════════
// METADATA RESPONSE TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_download_constants() {
    assert_eq!(DOWNLOAD_FILE_NAME, "BS_Date_converted.xlsx");
    assert_eq!(
        XLSX_CONTENT_TYPE,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
}

#[test]
fn test_root_response_shape() {
    let response = RootResponse {
        name: "bsdate API Server".to_string(),
        version: "1.0.0".to_string(),
        description: "test".to_string(),
        endpoints: vec![EndpointInfo {
            path: "/api/v1/convert".to_string(),
            method: "POST".to_string(),
            description: "upload".to_string(),
        }],
    };
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("/api/v1/convert"));
}

#[test]
fn test_health_and_version_serialize() {
    let health = HealthResponse {
        status: "healthy".to_string(),
    };
    assert!(serde_json::to_string(&health).unwrap().contains("healthy"));

    let version = VersionResponse {
        version: "1.0.0".to_string(),
        features: vec!["convert".to_string(), "date".to_string()],
    };
    assert!(serde_json::to_string(&version).unwrap().contains("convert"));
}
