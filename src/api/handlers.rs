//! API request handlers
//!
//! The convert handler is the boundary described by the error-handling
//! contract: any failure during processing surfaces as a single JSON error
//! message and no partial output is produced.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{fiscal_quarter, month_label, parse_gregorian, to_bikram_sambat};
use crate::excel::convert_workbook_bytes;

use super::server::AppState;

/// Download name of the produced workbook.
pub const DOWNLOAD_FILE_NAME: &str = "BS_Date_converted.xlsx";

/// Media type of the produced workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "bsdate API Server".to_string(),
        version: state.version.clone(),
        description: "Gregorian to Bikram Sambat spreadsheet date conversion".to_string(),
        endpoints: vec![
            EndpointInfo {
                path: "/health".to_string(),
                method: "GET".to_string(),
                description: "Health check endpoint".to_string(),
            },
            EndpointInfo {
                path: "/version".to_string(),
                method: "GET".to_string(),
                description: "Get server version".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/convert".to_string(),
                method: "POST".to_string(),
                description: "Upload an .xlsx workbook, download the annotated copy".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/date".to_string(),
                method: "POST".to_string(),
                description: "Convert a single Gregorian date".to_string(),
            },
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec!["convert".to_string(), "date".to_string()],
    }))
}

/// POST /api/v1/convert - Upload a workbook, download the annotated copy
///
/// Takes the first file field of the multipart body. On success the response
/// body is the converted workbook offered as a download; on failure it is a
/// single JSON error message.
pub async fn convert(mut multipart: Multipart) -> Response {
    let upload = loop {
        match multipart.next_field().await {
            Ok(Some(field)) => match field.bytes().await {
                Ok(bytes) => break Some(bytes),
                Err(e) => return error_response(format!("Error reading upload: {}", e)),
            },
            Ok(None) => break None,
            Err(e) => return error_response(format!("Error reading upload: {}", e)),
        }
    };

    let Some(upload) = upload else {
        return error_response("No file uploaded");
    };

    match convert_workbook_bytes(&upload) {
        Ok(buffer) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
                ),
            ],
            buffer,
        )
            .into_response(),
        Err(e) => error_response(format!("Error processing file: {}", e)),
    }
}

fn error_response(message: impl Into<String>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::<()>::err(message)),
    )
        .into_response()
}

/// Date conversion request
#[derive(Deserialize)]
pub struct DateRequest {
    /// Gregorian date, YYYY-MM-DD
    pub date: String,
}

/// Date conversion response
#[derive(Serialize, Default)]
pub struct DateResponse {
    pub gregorian: String,
    pub nepali_date: String,
    pub fiscal_quarter: String,
    pub bs_month: String,
}

/// POST /api/v1/date - Convert a single Gregorian date
///
/// An unparseable date yields the sentinel values in a successful response,
/// matching how an unparseable spreadsheet cell flows through the pipeline.
pub async fn date(Json(req): Json<DateRequest>) -> impl IntoResponse {
    let bs_date = to_bikram_sambat(parse_gregorian(&req.date));

    Json(ApiResponse::ok(DateResponse {
        gregorian: req.date,
        nepali_date: bs_date.to_string(),
        fiscal_quarter: fiscal_quarter(&bs_date).to_string(),
        bs_month: month_label(&bs_date).to_string(),
    }))
}
