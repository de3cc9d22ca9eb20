//! Image analysis endpoint (`POST /api/analyze`).
//!
//! Receives a multipart upload (field `file`), forwards the bytes to the
//! vision provider, runs the reply through the analysis pipeline, and
//! returns either the full typed result or an error envelope. A failed
//! analysis never leaks a raw parser error to the client; the upstream body
//! is only logged.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use wildlens_analysis::analyze_reply;
use wildlens_core::{AnalysisError, AnalysisResult};
use wildlens_media::{is_image, sniff_image_mime};
use wildlens_vision::{analyze_image as call_vision, inventory_prompt};

use crate::server::GatewayState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub request_id: String,
    pub analysis: AnalysisResult,
    /// Raw model text, returned for transparency and client-side debugging.
    pub raw: String,
}

/// Handler for `POST /api/analyze`.
pub async fn analyze_image(
    State(state): State<GatewayState>,
    mut multipart: Multipart,
) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let mut upload: Option<(Vec<u8>, Option<String>)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            let declared_mime = field.content_type().map(str::to_owned);
            match field.bytes().await {
                Ok(bytes) => upload = Some((bytes.to_vec(), declared_mime)),
                Err(e) => {
                    warn!(request_id = %request_id, error = %e, "Failed to read upload body");
                    return error_response(StatusCode::BAD_REQUEST, "could not read uploaded file");
                }
            }
            break;
        }
    }

    let Some((bytes, declared_mime)) = upload else {
        return error_response(StatusCode::BAD_REQUEST, "no file provided");
    };

    let Some(mime) = resolve_image_mime(&bytes, declared_mime.as_deref()) else {
        warn!(request_id = %request_id, declared = ?declared_mime, "Rejected non-image upload");
        return error_response(StatusCode::UNSUPPORTED_MEDIA_TYPE, "upload is not an image");
    };

    info!(
        request_id = %request_id,
        mime = %mime,
        size_bytes = bytes.len(),
        "Forwarding image to vision provider"
    );

    let raw = match call_vision(&state.provider, &bytes, &mime, inventory_prompt()).await {
        Ok(text) => text,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "Vision provider call failed");
            return error_response(StatusCode::BAD_GATEWAY, "image analysis is unavailable");
        }
    };

    match analyze_reply(&raw) {
        Ok(analysis) => {
            info!(
                request_id = %request_id,
                animals = analysis.animals.len(),
                plants = analysis.plants.len(),
                "Analysis complete"
            );
            Json(AnalyzeResponse { request_id, analysis, raw }).into_response()
        }
        Err(e) => {
            // MalformedReply and SchemaMismatch are both recoverable, user-visible
            // failures; the detail stays in the logs.
            match &e {
                AnalysisError::MalformedReply => {
                    warn!(request_id = %request_id, raw_len = raw.len(), "Reply contained no parseable JSON")
                }
                AnalysisError::SchemaMismatch(detail) => {
                    warn!(request_id = %request_id, detail = %detail, "Reply JSON did not match expected shape")
                }
            }
            error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "the model reply could not be interpreted",
            )
        }
    }
}

/// Decide the MIME type to forward: the byte signature wins, then a declared
/// image content type. Anything else is rejected.
fn resolve_image_mime(bytes: &[u8], declared: Option<&str>) -> Option<String> {
    if let Some(sniffed) = sniff_image_mime(bytes) {
        return Some(sniffed.to_string());
    }
    match declared {
        Some(mime) if is_image(mime) => Some(mime.to_string()),
        _ => None,
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffed_mime_overrides_declared() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(
            resolve_image_mime(&jpeg, Some("application/octet-stream")),
            Some("image/jpeg".to_string())
        );
    }

    #[test]
    fn declared_image_mime_accepted_when_unsniffable() {
        assert_eq!(
            resolve_image_mime(b"tiny", Some("image/heic")),
            Some("image/heic".to_string())
        );
    }

    #[test]
    fn non_image_upload_rejected() {
        assert_eq!(resolve_image_mime(b"%PDF-1.7", Some("application/pdf")), None);
        assert_eq!(resolve_image_mime(b"hello", None), None);
    }

    #[test]
    fn response_serializes_full_result() {
        let resp = AnalyzeResponse {
            request_id: "r-1".into(),
            analysis: AnalysisResult { animals: vec![], plants: vec![] },
            raw: "{}".into(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["analysis"]["animals"].is_array());
        assert!(json["analysis"]["plants"].is_array());
    }
}
