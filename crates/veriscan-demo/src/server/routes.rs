use crate::analysis;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use veriscan_core::AnalysisReport;

// Every analysis route answers HTTP 200; semantic failures ride in the
// report's `verdict` field.

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

pub async fn analyze_text(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Json<AnalysisReport> {
    Json(analysis::analyze_text(state.classifier.as_ref(), &req.text).await)
}

#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

pub async fn analyze_url(
    State(state): State<AppState>,
    Json(req): Json<UrlRequest>,
) -> Json<AnalysisReport> {
    Json(analysis::analyze_url(&state.url_heuristic, &req.url))
}

pub async fn analyze_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Json<AnalysisReport> {
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                let filename = field.file_name().unwrap_or_default().to_string();
                let report = match field.bytes().await {
                    Ok(bytes) => {
                        analysis::analyze_file(state.classifier.as_ref(), &filename, &bytes).await
                    }
                    Err(e) => AnalysisReport::error(
                        format!("Error reading file: {e}"),
                        analysis::FILE_ERROR_LESSON,
                    ),
                };
                return Json(report);
            }
            Ok(None) => break,
            Err(e) => {
                return Json(AnalysisReport::error(
                    format!("Error reading file: {e}"),
                    analysis::FILE_ERROR_LESSON,
                ))
            }
        }
    }

    Json(AnalysisReport::error(
        "Error reading file: no 'file' field in upload",
        analysis::FILE_ERROR_LESSON,
    ))
}
