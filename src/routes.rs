use std::sync::Arc;
use std::time::Instant;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::HeaderMap;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::analysis;
use crate::client::CompletionClient;
use crate::error::{AppError, AppResult};
use crate::intake::{ImageFormat, UploadedImage};
use crate::markdown;
use crate::page;
use crate::prompt;
use crate::report::{self, DownloadInfo};

/// Multipart field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "image";

/// Shared handler state: the one client handle built at startup.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Completion text, unmodified. This is what gets downloaded.
    pub report: String,
    /// Markdown rendering of `report` for display.
    pub report_html: String,
    pub model: String,
    pub processing_time_ms: u128,
    pub download: DownloadInfo,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub report: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Take the first `image` field. The extension is checked before the body
/// is buffered.
async fn read_image(multipart: &mut Multipart) -> AppResult<UploadedImage> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(AppError::MissingImage);
        }
        if ImageFormat::from_file_name(&file_name).is_none() {
            return Err(AppError::UnsupportedFileType(file_name));
        }

        let bytes = field.bytes().await?;
        return UploadedImage::from_upload(file_name, bytes);
    }

    Err(AppError::MissingImage)
}

/// POST /api/analyze
async fn analyze_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<AnalyzeResponse>> {
    let start = Instant::now();

    let mut multipart = multipart?;
    let image = read_image(&mut multipart).await?;
    let report = analysis::analyze(state.client.as_ref(), &image).await?;

    let report = report.into_inner();

    Ok(Json(AnalyzeResponse {
        report_html: markdown::render_report_html(&report),
        report,
        model: prompt::MODEL.to_string(),
        processing_time_ms: start.elapsed().as_millis(),
        download: DownloadInfo::default(),
    }))
}

/// POST /api/report/download
///
/// Echoes the report text back as a `text/plain` attachment.
async fn download_report(Json(input): Json<DownloadRequest>) -> (HeaderMap, String) {
    (report::download_headers(), input.report)
}

pub fn build_app(client: Arc<dyn CompletionClient>) -> Router {
    let state = AppState { client };

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route(
            "/api/analyze",
            post(analyze_image).layer(DefaultBodyLimit::disable()),
        )
        .route("/api/report/download", post(download_report))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
