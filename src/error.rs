use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Startup configuration failures. Any of these stops the process before
/// the listener is bound.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY가 설정되지 않았습니다. 환경 변수 또는 .env 파일에 추가하세요.")]
    MissingApiKey,

    #[error("PORT must be a valid u16, got {0:?}")]
    InvalidPort(String),
}

/// Failures of a single analysis invocation.
///
/// The page never distinguishes between these; they all surface as one
/// generic message carrying the `Display` text.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("request to completion endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion endpoint returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("could not decode completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("completion response contained no message content")]
    EmptyCompletion,
}

/// Handler-level error type. Renders a JSON `{ error, code }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("이미지 파일이 없습니다. jpg, jpeg, png 파일을 업로드하세요.")]
    MissingImage,

    #[error("지원하지 않는 파일 형식입니다: {0} (jpg, jpeg, png만 허용)")]
    UnsupportedFileType(String),

    #[error("잘못된 업로드 요청: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("잘못된 업로드 요청: {0}")]
    NotMultipart(#[from] axum::extract::multipart::MultipartRejection),

    #[error("오류 발생: {0}")]
    Analysis(#[from] AnalysisError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::MissingImage => (StatusCode::BAD_REQUEST, "MISSING_IMAGE"),
            AppError::UnsupportedFileType(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_FILE_TYPE"),
            AppError::Multipart(_) | AppError::NotMultipart(_) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST")
            }
            AppError::Analysis(_) => (StatusCode::BAD_GATEWAY, "ANALYSIS_FAILED"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if let AppError::Analysis(err) = &self {
            tracing::error!(error = %err, "Analysis failed");
        } else {
            tracing::warn!(error = %self, code, "Rejected upload");
        }

        let body = json!({
            "error": self.to_string(),
            "code": code,
        });

        (status, Json(body)).into_response()
    }
}
