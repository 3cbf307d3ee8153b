//! Download artifact for a finished report.

use axum::http::{header, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

pub const REPORT_FILE_NAME: &str = "도로운영_분석보고서.txt";
pub const REPORT_MIME: &str = "text/plain";

/// ASCII stand-in for clients that ignore `filename*`.
pub const FALLBACK_FILE_NAME: &str = "road_ops_report.txt";

/// Describes how the page should offer the report for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadInfo {
    pub file_name: String,
    pub mime: String,
}

impl Default for DownloadInfo {
    fn default() -> Self {
        Self {
            file_name: REPORT_FILE_NAME.to_string(),
            mime: REPORT_MIME.to_string(),
        }
    }
}

/// `attachment` disposition carrying the Korean file name per RFC 5987.
/// Must stay in sync with `FALLBACK_FILE_NAME` and the percent-encoded
/// `REPORT_FILE_NAME`.
pub const CONTENT_DISPOSITION: &str = "attachment; filename=\"road_ops_report.txt\"; \
     filename*=UTF-8''%EB%8F%84%EB%A1%9C%EC%9A%B4%EC%98%81_%EB%B6%84%EC%84%9D%EB%B3%B4%EA%B3%A0%EC%84%9C.txt";

pub fn download_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static(CONTENT_DISPOSITION),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_matches_encoded_file_name() {
        let expected = format!(
            "attachment; filename=\"{FALLBACK_FILE_NAME}\"; filename*=UTF-8''{}",
            urlencoding::encode(REPORT_FILE_NAME)
        );
        assert_eq!(CONTENT_DISPOSITION, expected);
    }

    #[test]
    fn disposition_header_is_always_present() {
        let headers = download_headers();
        let value = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
        let encoded = value.split("filename*=UTF-8''").nth(1).unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), REPORT_FILE_NAME);
    }

    #[test]
    fn headers_declare_plain_text() {
        let headers = download_headers();
        let content_type = headers[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with(REPORT_MIME));
        assert!(headers.contains_key(header::CONTENT_DISPOSITION));
    }
}
