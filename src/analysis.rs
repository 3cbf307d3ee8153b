use tracing::info;

use crate::client::CompletionClient;
use crate::error::AnalysisError;
use crate::intake::UploadedImage;
use crate::prompt;

/// The model's report, exactly as returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport(pub String);

impl AnalysisReport {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Run one analysis of `image`. Each call issues exactly one remote request;
/// nothing is cached between calls.
pub async fn analyze(
    client: &dyn CompletionClient,
    image: &UploadedImage,
) -> Result<AnalysisReport, AnalysisError> {
    info!(
        file_name = %image.file_name,
        format = image.format.mime_type(),
        size = image.bytes.len(),
        "Analyzing road image"
    );

    let request = prompt::build_request(image);
    let text = client.complete(&request).await?;

    info!(report_len = text.len(), "Analysis complete");
    Ok(AnalysisReport(text))
}
