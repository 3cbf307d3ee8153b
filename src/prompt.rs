//! Fixed instruction template and request payload for the road analysis.

use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;

use crate::intake::UploadedImage;

pub const MODEL: &str = "gpt-4o-mini";
pub const MAX_TOKENS: u32 = 1000;

pub const SYSTEM_PROMPT: &str = "당신은 도로운영 및 교통관리 전문가입니다.";

pub const REPORT_INSTRUCTION: &str = "업로드된 도로 이미지를 분석하고 아래 형식으로 보고서를 작성하세요.

1. 도로 상태 분석
2. 교통 흐름 추정
3. 위험 요소 식별
4. 유지보수 필요 여부
5. 운영 개선 제안";

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: MessageContent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Wrap raw bytes as a `data:<mime>;base64,<payload>` URI.
pub fn image_data_uri(bytes: &[u8], mime_type: &str) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Build the two-message conversation for one uploaded image. The data URI
/// carries the uploaded file's own MIME type.
pub fn build_request(image: &UploadedImage) -> ChatCompletionRequest {
    let data_uri = image_data_uri(&image.bytes, image.format.mime_type());

    ChatCompletionRequest {
        model: MODEL.to_string(),
        messages: vec![
            ChatMessage {
                role: "system",
                content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
            },
            ChatMessage {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: REPORT_INSTRUCTION.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_uri },
                    },
                ]),
            },
        ],
        max_tokens: MAX_TOKENS,
    }
}
