use axum::body::Bytes;

use crate::error::AppError;

/// Raster formats the upload control accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Resolve a format from the file name's extension. Only jpg, jpeg and
    /// png are allowed; the comparison ignores case.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match image::ImageFormat::from_extension(ext.to_ascii_lowercase())? {
            image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
            image::ImageFormat::Png => Some(ImageFormat::Png),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }
}

/// One uploaded image, held only for the duration of a request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub format: ImageFormat,
    pub bytes: Bytes,
}

impl UploadedImage {
    pub fn from_upload(file_name: impl Into<String>, bytes: Bytes) -> Result<Self, AppError> {
        let file_name = file_name.into();
        let format = ImageFormat::from_file_name(&file_name)
            .ok_or_else(|| AppError::UnsupportedFileType(file_name.clone()))?;

        Ok(Self {
            file_name,
            format,
            bytes,
        })
    }
}
