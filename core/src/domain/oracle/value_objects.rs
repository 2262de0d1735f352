use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

#[derive(Debug, Clone)]
pub struct OracleRequest {
    pub parts: Vec<PromptPart>,
    pub output_schema: &'static serde_json::Value,
    pub sampling: SamplingConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PromptPart {
    Text(String),
    InlineImage(ImageUpload),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    pub temperature: f32,
}

impl SamplingConfig {
    /// Analyses should be reproducible.
    pub const ANALYSIS: SamplingConfig = SamplingConfig { temperature: 0.2 };
    /// Plans may vary between runs.
    pub const MEAL_PLAN: SamplingConfig = SamplingConfig { temperature: 0.5 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Png,
    Jpeg,
}

impl ImageMime {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Png => "image/png",
            ImageMime::Jpeg => "image/jpeg",
        }
    }
}

/// An uploaded food photo. Cloning shares the underlying buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub data: Bytes,
    pub mime_type: ImageMime,
}

impl ImageUpload {
    /// Decodes raw file bytes, accepting PNG and JPEG only.
    pub fn from_bytes(data: impl Into<Bytes>) -> Result<Self, CoreError> {
        let data = data.into();
        if data.is_empty() {
            return Err(CoreError::MissingInput);
        }

        let mime_type = if data.starts_with(PNG_SIGNATURE) {
            ImageMime::Png
        } else if data.starts_with(JPEG_SIGNATURE) {
            ImageMime::Jpeg
        } else {
            return Err(CoreError::UnsupportedImage);
        };

        Ok(Self { data, mime_type })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
