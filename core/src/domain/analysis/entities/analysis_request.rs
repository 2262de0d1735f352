use std::fmt;

use crate::domain::oracle::value_objects::ImageUpload;

/// What the user submitted for analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    ImageOnly {
        image: ImageUpload,
    },
    ImageWithClarification {
        image: ImageUpload,
        clarification: String,
    },
    TextDescription {
        text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    ImageOnly,
    ImageWithClarification,
    TextDescription,
}

impl AnalysisRequest {
    pub fn kind(&self) -> AnalysisKind {
        match self {
            AnalysisRequest::ImageOnly { .. } => AnalysisKind::ImageOnly,
            AnalysisRequest::ImageWithClarification { .. } => AnalysisKind::ImageWithClarification,
            AnalysisRequest::TextDescription { .. } => AnalysisKind::TextDescription,
        }
    }

    pub fn image(&self) -> Option<&ImageUpload> {
        match self {
            AnalysisRequest::ImageOnly { image }
            | AnalysisRequest::ImageWithClarification { image, .. } => Some(image),
            AnalysisRequest::TextDescription { .. } => None,
        }
    }
}

impl AnalysisKind {
    /// Only a bare image may come back as a question instead of an analysis.
    pub fn allows_clarification(&self) -> bool {
        matches!(self, AnalysisKind::ImageOnly)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::ImageOnly => "image",
            AnalysisKind::ImageWithClarification => "image_with_clarification",
            AnalysisKind::TextDescription => "text",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
