/// Shared data structures for the session state
///
/// These structs represent the data model that flows between
/// the photo loader, the session and the analysis pipeline.

use std::fmt;
use std::sync::Arc;

use super::preview::PreviewId;
use crate::analysis::prompt;

/// Decoded RGBA pixels for the on-screen preview
#[derive(Clone, PartialEq)]
pub struct PreviewPixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// A photo read from disk, not yet owned by a session
#[derive(Clone, PartialEq)]
pub struct LoadedImage {
    /// Filename only (e.g., "selfie.jpg")
    pub name: String,
    /// MIME type detected from the file content
    pub mime_type: String,
    /// Raw file bytes, sent to the model untouched
    pub bytes: Arc<[u8]>,
    /// Original pixel dimensions
    pub width: u32,
    pub height: u32,
    /// Downscaled preview
    pub preview: PreviewPixels,
}

/// The photo currently selected in a session
#[derive(Clone, PartialEq)]
pub struct SelectedImage {
    pub name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
    pub width: u32,
    pub height: u32,
    /// Revocable preview reference in the session's preview store
    pub preview: PreviewId,
}

/// One analysis call: the photo plus an optional free-text addendum.
/// Lives only for the duration of the request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub image: SelectedImage,
    pub extra: String,
}

impl AnalysisRequest {
    /// The full prompt text sent alongside the image
    pub fn prompt(&self) -> String {
        prompt::build_prompt(&self.extra)
    }
}

impl fmt::Debug for PreviewPixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewPixels")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

impl fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("preview", &self.preview)
            .finish()
    }
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("preview", &self.preview)
            .finish()
    }
}
