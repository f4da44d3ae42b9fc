/// Session state for one run of the application
///
/// The session owns the selected photo, its preview and the analysis state
/// machine. All transitions go through the methods below so the
/// select -> analyze -> normalize -> render lifecycle can be tested without
/// a window.

use tracing::{debug, info, warn};

use super::data::{AnalysisRequest, LoadedImage, SelectedImage};
use super::preview::PreviewStore;
use crate::analysis::render::{render, DisplayLine};
use crate::error::AnalysisError;

/// A successful analysis, rendered once when it arrives
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Normalized model output
    pub text: String,
    pub lines: Vec<DisplayLine>,
}

impl AnalysisResult {
    pub fn new(text: String) -> Self {
        let lines = render(&text);
        Self { text, lines }
    }
}

/// Where the current analysis stands.
///
/// A request can only start from `Idle`, `Done` or `Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Pending,
    Done(AnalysisResult),
    /// Human-readable failure reason
    Failed(String),
}

#[derive(Debug, Default)]
pub struct Session {
    selected: Option<SelectedImage>,
    previews: PreviewStore,
    analysis: AnalysisState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected photo, revoking the previous preview first
    pub fn select_image(&mut self, loaded: LoadedImage) -> &SelectedImage {
        if let Some(previous) = self.selected.take() {
            self.previews.revoke(previous.preview);
            debug!("Released preview for {}", previous.name);
        }

        let preview = self.previews.create(loaded.preview);
        debug!("{} live preview(s)", self.previews.live_count());
        info!(
            "Selected {} ({}x{}, {}, {} bytes)",
            loaded.name,
            loaded.width,
            loaded.height,
            loaded.mime_type,
            loaded.bytes.len()
        );

        self.selected.insert(SelectedImage {
            name: loaded.name,
            mime_type: loaded.mime_type,
            bytes: loaded.bytes,
            width: loaded.width,
            height: loaded.height,
            preview,
        })
    }

    /// Drop the selected photo and release its preview
    pub fn clear_image(&mut self) {
        if let Some(previous) = self.selected.take() {
            self.previews.revoke(previous.preview);
            info!("Removed {}", previous.name);
        }
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn previews(&self) -> &PreviewStore {
        &self.previews
    }

    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.analysis, AnalysisState::Pending)
    }

    /// Whether the analyze trigger should be enabled
    pub fn can_analyze(&self) -> bool {
        self.selected.is_some() && !self.is_loading()
    }

    /// Start an analysis.
    ///
    /// Returns `None` (and changes nothing) when no photo is selected or a
    /// request is already in flight.
    pub fn begin_analysis(&mut self, extra: &str) -> Option<AnalysisRequest> {
        if self.is_loading() {
            warn!("Analysis already in progress, ignoring trigger");
            return None;
        }
        let image = self.selected.clone()?;

        self.analysis = AnalysisState::Pending;
        Some(AnalysisRequest {
            image,
            extra: extra.to_string(),
        })
    }

    /// Record the outcome of the in-flight request.
    ///
    /// Returns false if no request was pending (the outcome is dropped).
    pub fn complete_analysis(&mut self, outcome: Result<String, AnalysisError>) -> bool {
        if !self.is_loading() {
            warn!("Received an analysis outcome with no request pending");
            return false;
        }

        self.analysis = match outcome {
            Ok(text) => {
                let result = AnalysisResult::new(text);
                debug!(
                    "Stored analysis: {} chars, {} warning lines",
                    result.text.len(),
                    result.lines.iter().filter(|l| l.is_warning).count()
                );
                AnalysisState::Done(result)
            }
            Err(err) => AnalysisState::Failed(err.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::PreviewPixels;
    use std::sync::Arc;

    fn loaded(name: &str) -> LoadedImage {
        LoadedImage {
            name: name.to_string(),
            mime_type: "image/png".to_string(),
            bytes: Arc::from(vec![1u8, 2, 3]),
            width: 2,
            height: 2,
            preview: PreviewPixels {
                width: 1,
                height: 1,
                rgba: vec![0, 0, 0, 255],
            },
        }
    }

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = Session::new();
        assert!(session.selected().is_none());
        assert_eq!(session.analysis(), &AnalysisState::Idle);
        assert!(!session.can_analyze());
    }

    #[test]
    fn test_selecting_replaces_image_and_revokes_preview() {
        let mut session = Session::new();
        let first = session.select_image(loaded("first.png")).preview;
        let second = session.select_image(loaded("second.png")).preview;

        assert_eq!(session.selected().unwrap().name, "second.png");
        assert!(!session.previews().is_live(first));
        assert!(session.previews().is_live(second));
        assert_eq!(session.previews().live_count(), 1);
    }

    #[test]
    fn test_clear_image_releases_preview() {
        let mut session = Session::new();
        session.select_image(loaded("face.png"));
        session.clear_image();

        assert!(session.selected().is_none());
        assert_eq!(session.previews().live_count(), 0);
    }

    #[test]
    fn test_begin_without_image_is_noop() {
        let mut session = Session::new();
        session.select_image(loaded("face.png"));
        session.begin_analysis("");
        session.complete_analysis(Ok("Looks healthy".to_string()));
        session.clear_image();

        let before = session.analysis().clone();
        assert!(session.begin_analysis("extra").is_none());
        assert_eq!(session.analysis(), &before);
    }

    #[test]
    fn test_begin_carries_image_and_extra() {
        let mut session = Session::new();
        session.select_image(loaded("face.png"));

        let request = session.begin_analysis("focus on acne").unwrap();
        assert_eq!(request.image.name, "face.png");
        assert_eq!(request.extra, "focus on acne");
        assert!(session.is_loading());
        assert!(!session.can_analyze());
    }

    #[test]
    fn test_second_trigger_while_pending_is_refused() {
        let mut session = Session::new();
        session.select_image(loaded("face.png"));

        assert!(session.begin_analysis("").is_some());
        assert!(session.begin_analysis("").is_none());
        assert_eq!(session.analysis(), &AnalysisState::Pending);
    }

    #[test]
    fn test_success_renders_lines() {
        let mut session = Session::new();
        session.select_image(loaded("face.png"));
        session.begin_analysis("");

        assert!(session.complete_analysis(Ok("Warning: redness\nHydrate".to_string())));
        match session.analysis() {
            AnalysisState::Done(result) => {
                assert_eq!(result.lines.len(), 2);
                assert!(result.lines[0].is_warning);
                assert!(!result.lines[1].is_warning);
            }
            other => panic!("expected Done, got {:?}", other),
        }
        assert!(session.can_analyze());
    }

    #[test]
    fn test_failure_stores_reason_and_clears_loading() {
        let mut session = Session::new();
        session.select_image(loaded("face.png"));
        session.begin_analysis("");

        let err = AnalysisError::Transport("connection refused".to_string());
        session.complete_analysis(Err(err.clone()));

        assert_eq!(session.analysis(), &AnalysisState::Failed(err.to_string()));
        assert!(!session.is_loading());
        assert!(session.can_analyze());
    }

    #[test]
    fn test_outcome_without_pending_request_is_dropped() {
        let mut session = Session::new();
        assert!(!session.complete_analysis(Ok("stray".to_string())));
        assert_eq!(session.analysis(), &AnalysisState::Idle);
    }
}
