use iced::widget::image::Handle;
use std::collections::HashMap;

use super::data::PreviewPixels;

/// Identifier of a live preview handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(u64);

/// Registry of displayable preview handles.
///
/// A preview is created when a photo is selected and must be revoked when the
/// photo is replaced or removed, otherwise the decoded pixels stay alive for
/// the rest of the session.
#[derive(Default)]
pub struct PreviewStore {
    handles: HashMap<PreviewId, Handle>,
    next_id: u64,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register preview pixels and return a fresh reference
    pub fn create(&mut self, pixels: PreviewPixels) -> PreviewId {
        let id = PreviewId(self.next_id);
        self.next_id += 1;

        let handle = Handle::from_rgba(pixels.width, pixels.height, pixels.rgba);
        self.handles.insert(id, handle);
        id
    }

    /// Release a preview. Returns false if it was already gone.
    pub fn revoke(&mut self, id: PreviewId) -> bool {
        self.handles.remove(&id).is_some()
    }

    pub fn get(&self, id: PreviewId) -> Option<&Handle> {
        self.handles.get(&id)
    }

    pub fn is_live(&self, id: PreviewId) -> bool {
        self.handles.contains_key(&id)
    }

    /// Number of previews not yet revoked
    pub fn live_count(&self) -> usize {
        self.handles.len()
    }
}

impl std::fmt::Debug for PreviewStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewStore")
            .field("live", &self.handles.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
