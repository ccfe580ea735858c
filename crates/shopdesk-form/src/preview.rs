//! Local preview URLs for the selected photo.
//!
//! A [`PreviewRegistry`] plays the role of the browser's object-URL table:
//! it maps `blob:` URLs to file contents for as long as a [`PreviewHandle`]
//! is alive. Dropping the handle revokes the URL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shopdesk_core::FileHandle;
use uuid::Uuid;

const BLOB_PREFIX: &str = "blob:shopdesk/";

#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    live: Arc<Mutex<HashMap<String, FileHandle>>>,
}

impl PreviewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `file` under a fresh `blob:` URL.
    #[must_use]
    pub fn acquire(&self, file: &FileHandle) -> PreviewHandle {
        let url = format!("{BLOB_PREFIX}{}", Uuid::new_v4());
        self.entries().insert(url.clone(), file.clone());
        tracing::debug!(%url, file = %file.name(), "preview acquired");
        PreviewHandle {
            url,
            registry: self.clone(),
        }
    }

    /// Returns the file behind a live preview URL.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<FileHandle> {
        self.entries().get(url).cloned()
    }

    /// Number of preview URLs not yet released.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.entries().len()
    }

    fn release(&self, url: &str) {
        if self.entries().remove(url).is_some() {
            tracing::debug!(%url, "preview released");
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, FileHandle>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A live preview URL. Released when dropped.
#[derive(Debug)]
pub struct PreviewHandle {
    url: String,
    registry: PreviewRegistry,
}

impl PreviewHandle {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.registry.release(&self.url);
    }
}

/// Mirrors the form's photo field as at most one live preview.
#[derive(Debug)]
pub struct PhotoPreview {
    registry: PreviewRegistry,
    current: Option<PreviewHandle>,
}

impl PhotoPreview {
    #[must_use]
    pub fn new(registry: PreviewRegistry) -> Self {
        Self {
            registry,
            current: None,
        }
    }

    /// Re-derives the preview for the current photo selection.
    ///
    /// The previous handle is released before a new one is acquired, so at
    /// most one URL per preview is ever live.
    pub fn update(&mut self, photo: Option<&FileHandle>) {
        self.current = None;
        self.current = photo.map(|file| self.registry.acquire(file));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.current.as_ref().map(PreviewHandle::url)
    }
}
