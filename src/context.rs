//! Per-call serialization context.

use coursehub_config::MediaConfig;
use coursehub_core::{UrlResolver, resolve_url};
use coursehub_db::RecordStore;

/// Everything a mapper may read besides the record itself: the store for
/// related records, the inbound request for absolute URLs, and media
/// settings for uploaded files.
#[derive(Clone)]
pub struct SerializeContext<'a> {
    store: &'a dyn RecordStore,
    request: Option<&'a dyn UrlResolver>,
    media: MediaConfig,
}

impl<'a> SerializeContext<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self {
            store,
            request: None,
            media: MediaConfig::default(),
        }
    }

    pub fn with_request(mut self, request: &'a dyn UrlResolver) -> Self {
        self.request = Some(request);
        self
    }

    pub fn with_media(mut self, media: MediaConfig) -> Self {
        self.media = media;
        self
    }

    pub fn store(&self) -> &'a dyn RecordStore {
        self.store
    }

    /// Resolve a stored link (absolute or site-relative).
    pub fn link_url(&self, value: Option<&str>) -> Option<String> {
        resolve_url(value, &self.media.absolute_url_schemes, self.request)
    }

    /// Resolve the storage name of an uploaded file.
    pub fn file_url(&self, name: Option<&str>) -> Option<String> {
        let name = name.filter(|n| !n.is_empty())?;
        let url = self.media.file_url(name);
        self.link_url(Some(&url))
    }
}
