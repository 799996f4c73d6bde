//! Absolute URL resolution.
//!
//! URL-valued fields (thumbnails, videos, attachments, avatars) are stored
//! either as absolute URLs or as paths relative to the site. When a
//! representation is built for an inbound request, relative values are turned
//! into absolute URLs against that request, the same way a browser resolves a
//! link found on the requested page.
//!
//! # Example
//!
//! ```ignore
//! use coursehub_core::{RequestContext, resolve_url};
//!
//! let schemes = vec!["http://".to_string(), "https://".to_string()];
//! let request = RequestContext::parse("http://testserver/")?;
//!
//! assert_eq!(
//!     resolve_url(Some("media/img.png"), &schemes, Some(&request)),
//!     Some("http://testserver/media/img.png".to_string()),
//! );
//! assert_eq!(resolve_url(Some(""), &schemes, Some(&request)), None);
//! ```

use tracing::debug;
use url::Url;

/// Builds absolute URLs for the request currently being served.
pub trait UrlResolver: Send + Sync {
    /// Resolve `location` against the current request URL.
    fn build_absolute_url(&self, location: &str) -> String;
}

/// The inbound request as seen by the representation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    url: Url,
}

impl RequestContext {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw).map(Self::new)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl UrlResolver for RequestContext {
    fn build_absolute_url(&self, location: &str) -> String {
        match self.url.join(location) {
            Ok(resolved) => resolved.into(),
            Err(e) => {
                debug!(location = %location, error = %e, "Could not resolve URL, keeping it as-is");
                location.to_string()
            }
        }
    }
}

/// Whether `value` starts with one of the recognised scheme prefixes.
pub fn is_absolute_url(value: &str, schemes: &[String]) -> bool {
    schemes
        .iter()
        .any(|scheme| value.starts_with(scheme.as_str()))
}

/// Resolve a stored URL value for output.
///
/// - empty or missing values become `None`
/// - absolute values are returned unchanged
/// - relative values are resolved against `resolver` when one is supplied,
///   otherwise returned unchanged
pub fn resolve_url(
    value: Option<&str>,
    schemes: &[String],
    resolver: Option<&dyn UrlResolver>,
) -> Option<String> {
    let value = value.filter(|v| !v.is_empty())?;

    if is_absolute_url(value, schemes) {
        return Some(value.to_string());
    }

    match resolver {
        Some(resolver) => Some(resolver.build_absolute_url(value)),
        None => Some(value.to_string()),
    }
}
