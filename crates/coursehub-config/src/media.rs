use std::env;

/// Prefixes that mark a stored value as an already absolute URL.
pub const DEFAULT_ABSOLUTE_URL_SCHEMES: [&str; 2] = ["http://", "https://"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaConfig {
    /// Public prefix for uploaded files (e.g. "/media/"). When unset, the
    /// stored file name is used as its own URL.
    pub media_url: Option<String>,
    pub absolute_url_schemes: Vec<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            media_url: None,
            absolute_url_schemes: DEFAULT_ABSOLUTE_URL_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl MediaConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("MEDIA_URL").ok(),
            env::var("ABSOLUTE_URL_SCHEMES").ok(),
        )
    }

    fn from_vars(media_url: Option<String>, schemes: Option<String>) -> Self {
        let defaults = Self::default();

        let media_url = media_url
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let absolute_url_schemes = schemes
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.absolute_url_schemes);

        Self {
            media_url,
            absolute_url_schemes,
        }
    }

    pub fn with_media_url(mut self, media_url: impl Into<String>) -> Self {
        self.media_url = Some(media_url.into());
        self
    }

    /// URL of a stored file, before any request-based resolution.
    ///
    /// Absolute values and empty names are returned untouched.
    pub fn file_url(&self, name: &str) -> String {
        if name.is_empty() || self.is_absolute(name) {
            return name.to_string();
        }

        match &self.media_url {
            Some(prefix) => format!(
                "{}/{}",
                prefix.trim_end_matches('/'),
                name.trim_start_matches('/')
            ),
            None => name.to_string(),
        }
    }

    pub fn is_absolute(&self, value: &str) -> bool {
        self.absolute_url_schemes
            .iter()
            .any(|scheme| value.starts_with(scheme.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MediaConfig::default();
        assert_eq!(config.media_url, None);
        assert_eq!(config.absolute_url_schemes, vec!["http://", "https://"]);
    }

    #[test]
    fn test_from_vars_defaults() {
        assert_eq!(MediaConfig::from_vars(None, None), MediaConfig::default());
        assert_eq!(
            MediaConfig::from_vars(Some("  ".to_string()), Some(",".to_string())),
            MediaConfig::default()
        );
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = MediaConfig::from_vars(
            Some("/media/".to_string()),
            Some("https://, s3://".to_string()),
        );
        assert_eq!(config.media_url.as_deref(), Some("/media/"));
        assert_eq!(config.absolute_url_schemes, vec!["https://", "s3://"]);
    }

    #[test]
    fn test_file_url_without_prefix() {
        let config = MediaConfig::default();
        assert_eq!(config.file_url("media/img.png"), "media/img.png");
        assert_eq!(config.file_url(""), "");
    }

    #[test]
    fn test_file_url_with_prefix() {
        let config = MediaConfig::default().with_media_url("/media/");
        assert_eq!(
            config.file_url("courses/thumbnails/a.png"),
            "/media/courses/thumbnails/a.png"
        );
        assert_eq!(config.file_url("/avatars/b.png"), "/media/avatars/b.png");
        assert_eq!(
            config.file_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
