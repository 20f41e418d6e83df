pub mod playlist_items;
pub mod playlists;
pub mod videos;

use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use url::Url;

/// Per-request timeout for every outbound YouTube API call.
///
/// Exact-mode aggregation can walk an arbitrary number of pages, so a single
/// hung request must not stall the whole traversal.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thumbnail variants as the API reports them. Any subset may be present
/// depending on the source video resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub maxres: Option<Thumbnail>,

    #[serde(default)]
    pub standard: Option<Thumbnail>,

    #[serde(default)]
    pub high: Option<Thumbnail>,

    #[serde(default)]
    pub medium: Option<Thumbnail>,

    #[serde(default)]
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

impl Thumbnails {
    /// URL of the highest resolution thumbnail available, if any.
    ///
    /// Preference order: maxres, standard, high, medium, default. A playlist
    /// or video with no thumbnails at all yields `None`, which is not an
    /// error.
    pub fn best_url(&self) -> Option<String> {
        self.maxres
            .as_ref()
            .or(self.standard.as_ref())
            .or(self.high.as_ref())
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
            .map(|thumbnail| thumbnail.url.clone())
    }
}

/// Join an endpoint name onto the API base URL, tolerating a base with or
/// without a trailing slash.
pub(crate) fn endpoint_url(base_url: &Url, endpoint: &str) -> Result<Url> {
    Url::parse(&format!(
        "{}/{}",
        base_url.as_str().trim_end_matches('/'),
        endpoint
    ))
    .wrap_err_with(|| format!("Failed to construct URL for endpoint {}", endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb(url: &str) -> Option<Thumbnail> {
        Some(Thumbnail {
            url: url.to_string(),
        })
    }

    #[test]
    fn test_best_url_prefers_maxres() {
        let thumbnails = Thumbnails {
            maxres: thumb("maxres.jpg"),
            standard: thumb("standard.jpg"),
            high: thumb("high.jpg"),
            medium: thumb("medium.jpg"),
            default: thumb("default.jpg"),
        };
        assert_eq!(thumbnails.best_url(), Some("maxres.jpg".to_string()));
    }

    #[test]
    fn test_best_url_falls_through_missing_resolutions() {
        let thumbnails = Thumbnails {
            medium: thumb("medium.jpg"),
            default: thumb("default.jpg"),
            ..Thumbnails::default()
        };
        assert_eq!(thumbnails.best_url(), Some("medium.jpg".to_string()));
    }

    #[test]
    fn test_best_url_none_when_empty() {
        assert_eq!(Thumbnails::default().best_url(), None);
    }

    #[test]
    fn test_endpoint_url_trailing_slash() {
        let base = Url::parse("https://www.googleapis.com/youtube/v3/").unwrap();
        let url = endpoint_url(&base, "playlists").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/playlists"
        );

        let base = Url::parse("https://www.googleapis.com/youtube/v3").unwrap();
        let url = endpoint_url(&base, "playlists").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/playlists"
        );
    }
}
