use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static BARE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]+$").expect("bare playlist ID pattern is valid")
});

/// Extract a playlist ID from a bare ID or any of the playlist URL shapes.
///
/// Handles inputs like:
/// - `PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf`
/// - `https://www.youtube.com/playlist?list=PLAYLIST_ID`
/// - `https://www.youtube.com/watch?v=VIDEO_ID&list=PLAYLIST_ID`
///
/// Returns `None` when no ID can be found. Callers should treat that as a
/// bad-input failure, not as a missing playlist.
pub fn extract_playlist_id(raw: &str) -> Option<String> {
    // A bare playlist ID contains only URL-safe characters.
    if BARE_ID_RE.is_match(raw) {
        return Some(raw.to_string());
    }

    let url = Url::parse(raw).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "list")
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_id_returned_unchanged() {
        assert_eq!(
            extract_playlist_id("PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf"),
            Some("PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf".to_string())
        );
    }

    #[test]
    fn test_playlist_url() {
        assert_eq!(
            extract_playlist_id("https://www.youtube.com/playlist?list=PLxyz"),
            Some("PLxyz".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_list_param() {
        assert_eq!(
            extract_playlist_id("https://youtube.com/watch?v=abc&list=PLxyz"),
            Some("PLxyz".to_string())
        );
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(extract_playlist_id("not a url, no list param"), None);
    }

    #[test]
    fn test_url_without_list_param() {
        assert_eq!(
            extract_playlist_id("https://www.youtube.com/watch?v=abc"),
            None
        );
    }

    #[test]
    fn test_empty_list_param() {
        assert_eq!(
            extract_playlist_id("https://www.youtube.com/playlist?list="),
            None
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_playlist_id(""), None);
    }
}
