use serde::Serialize;

/// A single video in a playlist, with its duration already joined in from
/// the batch video lookup.
#[derive(Debug, Clone, Serialize)]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub channel_title: String,
    pub published_at: String,
    /// Position as reported by the API. May have gaps, see the paginator.
    pub position: u64,
    /// 0 when the video was missing from the batch duration lookup.
    pub duration_seconds: u64,
    pub duration_text: String,
}

/// Basic information about a playlist.
///
/// `item_count` comes straight from the API and may exceed the number of
/// items pagination actually yields.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub thumbnail_url: Option<String>,
    pub published_at: String,
    pub item_count: u64,
    /// Sampled estimate. Absent when estimation failed; the playlist lookup
    /// itself still succeeds in that case.
    pub estimated_duration_seconds: Option<u64>,
    pub estimated_duration_text: Option<String>,
}

/// One page of playlist videos plus the cursor for the next page.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub videos: Vec<VideoItem>,
    /// Opaque cursor. `None` means the end of the playlist.
    pub next_page_token: Option<String>,
}
