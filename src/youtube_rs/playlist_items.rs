use color_eyre::eyre::{Result, WrapErr};
use reqwest::Client;
use url::Url;

use serde::Deserialize;

use crate::youtube_rs::{REQUEST_TIMEOUT, Thumbnails, endpoint_url};

/// Response type for `playlistItems` with parts `snippet,contentDetails`.
///
/// Notes
/// - `next_page_token` is an opaque cursor. Pass it back unmodified to
///   continue pagination; its absence means the end of the playlist.
/// - `items` is empty both for an empty playlist and for exhausted
///   pagination.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,

    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub channel_title: String,

    #[serde(default)]
    pub published_at: String,

    /// Index within the playlist as the API reports it. May be sparse when
    /// private items are counted but not emitted, so it is never re-derived
    /// from the array index.
    #[serde(default)]
    pub position: u64,

    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: String,
}

/// Fetch one page of playlist items.
///
/// Endpoint
/// - `GET {base}/playlistItems?part=snippet,contentDetails&playlistId={id}`
///
/// Pagination
/// - Pass `page_token` from the previous response to continue; `None` starts
///   from the beginning.
/// - `max_results` is capped at 50 by the API.
pub async fn get_playlist_items_page(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    playlist_id: &str,
    page_token: Option<&str>,
    max_results: u32,
) -> Result<PlaylistItemsResponse> {
    let url = endpoint_url(base_url, "playlistItems")?;

    let max_results = max_results.to_string();
    let mut params = vec![
        ("part", "snippet,contentDetails"),
        ("playlistId", playlist_id),
        ("maxResults", max_results.as_str()),
        ("key", api_key),
    ];
    if let Some(page_token) = page_token {
        params.push(("pageToken", page_token));
    }

    let response = client
        .get(url)
        .query(&params)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await?
        .error_for_status()?
        .json::<PlaylistItemsResponse>()
        .await
        .wrap_err("Failed to deserialize playlist items response")?;

    Ok(response)
}
