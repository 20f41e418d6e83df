use color_eyre::eyre::{Result, WrapErr};
use reqwest::Client;
use url::Url;

use serde::Deserialize;

use crate::youtube_rs::{REQUEST_TIMEOUT, Thumbnails, endpoint_url};

/// Response type for `playlists` with parts `snippet,contentDetails`.
///
/// Notes
/// - `items` is empty when the playlist does not exist or is private.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistListResponse {
    #[serde(default)]
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub snippet: PlaylistSnippet,
    pub content_details: PlaylistContentDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub channel_title: String,

    #[serde(default)]
    pub published_at: String,

    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// `itemCount` is the number of entries the API *reports* for the playlist.
/// It can exceed what pagination actually returns, for example when private
/// videos are counted but never emitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistContentDetails {
    #[serde(default)]
    pub item_count: u64,
}

/// Response type for `playlists` with part `contentDetails` alone, used when
/// only the reported item count is needed.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistCountResponse {
    #[serde(default)]
    pub items: Vec<PlaylistCountItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistCountItem {
    pub content_details: PlaylistContentDetails,
}

/// Fetch a playlist's snippet and content details.
///
/// Endpoint
/// - `GET {base}/playlists?part=snippet,contentDetails&id={playlist_id}`
pub async fn get_playlist(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    playlist_id: &str,
) -> Result<PlaylistListResponse> {
    let url = endpoint_url(base_url, "playlists")?;

    let response = client
        .get(url)
        .query(&[
            ("part", "snippet,contentDetails"),
            ("id", playlist_id),
            ("key", api_key),
        ])
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await?
        .error_for_status()?
        .json::<PlaylistListResponse>()
        .await
        .wrap_err("Failed to deserialize playlist response")?;

    Ok(response)
}

/// Fetch only a playlist's reported item count.
///
/// Endpoint
/// - `GET {base}/playlists?part=contentDetails&id={playlist_id}`
///
/// Returns
/// - `None` when the playlist does not exist upstream.
pub async fn get_playlist_item_count(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    playlist_id: &str,
) -> Result<Option<u64>> {
    let url = endpoint_url(base_url, "playlists")?;

    let response = client
        .get(url)
        .query(&[
            ("part", "contentDetails"),
            ("id", playlist_id),
            ("key", api_key),
        ])
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await?
        .error_for_status()?
        .json::<PlaylistCountResponse>()
        .await
        .wrap_err("Failed to deserialize playlist item count response")?;

    Ok(response
        .items
        .into_iter()
        .next()
        .map(|item| item.content_details.item_count))
}
