use color_eyre::eyre::{Result, WrapErr};
use reqwest::Client;
use url::Url;

use serde::Deserialize;

use crate::youtube_rs::{REQUEST_TIMEOUT, endpoint_url};

/// Response type for the batch `videos` lookup.
///
/// Notes
/// - Private or deleted videos are silently omitted from `items`, so the
///   result can be shorter than the requested ID list.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub content_details: VideoContentDetails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContentDetails {
    /// ISO 8601 duration string, e.g. `PT4M13S`.
    #[serde(default)]
    pub duration: String,
}

/// Batch fetch video details for up to 50 IDs in one call.
///
/// Endpoint
/// - `GET {base}/videos?part=contentDetails,snippet&id={comma_joined_ids}`
pub async fn get_videos(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    video_ids: &[String],
) -> Result<VideoListResponse> {
    let url = endpoint_url(base_url, "videos")?;

    let ids = video_ids.join(",");
    let response = client
        .get(url)
        .query(&[
            ("part", "contentDetails,snippet"),
            ("id", ids.as_str()),
            ("key", api_key),
        ])
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await?
        .error_for_status()?
        .json::<VideoListResponse>()
        .await
        .wrap_err("Failed to deserialize video list response")?;

    Ok(response)
}
