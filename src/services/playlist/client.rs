use color_eyre::eyre::Result;
use reqwest::Client;
use url::Url;

use crate::ports::youtube::YouTubeClient;
use crate::youtube_rs::playlist_items::{PlaylistItemsResponse, get_playlist_items_page};
use crate::youtube_rs::playlists::{PlaylistListResponse, get_playlist, get_playlist_item_count};
use crate::youtube_rs::videos::{VideoListResponse, get_videos};

/// Production implementation of the [`YouTubeClient`] port, backed by the
/// YouTube Data API v3 over HTTP.
pub struct YouTubeHttpAdapter {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl YouTubeHttpAdapter {
    pub fn new(base_url: Url, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl YouTubeClient for YouTubeHttpAdapter {
    async fn get_playlist(&self, playlist_id: &str) -> Result<PlaylistListResponse> {
        get_playlist(&self.client, &self.base_url, &self.api_key, playlist_id).await
    }

    async fn get_playlist_item_count(&self, playlist_id: &str) -> Result<Option<u64>> {
        get_playlist_item_count(&self.client, &self.base_url, &self.api_key, playlist_id).await
    }

    async fn get_playlist_items_page(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
        max_results: u32,
    ) -> Result<PlaylistItemsResponse> {
        get_playlist_items_page(
            &self.client,
            &self.base_url,
            &self.api_key,
            playlist_id,
            page_token.as_deref(),
            max_results,
        )
        .await
    }

    async fn get_videos(&self, video_ids: Vec<String>) -> Result<VideoListResponse> {
        get_videos(&self.client, &self.base_url, &self.api_key, &video_ids).await
    }
}
