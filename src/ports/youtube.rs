use color_eyre::eyre::Result;

use crate::youtube_rs::playlist_items::PlaylistItemsResponse;
use crate::youtube_rs::playlists::PlaylistListResponse;
use crate::youtube_rs::videos::VideoListResponse;

/// Port trait wrapping the YouTube Data API capabilities used by business
/// logic.
///
/// Implementations live in `services::playlist::client` (production) or test
/// mocks. There is no ambient client instance: whoever needs the API holds
/// one of these explicitly.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait YouTubeClient: Send + Sync {
    /// Playlist snippet and content details for a single playlist ID.
    async fn get_playlist(&self, playlist_id: &str) -> Result<PlaylistListResponse>;

    /// Reported item count only (part `contentDetails`). `None` when the
    /// playlist does not exist upstream.
    async fn get_playlist_item_count(&self, playlist_id: &str) -> Result<Option<u64>>;

    /// One page of playlist items, starting from `page_token` when given.
    async fn get_playlist_items_page(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
        max_results: u32,
    ) -> Result<PlaylistItemsResponse>;

    /// Batch video lookup by ID, primarily for durations.
    async fn get_videos(&self, video_ids: Vec<String>) -> Result<VideoListResponse>;
}
