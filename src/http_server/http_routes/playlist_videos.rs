use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::http_server::{error::ApiError, state::AppState};
use crate::ports::youtube::YouTubeClient;
use crate::services::playlist::types::VideoItem;

#[derive(Debug, Deserialize)]
pub struct VideosQuery {
    pub page_token: Option<String>,

    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_max_results() -> u32 {
    20
}

/// `GET /api/playlist/{playlist_id}/videos?page_token=&max_results=`
///
/// One page of playlist videos. `max_results` outside 1..=50 is rejected
/// here; the paginator itself never clamps.
pub async fn playlist_videos<C: YouTubeClient + 'static>(
    State(app_state): State<Arc<AppState<C>>>,
    Path(playlist_id): Path<String>,
    Query(query): Query<VideosQuery>,
) -> Result<Json<Vec<VideoItem>>, ApiError> {
    if !(1..=50).contains(&query.max_results) {
        return Err(ApiError::BadRequest(format!(
            "max_results must be between 1 and 50, got {}",
            query.max_results
        )));
    }

    let page = app_state
        .playlists
        .get_playlist_videos(&playlist_id, query.page_token, query.max_results)
        .await?;

    Ok(Json(page.videos))
}
