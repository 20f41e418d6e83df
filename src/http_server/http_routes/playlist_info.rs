use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::http_server::{error::ApiError, state::AppState};
use crate::ports::youtube::YouTubeClient;
use crate::services::playlist::types::PlaylistInfo;

#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub playlist: PlaylistInfo,
    pub next_page_token: Option<String>,
}

/// `GET /api/playlist/{playlist_id}`
///
/// Basic information about a playlist without its videos.
pub async fn playlist_info<C: YouTubeClient + 'static>(
    State(app_state): State<Arc<AppState<C>>>,
    Path(playlist_id): Path<String>,
) -> Result<Json<PlaylistResponse>, ApiError> {
    let playlist = app_state.playlists.get_playlist_info(&playlist_id).await?;

    Ok(Json(PlaylistResponse {
        playlist,
        next_page_token: None,
    }))
}
