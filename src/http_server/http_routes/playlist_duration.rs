use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::duration::format_duration;
use crate::http_server::{error::ApiError, state::AppState};
use crate::ports::youtube::YouTubeClient;

#[derive(Debug, Serialize)]
pub struct PlaylistDurationResponse {
    pub playlist_id: String,
    pub total_seconds: u64,
    pub formatted_duration: String,
}

/// `GET /api/playlist/{playlist_id}/duration`
///
/// Exact total duration, summed over every page of the playlist.
pub async fn playlist_duration<C: YouTubeClient + 'static>(
    State(app_state): State<Arc<AppState<C>>>,
    Path(playlist_id): Path<String>,
) -> Result<Json<PlaylistDurationResponse>, ApiError> {
    let total_seconds = app_state
        .playlists
        .calculate_playlist_duration(&playlist_id, None)
        .await?;

    Ok(Json(PlaylistDurationResponse {
        formatted_duration: format_duration(total_seconds),
        playlist_id,
        total_seconds,
    }))
}
