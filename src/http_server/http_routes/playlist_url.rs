use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::extract::extract_playlist_id;
use crate::http_server::http_routes::playlist_info::PlaylistResponse;
use crate::http_server::{error::ApiError, state::AppState};
use crate::ports::youtube::YouTubeClient;

#[derive(Debug, Deserialize)]
pub struct PlaylistUrlQuery {
    pub url: String,
}

/// `GET /api/playlist-url?url=`
///
/// Playlist information by URL instead of ID. An unextractable ID is a 400,
/// never a 404.
pub async fn playlist_by_url<C: YouTubeClient + 'static>(
    State(app_state): State<Arc<AppState<C>>>,
    Query(query): Query<PlaylistUrlQuery>,
) -> Result<Json<PlaylistResponse>, ApiError> {
    let playlist_id = extract_playlist_id(&query.url)
        .ok_or_else(|| ApiError::BadRequest("Invalid YouTube playlist URL".to_string()))?;

    let playlist = app_state.playlists.get_playlist_info(&playlist_id).await?;

    Ok(Json(PlaylistResponse {
        playlist,
        next_page_token: None,
    }))
}
