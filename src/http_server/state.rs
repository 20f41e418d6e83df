use crate::ports::youtube::YouTubeClient;
use crate::services::playlist::PlaylistService;

/// Shared request state, generic over the client port so tests can drive
/// the full router with a mock.
pub struct AppState<C: YouTubeClient> {
    pub playlists: PlaylistService<C>,
}
