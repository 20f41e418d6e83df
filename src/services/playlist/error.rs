/// Errors from playlist lookups and duration aggregation.
///
/// Failures are explicit here rather than collapsed: a transport failure
/// during aggregation surfaces as `Upstream` instead of silently becoming a
/// zero total, so callers that want the lossy behavior have to opt in with
/// `.unwrap_or(0)` or `.ok()`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaylistError {
    #[error("Playlist not found with ID: {playlist_id}")]
    NotFound { playlist_id: String },

    #[error("YouTube API error: {reason}")]
    Upstream { reason: String },
}

impl PlaylistError {
    pub fn upstream(report: color_eyre::Report) -> Self {
        Self::Upstream {
            reason: format!("{report:#}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
