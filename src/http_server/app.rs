use std::sync::Arc;

use axum::{Router, routing::get};
use color_eyre::eyre::{Context, eyre};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use url::Url;

use crate::{
    config::Config,
    http_server::{http_routes, state::AppState},
    ports::youtube::YouTubeClient,
    services::playlist::{PlaylistService, client::YouTubeHttpAdapter},
};

async fn root() -> &'static str {
    "YouTube Playlist Length Calculator API"
}

pub struct HttpServerConfig {
    pub port: u16,
    /// Overrides the config file's API key when set.
    pub api_key: Option<String>,
    pub config: Config,
}

pub fn build_router<C: YouTubeClient + 'static>(app_state: Arc<AppState<C>>) -> Router {
    // The frontend is served from a different origin.
    let cors_layer = CorsLayer::permissive();

    Router::new()
        .route("/", get(root))
        .route(
            "/api/playlist/{playlist_id}",
            get(http_routes::playlist_info::playlist_info::<C>),
        )
        .route(
            "/api/playlist/{playlist_id}/videos",
            get(http_routes::playlist_videos::playlist_videos::<C>),
        )
        .route(
            "/api/playlist/{playlist_id}/duration",
            get(http_routes::playlist_duration::playlist_duration::<C>),
        )
        .route(
            "/api/playlist-url",
            get(http_routes::playlist_url::playlist_by_url::<C>),
        )
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(app_state)
}

pub async fn start(server_config: HttpServerConfig) -> color_eyre::Result<()> {
    let HttpServerConfig {
        port,
        api_key,
        config,
    } = server_config;

    let api_key = api_key
        .or_else(|| config.api_key())
        .ok_or_else(|| eyre!("A YouTube API key is required. Set it via --api-key, the YOUTUBE_API_KEY environment variable, or the config file"))?;

    let base_url =
        Url::parse(config.api_base_url()).wrap_err("Invalid YouTube API base URL in config")?;

    let adapter = YouTubeHttpAdapter::new(base_url, api_key);
    let app_state = Arc::new(AppState {
        playlists: PlaylistService::new(adapter),
    });

    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", port))?;
    axum::serve(listener, app)
        .await
        .wrap_err("Failed to start HTTP server")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::ports::youtube::MockYouTubeClient;
    use crate::youtube_rs::playlist_items::{
        PlaylistItem, PlaylistItemContentDetails, PlaylistItemSnippet, PlaylistItemsResponse,
    };
    use crate::youtube_rs::videos::{Video, VideoContentDetails, VideoListResponse};

    fn items_page(video_ids: &[&str]) -> PlaylistItemsResponse {
        PlaylistItemsResponse {
            items: video_ids
                .iter()
                .map(|id| PlaylistItem {
                    snippet: PlaylistItemSnippet::default(),
                    content_details: PlaylistItemContentDetails {
                        video_id: id.to_string(),
                    },
                })
                .collect(),
            next_page_token: None,
        }
    }

    fn video(id: &str, duration: &str) -> Video {
        Video {
            id: id.to_string(),
            content_details: VideoContentDetails {
                duration: duration.to_string(),
            },
        }
    }

    fn router_with(client: MockYouTubeClient) -> Router {
        build_router(Arc::new(AppState {
            playlists: PlaylistService::new(client),
        }))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_duration_route_sums_playlist() {
        let mut client = MockYouTubeClient::new();
        client
            .expect_get_playlist_item_count()
            .returning(|_| Ok(Some(3)));
        client
            .expect_get_playlist_items_page()
            .returning(|_, _, _| Ok(items_page(&["a", "b", "c"])));
        client.expect_get_videos().returning(|_| {
            Ok(VideoListResponse {
                items: vec![
                    video("a", "PT1M"),
                    video("b", "PT1M"),
                    video("c", "PT1M"),
                ],
            })
        });

        let response = router_with(client)
            .oneshot(
                Request::builder()
                    .uri("/api/playlist/PLxyz/duration")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["playlist_id"], "PLxyz");
        assert_eq!(json["total_seconds"], 180);
        assert_eq!(json["formatted_duration"], "3:00");
    }

    #[tokio::test]
    async fn test_duration_route_unknown_playlist_is_404() {
        let mut client = MockYouTubeClient::new();
        client
            .expect_get_playlist_item_count()
            .returning(|_| Ok(None));

        let response = router_with(client)
            .oneshot(
                Request::builder()
                    .uri("/api/playlist/PLmissing/duration")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Playlist not found with ID: PLmissing");
    }

    #[tokio::test]
    async fn test_videos_route_rejects_out_of_range_max_results() {
        let response = router_with(MockYouTubeClient::new())
            .oneshot(
                Request::builder()
                    .uri("/api/playlist/PLxyz/videos?max_results=51")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_playlist_url_route_rejects_unextractable_url() {
        let response = router_with(MockYouTubeClient::new())
            .oneshot(
                Request::builder()
                    .uri("/api/playlist-url?url=https://example.com/watch?v=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Invalid YouTube playlist URL");
    }
}
