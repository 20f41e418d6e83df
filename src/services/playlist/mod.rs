pub mod client;
pub mod error;
pub mod types;

use std::collections::HashMap;

use async_stream::try_stream;
use futures_util::{Stream, TryStreamExt, pin_mut};

use crate::duration::{format_duration, parse_iso8601_duration};
use crate::ports::youtube::YouTubeClient;
use self::error::{PlaylistError, Result};
use self::types::{Page, PlaylistInfo, VideoItem};

/// Largest page size the playlistItems endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Number of videos sampled when estimating a playlist's total duration.
const ESTIMATE_SAMPLE_SIZE: u32 = 10;

/// Playlist metadata lookups and duration aggregation on top of an injected
/// [`YouTubeClient`].
pub struct PlaylistService<C: YouTubeClient> {
    client: C,
}

impl<C: YouTubeClient> PlaylistService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetch a playlist's own metadata plus a sampled duration estimate.
    ///
    /// The estimate is best effort: if the sampling sub-call fails for any
    /// reason the lookup still succeeds with the estimate fields absent.
    pub async fn get_playlist_info(&self, playlist_id: &str) -> Result<PlaylistInfo> {
        let response = self
            .client
            .get_playlist(playlist_id)
            .await
            .map_err(PlaylistError::upstream)?;

        let Some(playlist) = response.items.into_iter().next() else {
            return Err(PlaylistError::NotFound {
                playlist_id: playlist_id.to_string(),
            });
        };
        let snippet = playlist.snippet;

        let estimated_duration_seconds = match self
            .calculate_playlist_duration(playlist_id, Some(ESTIMATE_SAMPLE_SIZE))
            .await
        {
            Ok(seconds) => Some(seconds),
            Err(e) => {
                log::warn!("Could not estimate duration for {}: {}", playlist_id, e);
                None
            }
        };
        let estimated_duration_text = estimated_duration_seconds.map(format_duration);

        Ok(PlaylistInfo {
            id: playlist.id,
            title: snippet.title,
            description: snippet.description,
            channel_title: snippet.channel_title,
            thumbnail_url: snippet.thumbnails.best_url(),
            published_at: snippet.published_at,
            item_count: playlist.content_details.item_count,
            estimated_duration_seconds,
            estimated_duration_text,
        })
    }

    /// Fetch one page of playlist videos, joining each entry to its duration
    /// via the batch video lookup.
    ///
    /// An empty upstream page resolves to an empty page with no cursor, which
    /// covers both an empty playlist and exhausted pagination. Videos missing
    /// from the batch response (private or deleted) get a zero duration
    /// rather than failing the page.
    pub async fn get_playlist_videos(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
        max_results: u32,
    ) -> Result<Page> {
        let response = self
            .client
            .get_playlist_items_page(playlist_id, page_token, max_results)
            .await
            .map_err(PlaylistError::upstream)?;

        if response.items.is_empty() {
            return Ok(Page {
                videos: Vec::new(),
                next_page_token: None,
            });
        }

        let video_ids: Vec<String> = response
            .items
            .iter()
            .map(|item| item.content_details.video_id.clone())
            .collect();

        let videos_response = self
            .client
            .get_videos(video_ids)
            .await
            .map_err(PlaylistError::upstream)?;

        let mut durations: HashMap<String, u64> = HashMap::new();
        for video in videos_response.items {
            let seconds = parse_iso8601_duration(&video.content_details.duration).unwrap_or(0);
            durations.insert(video.id, seconds);
        }

        let videos = response
            .items
            .into_iter()
            .map(|item| {
                let snippet = item.snippet;
                let video_id = item.content_details.video_id;
                let duration_seconds = durations.get(&video_id).copied().unwrap_or(0);

                VideoItem {
                    id: video_id,
                    title: snippet.title,
                    description: snippet.description,
                    thumbnail_url: snippet.thumbnails.best_url(),
                    channel_title: snippet.channel_title,
                    published_at: snippet.published_at,
                    // Passed through as reported; upstream positions may be
                    // sparse when private items are counted but not emitted.
                    position: snippet.position,
                    duration_seconds,
                    duration_text: format_duration(duration_seconds),
                }
            })
            .collect();

        Ok(Page {
            videos,
            next_page_token: response.next_page_token,
        })
    }

    /// Lazily walk every page of a playlist, largest page size, first page
    /// onward. Consumers pull pages on demand; nothing is prefetched.
    fn pages<'a>(&'a self, playlist_id: &'a str) -> impl Stream<Item = Result<Page>> + 'a {
        try_stream! {
            let mut page_token: Option<String> = None;
            loop {
                let page = self
                    .get_playlist_videos(playlist_id, page_token.take(), MAX_PAGE_SIZE)
                    .await?;
                let next = page.next_page_token.clone();
                let exhausted = page.videos.is_empty();
                yield page;

                match next {
                    Some(token) if !exhausted => page_token = Some(token),
                    _ => break,
                }
            }
        }
    }

    /// Total playlist duration in seconds.
    ///
    /// With `sample_size = None` this walks every page and sums exactly. With
    /// `Some(n)` where `n` is below the reported item count, it fetches one
    /// page of `min(n, 50)` videos and extrapolates
    /// `floor(mean(sample) * reported_count)`; a sample size at or above the
    /// reported count degenerates to the exact walk.
    ///
    /// Any failure along the way is returned, never folded into a zero
    /// total. A genuine zero therefore always means an empty or zero-length
    /// playlist.
    pub async fn calculate_playlist_duration(
        &self,
        playlist_id: &str,
        sample_size: Option<u32>,
    ) -> Result<u64> {
        // Reported count via a contentDetails-only call, deliberately not
        // get_playlist_info, which would recurse through the estimator.
        let item_count = self
            .client
            .get_playlist_item_count(playlist_id)
            .await
            .map_err(PlaylistError::upstream)?
            .ok_or_else(|| PlaylistError::NotFound {
                playlist_id: playlist_id.to_string(),
            })?;

        if let Some(sample_size) = sample_size
            && u64::from(sample_size) < item_count
        {
            let page = self
                .get_playlist_videos(playlist_id, None, sample_size.min(MAX_PAGE_SIZE))
                .await?;
            if page.videos.is_empty() {
                return Ok(0);
            }

            let sample_total: u64 = page.videos.iter().map(|v| v.duration_seconds).sum();
            let average = sample_total as f64 / page.videos.len() as f64;
            return Ok((average * item_count as f64) as u64);
        }

        let pages = self.pages(playlist_id);
        pin_mut!(pages);

        let mut total: u64 = 0;
        while let Some(page) = pages.try_next().await? {
            total += page.videos.iter().map(|v| v.duration_seconds).sum::<u64>();
        }

        log::debug!("Exact duration for {}: {}s", playlist_id, total);
        Ok(total)
    }
}
