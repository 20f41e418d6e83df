pub mod playlist_duration;
pub mod playlist_info;
pub mod playlist_url;
pub mod playlist_videos;
