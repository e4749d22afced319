//! Model module - Player state and data types
//!
//! - `playlist`: Playlist entries and label templating
//! - `playback`: State snapshot, time formatting and volume normalization
//! - `labels`: Toggle glyphs and the playlist item template

mod labels;
mod playback;
mod playlist;

pub use labels::{LabelOverrides, Labels, PAUSE_GLYPH, PLAY_GLYPH, PLAYLIST_ITEM_TEMPLATE};

pub use playback::{
    PlayerState, TIME_ZERO, format_song_time, known_time, normalize_volume, timestamp_label,
    volume_label,
};

pub use playlist::{Playlist, PlaylistEntry, render_item_label};
