//! Playlist entries and playlist label templating

use serde::{Deserialize, Serialize};

/// A single track in the playlist
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Audio locator handed to the playback primitive
    pub src: String,
    pub artist: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl PlaylistEntry {
    pub fn new(src: impl Into<String>, artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            artist: artist.into(),
            title: title.into(),
            thumbnail: None,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }
}

pub type Playlist = Vec<PlaylistEntry>;

/// Render the playlist label of `entry` at `index`.
///
/// `%N` becomes the 1-based position, `%A` the artist and `%T` the title.
/// The template is scanned once, so placeholders inside the substituted
/// values are left alone. Unknown `%` sequences are copied through.
pub fn render_item_label(template: &str, index: usize, entry: &PlaylistEntry) -> String {
    let mut label = String::with_capacity(template.len() + entry.artist.len() + entry.title.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            label.push(c);
            continue;
        }
        match chars.peek() {
            Some('N') => label.push_str(&(index + 1).to_string()),
            Some('A') => label.push_str(&entry.artist),
            Some('T') => label.push_str(&entry.title),
            _ => {
                label.push('%');
                continue;
            }
        }
        chars.next();
    }

    label
}
