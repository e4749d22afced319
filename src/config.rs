//! Construction options for the player

use crate::controls::{ControlHandle, ControlName, ControlOverrides};
use crate::model::{LabelOverrides, Playlist};

/// Everything a host can configure when creating an [`AudioPlayer`](crate::AudioPlayer).
///
/// All fields are optional: unbound controls become inert placeholders and
/// unset labels keep their defaults.
#[derive(Default)]
pub struct PlayerOptions {
    pub controls: ControlOverrides,
    pub labels: LabelOverrides,
    pub playlist: Option<Playlist>,
    pub current_song: Option<usize>,
}

impl PlayerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn control(mut self, name: ControlName, handle: ControlHandle) -> Self {
        self.controls = self.controls.bind(name, handle);
        self
    }

    pub fn labels(mut self, labels: LabelOverrides) -> Self {
        self.labels = labels;
        self
    }

    pub fn playlist_item(mut self, template: impl Into<String>) -> Self {
        self.labels.playlist_item = Some(template.into());
        self
    }

    pub fn playlist(mut self, playlist: Playlist) -> Self {
        self.playlist = Some(playlist);
        self
    }

    pub fn current_song(mut self, index: usize) -> Self {
        self.current_song = Some(index);
        self
    }
}
