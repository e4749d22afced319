//! Controller module - Player logic and event handling
//!
//! [`AudioPlayer`] owns the playlist, the playback primitive and the control
//! bindings, and keeps the controls in sync with playback. It is organized into
//! submodules by responsibility:
//!
//! - `playback`: Song selection and playback control methods
//! - `player_events`: Time-update and ended notifications from the primitive
//! - `input`: Control events and keyboard shortcuts

mod input;
mod playback;
mod player_events;

pub use input::{Hotkey, UiEvent, VOLUME_STEP};

use crate::audio::Playback;
use crate::config::PlayerOptions;
use crate::controls::{ControlBindings, ControlName};
use crate::error::Result;
use crate::model::{Labels, PlayerState, Playlist, PlaylistEntry};

pub struct AudioPlayer<P: Playback> {
    pub(crate) playback: P,
    pub(crate) controls: ControlBindings,
    pub(crate) labels: Labels,
    pub(crate) playlist: Playlist,
    pub(crate) current_index: usize,
}

impl<P: Playback> AudioPlayer<P> {
    /// Bind the controls, install the initial playlist and select the
    /// requested song.
    ///
    /// Fails if the playlist's first track (or `current_song`) cannot be
    /// selected.
    pub fn new(playback: P, options: PlayerOptions) -> Result<Self> {
        let PlayerOptions {
            controls,
            labels,
            playlist,
            current_song,
        } = options;

        let mut player = Self {
            playback,
            controls: ControlBindings::resolve(controls),
            labels: Labels::merged(labels),
            playlist: Vec::new(),
            current_index: 0,
        };

        if let Some(playlist) = playlist {
            player.set_playlist(playlist)?;
        }
        if let Some(index) = current_song {
            player.set_song(index, false)?;
        }

        player.refresh_toggle_display();
        player.refresh_volume_display();

        tracing::info!(
            tracks = player.playlist.len(),
            missing_controls = player.controls.missing().len(),
            "Audio player ready"
        );

        Ok(player)
    }

    pub fn playback(&self) -> &P {
        &self.playback
    }

    /// Mutable access for hosts that drive the primitive's clock
    pub fn playback_mut(&mut self) -> &mut P {
        &mut self.playback
    }

    pub fn playlist(&self) -> &[PlaylistEntry] {
        &self.playlist
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_entry(&self) -> Option<&PlaylistEntry> {
        self.playlist.get(self.current_index)
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Controls that fell back to inert placeholders
    pub fn missing_bindings(&self) -> &[ControlName] {
        self.controls.missing()
    }

    pub fn state(&self) -> PlayerState {
        PlayerState {
            current_index: self.current_index,
            is_playing: self.is_playing(),
            volume: self.playback.volume(),
            current_time: Some(self.playback.current_time()),
            duration: self.playback.duration(),
        }
    }
}
