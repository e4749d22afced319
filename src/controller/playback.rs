//! Playback control methods

use crate::audio::Playback;
use crate::controls::ControlName;
use crate::error::{PlayerError, Result};
use crate::model::{Playlist, TIME_ZERO, normalize_volume, render_item_label, volume_label};

use super::AudioPlayer;

impl<P: Playback> AudioPlayer<P> {
    /// Replace the playlist, rebuild its control and select the first track.
    ///
    /// An empty playlist clears the control and the track displays and
    /// pauses the primitive. If the primitive refuses the first source the
    /// current playlist and selection are kept.
    pub fn set_playlist(&mut self, playlist: Playlist) -> Result<()> {
        tracing::debug!(tracks = playlist.len(), "Setting playlist");

        if let Some(first) = playlist.first() {
            if let Err(e) = self.playback.set_source(&first.src) {
                tracing::error!(src = %first.src, error = %e, "Playback rejected first source of new playlist");
                return Err(e);
            }
        }

        self.playlist = playlist;
        self.current_index = 0;
        self.refresh_playlist();

        if self.playlist.is_empty() {
            self.playback.pause();
            self.clear_song_info();
            self.reset_timestamps();
            self.refresh_toggle_display();
            return Ok(());
        }

        self.show_loaded_song(0, false)
    }

    /// Select the song at `index`, optionally starting playback.
    ///
    /// Out-of-range indices are rejected with [`PlayerError::InvalidIndex`]
    /// and leave the player untouched, as does a source the primitive refuses.
    pub fn set_song(&mut self, index: usize, force_play: bool) -> Result<()> {
        let len = self.playlist.len();
        let Some(entry) = self.playlist.get(index) else {
            tracing::warn!(index, len, "Rejected song index");
            return Err(PlayerError::InvalidIndex { index, len });
        };

        if let Err(e) = self.playback.set_source(&entry.src) {
            tracing::error!(index, src = %entry.src, error = %e, "Playback rejected source");
            return Err(e);
        }

        self.show_loaded_song(index, force_play)
    }

    /// Bring every derived display in line with the source just loaded for `index`
    fn show_loaded_song(&mut self, index: usize, force_play: bool) -> Result<()> {
        if let Some(entry) = self.playlist.get(index) {
            tracing::debug!(
                index,
                artist = %entry.artist,
                title = %entry.title,
                force_play,
                "Song changed"
            );
        }

        self.current_index = index;
        self.set_song_info(index);
        self.reset_timestamps();
        self.set_playlist_active_song();

        let started = if force_play && !self.is_playing() {
            self.playback.play()
        } else {
            Ok(())
        };
        self.refresh_toggle_display();
        started
    }

    /// Advance one track; does nothing on the last one
    pub fn play_next(&mut self) -> Result<()> {
        if self.current_index + 1 < self.playlist.len() {
            self.set_song(self.current_index + 1, true)
        } else {
            tracing::trace!(index = self.current_index, "Already at last song");
            Ok(())
        }
    }

    /// Go back one track; does nothing on the first one
    pub fn play_prev(&mut self) -> Result<()> {
        if self.current_index > 0 && !self.playlist.is_empty() {
            self.set_song(self.current_index - 1, true)
        } else {
            tracing::trace!(index = self.current_index, "Already at first song");
            Ok(())
        }
    }

    /// Apply a raw volume, either in `[0, 1]` or as a percentage
    pub fn set_volume(&mut self, raw: f64) {
        let Some(volume) = normalize_volume(raw) else {
            tracing::warn!(raw, "Ignoring non-finite volume");
            return;
        };

        self.playback.set_volume(volume);
        tracing::debug!(volume, "Volume set");
        self.refresh_volume_display();
    }

    /// Step the volume relative to its current value, clamped to `[0, 1]`
    pub fn nudge_volume(&mut self, delta: f64) {
        let volume = (self.playback.volume() + delta).clamp(0.0, 1.0);
        self.playback.set_volume(volume);
        tracing::debug!(volume, delta, "Volume nudged");
        self.refresh_volume_display();
    }

    /// Seek the primitive to `seconds`
    pub fn set_song_current_time(&mut self, seconds: f64) {
        tracing::debug!(seconds, "Seeking");
        self.playback.set_current_time(seconds);
    }

    pub fn toggle_play(&mut self) -> Result<()> {
        let is_playing = self.is_playing();
        tracing::debug!(is_playing, "Toggling playback");

        let result = if is_playing {
            self.playback.pause();
            Ok(())
        } else {
            self.playback.play()
        };

        self.refresh_toggle_display();
        result
    }

    pub fn is_playing(&self) -> bool {
        !self.playback.paused()
    }

    /// Show the play glyph while paused and the pause glyph while playing
    pub fn refresh_toggle_display(&self) {
        let glyph = self.labels.toggle_glyph(self.is_playing());
        self.controls.set_text(ControlName::Toggle, glyph);
    }

    /// Percentage label plus the volume range on its 0-100 scale
    pub(crate) fn refresh_volume_display(&self) {
        let volume = self.playback.volume();
        self.controls.set_text(ControlName::VolumePerc, &volume_label(volume));
        self.controls.set_value(ControlName::Volume, volume * 100.0);
    }

    fn refresh_playlist(&self) {
        let mut list = self.controls.get(ControlName::Playlist).borrow_mut();
        list.clear_entries();
        for (i, entry) in self.playlist.iter().enumerate() {
            list.append_entry(&render_item_label(&self.labels.playlist_item, i, entry));
        }
    }

    fn set_playlist_active_song(&self) {
        let mut list = self.controls.get(ControlName::Playlist).borrow_mut();
        for i in 0..self.playlist.len() {
            list.set_entry_active(i, i == self.current_index);
        }
    }

    fn set_song_info(&self, index: usize) {
        let Some(entry) = self.playlist.get(index) else {
            return;
        };
        self.controls.set_text(ControlName::Track, &(index + 1).to_string());
        self.controls.set_text(ControlName::Artist, &entry.artist);
        self.controls.set_text(ControlName::Title, &entry.title);
        self.controls.set_image(ControlName::Thumbnail, entry.thumbnail.as_deref());
    }

    fn clear_song_info(&self) {
        self.controls.set_text(ControlName::Track, "");
        self.controls.set_text(ControlName::Artist, "");
        self.controls.set_text(ControlName::Title, "");
        self.controls.set_image(ControlName::Thumbnail, None);
    }

    /// A freshly loaded source has not reported any timing yet
    fn reset_timestamps(&self) {
        self.controls.set_value(ControlName::Seek, 0.0);
        self.controls.set_text(ControlName::CurrentTime, TIME_ZERO);
        self.controls.set_text(ControlName::Duration, TIME_ZERO);
    }
}
