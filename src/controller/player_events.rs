//! Notifications from the playback primitive

use crate::audio::{Playback, PlaybackEvent};
use crate::controls::ControlName;
use crate::error::Result;
use crate::model::{known_time, timestamp_label};

use super::AudioPlayer;

impl<P: Playback> AudioPlayer<P> {
    pub fn handle_playback_event(&mut self, event: PlaybackEvent) -> Result<()> {
        match event {
            PlaybackEvent::TimeUpdate => {
                self.on_time_update();
                Ok(())
            }
            PlaybackEvent::Ended => {
                tracing::debug!(index = self.current_index, "PlaybackEvent::Ended");
                self.on_playback_ended()
            }
        }
    }

    /// Sync the seek control and both time labels with the primitive
    pub fn on_time_update(&self) {
        let position = self.playback.current_time();
        let current_time = known_time(Some(position));
        let duration = known_time(self.playback.duration());
        tracing::trace!(position, ?duration, "PlaybackEvent::TimeUpdate");

        if let Some(duration) = duration {
            self.controls.set_max(ControlName::Seek, duration);
        }
        if position.is_finite() {
            self.controls.set_value(ControlName::Seek, position);
        }

        self.controls.set_text(ControlName::CurrentTime, &timestamp_label(current_time));
        self.controls.set_text(ControlName::Duration, &timestamp_label(duration));
    }

    /// Continue with the next song, looping to the first after the last
    pub fn on_playback_ended(&mut self) -> Result<()> {
        if self.playlist.is_empty() {
            return Ok(());
        }

        let next = if self.current_index + 1 >= self.playlist.len() {
            0
        } else {
            self.current_index + 1
        };
        self.set_song(next, true)
    }
}
