//! Control events and keyboard shortcuts

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::audio::Playback;
use crate::controls::ControlName;
use crate::error::Result;

use super::AudioPlayer;

/// Volume change per arrow key press
pub const VOLUME_STEP: f64 = 0.025;

/// Events emitted by the bound controls
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiEvent {
    Click(ControlName),
    /// A range control moved to a new value
    Change(ControlName, f64),
    /// A playlist entry was clicked
    PlaylistEntryClick(usize),
}

/// Keyboard shortcuts of the hosting page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hotkey {
    TogglePlay,
    NextSong,
    PrevSong,
    VolumeUp,
    VolumeDown,
}

impl Hotkey {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char(' ') => Some(Hotkey::TogglePlay),
            KeyCode::Right => Some(Hotkey::NextSong),
            KeyCode::Left => Some(Hotkey::PrevSong),
            KeyCode::Up => Some(Hotkey::VolumeUp),
            KeyCode::Down => Some(Hotkey::VolumeDown),
            _ => None,
        }
    }
}

impl<P: Playback> AudioPlayer<P> {
    pub fn handle_ui_event(&mut self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::Click(ControlName::Toggle) => self.toggle_play(),
            UiEvent::Click(ControlName::Next) => self.play_next(),
            UiEvent::Click(ControlName::Prev) => self.play_prev(),
            UiEvent::Change(ControlName::Volume, value) => {
                self.set_volume(value);
                Ok(())
            }
            UiEvent::Change(ControlName::Seek, value) => {
                self.set_song_current_time(value);
                Ok(())
            }
            UiEvent::PlaylistEntryClick(index) => {
                tracing::debug!(index, "Playlist entry clicked");
                self.set_song(index, true)
            }
            other => {
                tracing::trace!(event = ?other, "Ignoring event from passive control");
                Ok(())
            }
        }
    }

    pub fn handle_hotkey(&mut self, hotkey: Hotkey) -> Result<()> {
        tracing::trace!(?hotkey, "Hotkey pressed");
        match hotkey {
            Hotkey::TogglePlay => self.toggle_play(),
            Hotkey::NextSong => self.play_next(),
            Hotkey::PrevSong => self.play_prev(),
            Hotkey::VolumeUp => {
                self.nudge_volume(VOLUME_STEP);
                Ok(())
            }
            Hotkey::VolumeDown => {
                self.nudge_volume(-VOLUME_STEP);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn maps_page_shortcuts() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(Hotkey::from_key(&key(KeyCode::Char(' '))), Some(Hotkey::TogglePlay));
        assert_eq!(Hotkey::from_key(&key(KeyCode::Right)), Some(Hotkey::NextSong));
        assert_eq!(Hotkey::from_key(&key(KeyCode::Left)), Some(Hotkey::PrevSong));
        assert_eq!(Hotkey::from_key(&key(KeyCode::Up)), Some(Hotkey::VolumeUp));
        assert_eq!(Hotkey::from_key(&key(KeyCode::Down)), Some(Hotkey::VolumeDown));
        assert_eq!(Hotkey::from_key(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ignores_key_releases() {
        let mut key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(Hotkey::from_key(&key), None);
    }
}
