//! Terminal host state and key handling
//!
//! Plays the part of the hosting page: owns the widgets, forwards key presses
//! as control events or shortcuts, and feeds the simulated clock's
//! notifications back into the player.

use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use audioplayer::{
    AudioPlayer, ControlName, Hotkey, Playback, PlayerOptions, Playlist, SimulatedPlayback, UiEvent,
};

use crate::cli::Args;
use crate::view::Widgets;

const SEEK_STEP_SECS: f64 = 5.0;
const STATUS_TTL: Duration = Duration::from_secs(5);

pub struct App {
    pub player: AudioPlayer<SimulatedPlayback>,
    pub widgets: Widgets,
    pub cursor: usize,
    pub should_quit: bool,
    status: Option<(String, Instant)>,
}

impl App {
    pub fn new(args: &Args, playlist: Playlist) -> anyhow::Result<Self> {
        let widgets = Widgets::new();
        let playback = SimulatedPlayback::new().with_default_duration(args.track_secs);

        let mut options = widgets
            .bind(PlayerOptions::new())
            .playlist_item(args.item_template.clone())
            .playlist(playlist);
        if let Some(start) = args.start {
            options = options.current_song(start);
        }

        let mut player = AudioPlayer::new(playback, options).context("creating audio player")?;
        player.set_volume(args.volume);
        let cursor = player.current_index();

        Ok(Self {
            player,
            widgets,
            cursor,
            should_quit: false,
            status: None,
        })
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(hotkey) = Hotkey::from_key(&key) {
            let result = self.player.handle_hotkey(hotkey);
            self.report(result);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.should_quit = true,
            KeyCode::Char('j') => {
                let last = self.player.playlist().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
            }
            KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Enter => self.dispatch(UiEvent::PlaylistEntryClick(self.cursor)),
            KeyCode::Char(',') => {
                let target = self.player.playback().current_time() - SEEK_STEP_SECS;
                self.dispatch(UiEvent::Change(ControlName::Seek, target));
            }
            KeyCode::Char('.') => {
                let target = self.player.playback().current_time() + SEEK_STEP_SECS;
                self.dispatch(UiEvent::Change(ControlName::Seek, target));
            }
            _ => {}
        }
    }

    /// Advance the simulated clock and deliver what it reported
    pub fn tick(&mut self, dt: Duration) {
        for event in self.player.playback_mut().advance(dt) {
            let result = self.player.handle_playback_event(event);
            self.report(result);
        }

        if self.status.as_ref().is_some_and(|(_, at)| at.elapsed() >= STATUS_TTL) {
            self.status = None;
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    fn dispatch(&mut self, event: UiEvent) {
        let result = self.player.handle_ui_event(event);
        self.report(result);
    }

    fn report(&mut self, result: audioplayer::Result<()>) {
        if let Err(e) = result {
            tracing::error!(error = %e, "Player operation failed");
            self.status = Some((e.to_string(), Instant::now()));
        }
    }
}
