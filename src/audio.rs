//! Playback primitive abstraction
//!
//! The controller drives audio through the [`Playback`] trait and learns about
//! progress through [`PlaybackEvent`]s the host forwards to it. Decoding and
//! output live entirely behind the trait. [`SimulatedPlayback`] is a clock-driven
//! implementation used by the terminal host and the tests.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::error::{PlayerError, Result};

/// Notifications emitted by a playback primitive
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Current position (or known duration) changed
    TimeUpdate,
    /// The current source played through to its end
    Ended,
}

pub trait Playback {
    /// Load a new source; the primitive is paused afterwards.
    /// A refused source leaves the previous one loaded.
    fn set_source(&mut self, src: &str) -> Result<()>;
    fn source(&self) -> Option<&str>;

    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);

    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);

    fn paused(&self) -> bool;
    /// `None` until the source metadata has loaded
    fn duration(&self) -> Option<f64>;

    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
}

const SUPPORTED_EXTENSIONS: [&str; 7] = ["mp3", "ogg", "wav", "flac", "m4a", "opus", "aac"];
const DEFAULT_TRACK_SECS: f64 = 180.0;

/// Playback primitive that advances a virtual clock instead of producing sound
pub struct SimulatedPlayback {
    source: Option<String>,
    position: f64,
    volume: f64,
    paused: bool,
    duration: Option<f64>,
    durations: HashMap<String, f64>,
    default_duration: f64,
    pending: Vec<PlaybackEvent>,
}

impl Default for SimulatedPlayback {
    fn default() -> Self {
        Self {
            source: None,
            position: 0.0,
            volume: 1.0,
            paused: true,
            duration: None,
            durations: HashMap::new(),
            default_duration: DEFAULT_TRACK_SECS,
            pending: Vec::new(),
        }
    }
}

impl SimulatedPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length reported for sources without an explicit duration
    pub fn with_default_duration(mut self, seconds: f64) -> Self {
        self.default_duration = seconds;
        self
    }

    pub fn with_duration(mut self, src: impl Into<String>, seconds: f64) -> Self {
        self.durations.insert(src.into(), seconds);
        self
    }

    /// Move the clock forward by `dt` and collect the notifications it caused.
    ///
    /// The first advance after a source change loads its metadata, which makes
    /// the duration known.
    pub fn advance(&mut self, dt: Duration) -> Vec<PlaybackEvent> {
        let mut events = std::mem::take(&mut self.pending);

        let Some(src) = self.source.as_deref() else {
            return events;
        };

        if self.duration.is_none() {
            let duration = self.durations.get(src).copied().unwrap_or(self.default_duration);
            tracing::trace!(src, duration, "Simulated metadata loaded");
            self.duration = Some(duration);
            events.push(PlaybackEvent::TimeUpdate);
        }

        if self.paused || dt.is_zero() {
            return events;
        }

        let duration = self.duration.unwrap_or(self.default_duration);
        self.position = (self.position + dt.as_secs_f64()).min(duration);
        events.push(PlaybackEvent::TimeUpdate);

        if self.position >= duration {
            self.paused = true;
            events.push(PlaybackEvent::Ended);
        }

        events
    }
}

fn check_source(src: &str) -> Result<()> {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension {
        Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        Some(ext) => Err(PlayerError::UnsupportedSource {
            src: src.to_string(),
            reason: format!("unsupported format `{ext}`"),
        }),
        None => Err(PlayerError::UnsupportedSource {
            src: src.to_string(),
            reason: "cannot determine format".to_string(),
        }),
    }
}

impl Playback for SimulatedPlayback {
    fn set_source(&mut self, src: &str) -> Result<()> {
        check_source(src)?;

        self.source = Some(src.to_string());
        self.position = 0.0;
        self.paused = true;
        self.duration = None;
        self.pending.clear();
        Ok(())
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let upper = self.duration.unwrap_or(f64::INFINITY);
        self.position = seconds.clamp(0.0, upper);
        self.pending.push(PlaybackEvent::TimeUpdate);
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn play(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(PlayerError::UnsupportedSource {
                src: String::new(),
                reason: "no source loaded".to_string(),
            });
        }
        if self.duration.is_some_and(|d| self.position >= d) {
            self.position = 0.0;
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_formats() {
        let mut playback = SimulatedPlayback::new();
        assert!(playback.set_source("assets/song61.mp3").is_ok());
        assert!(playback.set_source("https://example.org/a.ogg?token=1").is_ok());

        let err = playback.set_source("cover.jpg").unwrap_err();
        assert!(matches!(err, PlayerError::UnsupportedSource { .. }));
        assert_eq!(playback.source(), Some("https://example.org/a.ogg?token=1"));
    }

    #[test]
    fn duration_is_unknown_until_metadata_loads() {
        let mut playback = SimulatedPlayback::new().with_duration("a.mp3", 42.0);
        playback.set_source("a.mp3").unwrap();
        assert_eq!(playback.duration(), None);

        let events = playback.advance(Duration::ZERO);
        assert_eq!(events, vec![PlaybackEvent::TimeUpdate]);
        assert_eq!(playback.duration(), Some(42.0));
    }

    #[test]
    fn paused_clock_does_not_move() {
        let mut playback = SimulatedPlayback::new();
        playback.set_source("a.mp3").unwrap();
        playback.advance(Duration::from_secs(5));
        assert_eq!(playback.current_time(), 0.0);
    }

    #[test]
    fn reaching_the_end_pauses_and_reports_ended() {
        let mut playback = SimulatedPlayback::new().with_default_duration(10.0);
        playback.set_source("a.mp3").unwrap();
        playback.advance(Duration::ZERO);
        playback.play().unwrap();

        let events = playback.advance(Duration::from_secs(4));
        assert_eq!(events, vec![PlaybackEvent::TimeUpdate]);
        assert_eq!(playback.current_time(), 4.0);

        let events = playback.advance(Duration::from_secs(20));
        assert_eq!(events, vec![PlaybackEvent::TimeUpdate, PlaybackEvent::Ended]);
        assert_eq!(playback.current_time(), 10.0);
        assert!(playback.paused());
    }

    #[test]
    fn seeking_is_clamped_and_reported() {
        let mut playback = SimulatedPlayback::new().with_default_duration(30.0);
        playback.set_source("a.mp3").unwrap();
        playback.advance(Duration::ZERO);

        playback.set_current_time(45.0);
        assert_eq!(playback.current_time(), 30.0);
        playback.set_current_time(-3.0);
        assert_eq!(playback.current_time(), 0.0);

        let events = playback.advance(Duration::ZERO);
        assert_eq!(events, vec![PlaybackEvent::TimeUpdate, PlaybackEvent::TimeUpdate]);
    }

    #[test]
    fn play_without_source_fails() {
        let mut playback = SimulatedPlayback::new();
        assert!(playback.play().is_err());
        assert!(playback.paused());
    }
}
