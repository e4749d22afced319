//! Embeddable playlist audio player.
//!
//! [`AudioPlayer`] wires a playback primitive (anything implementing
//! [`Playback`]) to a set of host-provided controls (anything implementing
//! [`Control`]) and keeps both in sync: control events become playback
//! changes, playback notifications become control updates.

pub mod audio;
pub mod config;
pub mod controller;
pub mod controls;
pub mod error;
pub mod model;

pub use audio::{Playback, PlaybackEvent, SimulatedPlayback};
pub use config::PlayerOptions;
pub use controller::{AudioPlayer, Hotkey, UiEvent, VOLUME_STEP};
pub use controls::{Control, ControlBindings, ControlHandle, ControlName, ControlOverrides, InertControl};
pub use error::{PlayerError, Result};
pub use model::{LabelOverrides, Labels, PlayerState, Playlist, PlaylistEntry};
