//! Error types for the player controller

use thiserror::Error;

use crate::controls::ControlName;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    /// Song index outside the playlist bounds
    #[error("Invalid song index {index} (playlist has {len} entries)")]
    InvalidIndex { index: usize, len: usize },

    /// A control was never bound; an inert placeholder stands in for it
    #[error("Control `{0}` is not bound, using an inert placeholder")]
    MissingBinding(ControlName),

    /// The playback primitive refused a track source
    #[error("Unsupported source `{src}`: {reason}")]
    UnsupportedSource { src: String, reason: String },
}

pub type Result<T> = std::result::Result<T, PlayerError>;
