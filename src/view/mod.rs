//! View module - UI rendering
//!
//! Renders the player's control handles with ratatui. It is organized into
//! submodules by component type:
//!
//! - `widgets`: Control handle implementations the player writes into
//! - `utils`: Shared helpers (scrollable lists, truncation)
//! - `layout`: Now-playing header, playlist and control bar
//! - `progress`: Seek and volume gauges

mod layout;
mod progress;
mod utils;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub use widgets::Widgets;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, widgets: &Widgets, cursor: usize, status: Option<&str>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Now playing
                Constraint::Min(0),    // Playlist
                Constraint::Length(3), // Seek + volume
                Constraint::Length(3), // Buttons and status
            ])
            .split(frame.area());

        layout::render_now_playing(frame, chunks[0], widgets);
        layout::render_playlist(frame, chunks[1], widgets, cursor);

        let gauges = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(75), // Seek bar
                Constraint::Percentage(25), // Volume
            ])
            .split(chunks[2]);

        progress::render_seek_bar(frame, gauges[0], widgets);
        progress::render_volume_bar(frame, gauges[1], widgets);

        layout::render_control_bar(frame, chunks[3], widgets, status);
    }
}
