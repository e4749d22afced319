//! Seek bar rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
};

use super::widgets::Widgets;

pub fn render_seek_bar(frame: &mut Frame, area: Rect, widgets: &Widgets) {
    let seek = widgets.seek.borrow();
    let time_str = format!(
        "{} / {}",
        widgets.current_time.borrow().text,
        widgets.duration.borrow().text
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Seek ")
                .title_bottom(Line::from(" , back 5s | . forward 5s ").right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(seek.ratio())
        .label(time_str);

    frame.render_widget(gauge, area);
}

pub fn render_volume_bar(frame: &mut Frame, area: Rect, widgets: &Widgets) {
    let volume = widgets.volume.borrow();

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Volume "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(volume.ratio())
        .label(widgets.volume_perc.borrow().text.clone());

    frame.render_widget(gauge, area);
}
