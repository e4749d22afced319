//! Layout rendering (now-playing header, playlist, control bar)

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
};

use super::utils::{render_scrollable_list, truncate_string};
use super::widgets::Widgets;

pub fn render_now_playing(frame: &mut Frame, area: Rect, widgets: &Widgets) {
    let track = widgets.track.borrow();
    let title = widgets.title.borrow();
    let artist = widgets.artist.borrow();
    let thumbnail = widgets.thumbnail.borrow();

    let lines = if title.text.is_empty() {
        vec![Line::from(Span::styled("No track loaded", Style::default().fg(Color::DarkGray)))]
    } else {
        vec![
            Line::from(vec![
                Span::styled(format!("#{} ", track.text), Style::default().fg(Color::DarkGray)),
                Span::styled(title.text.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(artist.text.clone(), Style::default().fg(Color::Cyan))),
            Line::from(Span::styled(
                thumbnail.src.clone().unwrap_or_default(),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Now playing ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_playlist(frame: &mut Frame, area: Rect, widgets: &Widgets, cursor: usize) {
    let playlist = widgets.playlist.borrow();
    let width = area.width.saturating_sub(6) as usize;
    let active = playlist.active_index();

    let items: Vec<ListItem> = playlist
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let marker = if i == cursor { "> " } else { "  " };
            let style = if active == Some(i) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if i == cursor {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", marker, truncate_string(entry, width))).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Playlist ")
        .title_bottom(Line::from(" j/k move | Enter play ").right_aligned())
        .padding(Padding::horizontal(1));

    render_scrollable_list(frame, area, items, cursor, block);
}

pub fn render_control_bar(frame: &mut Frame, area: Rect, widgets: &Widgets, status: Option<&str>) {
    let button = |text: &str| Span::styled(format!("[ {} ]", text), Style::default().fg(Color::Yellow));

    let mut spans = vec![
        button(&widgets.prev.borrow().text),
        Span::raw(" "),
        button(&widgets.toggle.borrow().text),
        Span::raw(" "),
        button(&widgets.next.borrow().text),
        Span::raw("   "),
    ];

    match status {
        Some(message) => spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Red))),
        None => spans.push(Span::styled(
            "Space play/pause | ←/→ prev/next | ↑/↓ volume | q quit",
            Style::default().fg(Color::DarkGray),
        )),
    }

    let bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}
