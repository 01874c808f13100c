use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::channel::DashboardChannel;
use crate::ui::app::{App, Focus};

/// Draw the connection bar: robot address, port, and connection state
pub fn draw_connection_bar(
    f: &mut Frame,
    area: Rect,
    app: &App,
    channel: &DashboardChannel,
    port: u16,
) {
    let mut spans = vec![
        Span::styled("Robot address: ", Style::default().fg(Color::Gray)),
        Span::raw(&app.host_input),
    ];

    // Editing cursor only while the address field has focus
    if app.focus == Focus::Address {
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
    }

    spans.push(Span::styled(
        format!("  Port: {port}"),
        Style::default().fg(Color::Gray),
    ));
    spans.push(Span::raw("  "));

    if channel.is_open() {
        let state = match channel.peer_addr() {
            Some(addr) => format!("Connected ({addr})"),
            None => "Connected".to_string(),
        };
        spans.push(Span::styled(
            state,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            "Disconnected",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Robot "));

    f.render_widget(paragraph, area);
}
