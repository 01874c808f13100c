use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::utils::centered_rect;

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
        Span::raw(description),
    ])
}

/// Draw the help overlay with scroll support
pub fn draw_help_overlay(f: &mut Frame, scroll_offset: u16) {
    let help_text = vec![
        Line::from(vec![Span::styled(
            format!("Urdash {} - UR Dashboard Server client", env!("CARGO_PKG_VERSION")),
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Connection:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key_line("Enter", "Connect to the typed address (while disconnected)"),
        key_line("Ctrl+D", "Disconnect"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Commands:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key_line("Enter", "Send the typed command (while connected)"),
        key_line("Tab", "Complete against the dashboard command list"),
        key_line("Up/Down", "Walk command history"),
        key_line("Ctrl+P", "Open the quick-pick command list"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Transcript:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key_line("PgUp/PgDn", "Scroll the transcript"),
        key_line("Home/End", "Jump to the oldest/latest lines"),
        key_line("Ctrl+S", "Save the transcript to a file"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Other:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key_line("Esc", "Dismiss overlay / clear input and status"),
        key_line("F1", "Toggle this help"),
        key_line("Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Responses arrive exactly as the dashboard server sends them; unknown",
            Style::default().fg(Color::Gray),
        )]),
        Line::from(vec![Span::styled(
            "commands are still transmitted and answered by the robot.",
            Style::default().fg(Color::Gray),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(" scroll, "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" or "),
            Span::styled("F1", Style::default().fg(Color::Yellow)),
            Span::raw(" to close"),
        ]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset, 0));

    let area = centered_rect(70, 80, f.area());

    // Clear the area behind the popup
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
