use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::transcript::Transcript;
use crate::ui::app::App;
use crate::ui::types::StatusType;

/// Draw the one-line status bar: a color-coded message when one is set,
/// key hints otherwise
pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App, transcript: &Transcript) {
    let line = if let Some((message, status_type)) = &app.status_message {
        let color = match status_type {
            StatusType::Success => Color::Green,
            StatusType::Error => Color::Red,
            StatusType::Info => Color::Yellow,
        };
        Line::from(vec![Span::styled(message, Style::default().fg(color))])
    } else {
        let mut spans = vec![
            Span::styled("Enter", hint_key_style()),
            Span::styled(" connect/send | ", hint_text_style()),
            Span::styled("Tab", hint_key_style()),
            Span::styled(" complete | ", hint_text_style()),
            Span::styled("Ctrl+P", hint_key_style()),
            Span::styled(" commands | ", hint_text_style()),
            Span::styled("Ctrl+S", hint_key_style()),
            Span::styled(" save | ", hint_text_style()),
            Span::styled("F1", hint_key_style()),
            Span::styled(" help | ", hint_text_style()),
            Span::styled("Ctrl+C", hint_key_style()),
            Span::styled(" quit", hint_text_style()),
        ];
        if !transcript.is_empty() {
            spans.push(Span::styled(
                format!("  ({} entries)", transcript.len()),
                hint_text_style(),
            ));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Rgb(40, 40, 40)));

    f.render_widget(paragraph, area);
}

fn hint_key_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

fn hint_text_style() -> Style {
    Style::default().fg(Color::Gray)
}
