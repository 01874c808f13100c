use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::{App, Focus};

/// Draw the command entry at the bottom of the screen
pub fn draw_command_input(f: &mut Frame, area: Rect, app: &App) {
    let text = if app.save_mode {
        // Save-path prompt replaces the command entry while active
        Line::from(vec![
            Span::styled("Save transcript to: ", Style::default().fg(Color::Cyan)),
            Span::raw(&app.save_input),
            Span::styled("_", Style::default().fg(Color::Cyan)),
            Span::styled("  (", Style::default().fg(Color::Gray)),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" to save | ", Style::default().fg(Color::Gray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" to cancel)", Style::default().fg(Color::Gray)),
        ])
    } else if app.focus == Focus::Command {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Green)),
            Span::raw(&app.input.input),
            Span::styled("_", Style::default().fg(Color::Green)),
        ])
    } else {
        Line::from(vec![Span::styled(
            "Connect to the robot to send commands",
            Style::default().fg(Color::DarkGray),
        )])
    };

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Command "));

    f.render_widget(paragraph, area);
}
