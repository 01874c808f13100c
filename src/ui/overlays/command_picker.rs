use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::utils::centered_rect;

/// Draw the quick-pick command overlay
pub fn draw_command_picker(f: &mut Frame, items: &[&str], selected_index: usize) {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Dashboard commands",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    // Show up to 12 entries at a time, scrolling if needed
    let visible_count = 12.min(items.len());
    let scroll_offset = if selected_index >= visible_count {
        selected_index - visible_count + 1
    } else {
        0
    };

    for (idx, item) in items
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_count)
    {
        let is_selected = idx == selected_index;
        let prefix = if is_selected { "> " } else { "  " };

        let style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        lines.push(Line::from(Span::styled(
            format!("{prefix}{item}"),
            style,
        )));
    }

    if items.len() > visible_count {
        lines.push(Line::from(Span::styled(
            format!(
                "  ... showing {}-{} of {}",
                scroll_offset + 1,
                (scroll_offset + visible_count).min(items.len()),
                items.len()
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" navigate, "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" insert, "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" cancel"),
    ]));

    let block = Block::default()
        .title(" Insert Command ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines).block(block);

    let area = centered_rect(50, 70, f.area());

    // Clear the area behind the popup
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
