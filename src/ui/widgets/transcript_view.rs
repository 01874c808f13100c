use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::transcript::{Direction, Transcript};
use crate::ui::app::App;

/// Color for each transcript direction. Sent commands render green and
/// responses blue, client notices gray.
fn direction_color(direction: Direction) -> Color {
    match direction {
        Direction::Sent => Color::Green,
        Direction::Received => Color::Blue,
        Direction::Info => Color::Gray,
    }
}

/// Draw the transcript viewer in the middle of the screen
pub fn draw_transcript(f: &mut Frame, area: Rect, transcript: &Transcript, app: &mut App) {
    // Flatten entries into styled display lines
    let all_lines: Vec<(Direction, String)> = transcript
        .entries()
        .flat_map(|entry| {
            entry
                .display_lines()
                .into_iter()
                .map(move |line| (entry.direction, line))
        })
        .collect();

    let viewport_height = area.height.saturating_sub(2) as usize; // borders
    let max_offset = all_lines.len().saturating_sub(viewport_height);

    // Publish viewport metrics so the event handler can clamp page scrolls
    app.viewport_height = viewport_height;
    app.max_scroll_offset = max_offset;

    let offset = if app.auto_scroll {
        max_offset
    } else {
        app.scroll_offset.min(max_offset)
    };
    app.scroll_offset = offset;

    let visible: Vec<Line> = all_lines
        .iter()
        .skip(offset)
        .take(viewport_height)
        .map(|(direction, line)| {
            Line::from(Span::styled(
                line.clone(),
                Style::default().fg(direction_color(*direction)),
            ))
        })
        .collect();

    let title = if app.auto_scroll {
        " Transcript ".to_string()
    } else {
        format!(" Transcript [{}/{}] ", offset, max_offset)
    };

    let paragraph =
        Paragraph::new(visible).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}
