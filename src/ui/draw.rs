use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::channel::DashboardChannel;
use crate::commands;
use crate::config::Config;
use crate::transcript::Transcript;

use super::app::App;
use super::overlays::{draw_command_picker, draw_help_overlay};
use super::widgets::{
    draw_command_input, draw_connection_bar, draw_status_bar, draw_transcript,
};

/// Draw the UI to the terminal
pub fn draw(
    f: &mut Frame,
    app: &mut App,
    transcript: &Transcript,
    channel: &DashboardChannel,
    config: &Config,
) {
    // Main layout: connection bar, transcript, command entry, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Connection bar
            Constraint::Min(0),    // Transcript (takes remaining space)
            Constraint::Length(3), // Command entry
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_connection_bar(f, chunks[0], app, channel, config.port);
    draw_transcript(f, chunks[1], transcript, app);
    draw_command_input(f, chunks[2], app);
    draw_status_bar(f, chunks[3], app, transcript);

    // Overlays last so they sit on top
    if app.show_help {
        draw_help_overlay(f, app.help_scroll_offset);
    }

    if app.picker_open {
        let items = commands::picker_items(&config.commands);
        draw_command_picker(f, &items, app.picker_index);
    }
}
