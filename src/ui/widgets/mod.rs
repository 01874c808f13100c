mod command_input;
mod connection_bar;
mod status_bar;
mod transcript_view;

pub use command_input::draw_command_input;
pub use connection_bar::draw_connection_bar;
pub use status_bar::draw_status_bar;
pub use transcript_view::draw_transcript;
