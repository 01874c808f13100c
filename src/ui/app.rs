use super::input_state::InputState;
use super::types::StatusType;

/// Which field receives printable keys.
/// The address field is active while disconnected, the command field once
/// a connection is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Address,
    Command,
}

/// Application state for the TUI
pub struct App {
    /// Robot address being edited in the connection bar
    pub host_input: String,
    /// Command entry state (text plus history)
    pub input: InputState,
    /// Which input currently receives keys
    pub focus: Focus,
    /// Scroll offset for the transcript viewer (display lines from top)
    pub scroll_offset: usize,
    /// Whether to stick to the latest transcript lines
    pub auto_scroll: bool,
    /// Largest valid scroll offset, updated by the transcript view each draw
    pub max_scroll_offset: usize,
    /// Transcript viewport height in lines, updated each draw
    pub viewport_height: usize,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message to show to the user (message, type)
    pub status_message: Option<(String, StatusType)>,
    /// Whether the quick-pick command overlay is open
    pub picker_open: bool,
    /// Currently selected quick-pick entry
    pub picker_index: usize,
    /// Whether the save-path prompt is active
    pub save_mode: bool,
    /// Path being edited in the save-path prompt
    pub save_input: String,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Scroll offset for the help overlay
    pub help_scroll_offset: u16,
}

impl App {
    pub fn new() -> Self {
        Self {
            host_input: String::new(),
            input: InputState::new(),
            focus: Focus::Address,
            scroll_offset: 0,
            auto_scroll: true, // Start with auto-scroll enabled
            max_scroll_offset: 0,
            viewport_height: 0,
            should_quit: false,
            status_message: None,
            picker_open: false,
            picker_index: 0,
            save_mode: false,
            save_input: String::new(),
            show_help: false,
            help_scroll_offset: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        self.auto_scroll = false;
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll_offset);
        // If we scrolled to the bottom, re-enable auto-scroll
        if self.scroll_offset >= self.max_scroll_offset {
            self.auto_scroll = true;
        }
    }

    /// Jump to top
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.auto_scroll = false;
    }

    /// Jump to bottom and enable auto-scroll
    pub fn scroll_to_bottom(&mut self) {
        self.auto_scroll = true;
        self.scroll_offset = self.max_scroll_offset;
    }

    /// Set a success status message
    pub fn set_status_success(&mut self, message: String) {
        self.status_message = Some((message, StatusType::Success));
    }

    /// Set an error status message
    pub fn set_status_error(&mut self, message: String) {
        self.status_message = Some((message, StatusType::Error));
    }

    /// Set an info status message
    pub fn set_status_info(&mut self, message: String) {
        self.status_message = Some((message, StatusType::Info));
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
        self.picker_index = 0;
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    pub fn picker_prev(&mut self) {
        self.picker_index = self.picker_index.saturating_sub(1);
    }

    pub fn picker_next(&mut self, item_count: usize) {
        if self.picker_index + 1 < item_count {
            self.picker_index += 1;
        }
    }

    pub fn enter_save_mode(&mut self, prefill: String) {
        self.save_mode = true;
        self.save_input = prefill;
        self.status_message = None;
    }

    pub fn exit_save_mode(&mut self) {
        self.save_mode = false;
        self.save_input.clear();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.help_scroll_offset = 0;
    }

    pub fn scroll_help_up(&mut self) {
        self.help_scroll_offset = self.help_scroll_offset.saturating_sub(1);
    }

    pub fn scroll_help_down(&mut self) {
        self.help_scroll_offset = self.help_scroll_offset.saturating_add(1);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
