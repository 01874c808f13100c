use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::channel::{ChannelError, DashboardChannel};
use crate::commands;
use crate::config::Config;
use crate::transcript::Transcript;
use crate::ui::{App, Focus};

pub struct EventHandler<'a> {
    app: &'a mut App,
    channel: &'a mut DashboardChannel,
    transcript: &'a mut Transcript,
    config: &'a Config,
}

impl<'a> EventHandler<'a> {
    pub fn new(
        app: &'a mut App,
        channel: &'a mut DashboardChannel,
        transcript: &'a mut Transcript,
        config: &'a Config,
    ) -> Self {
        Self {
            app,
            channel,
            transcript,
            config,
        }
    }

    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        // Returns true if the app should quit, false otherwise
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            // Ctrl-C quits from anywhere
            // In raw mode, Ctrl+C is captured as a keyboard event, not a signal
            KeyCode::Char('c') if ctrl => Ok(true),
            // Help overlay (must come before other handlers)
            KeyCode::F(1) => {
                self.app.toggle_help();
                Ok(false)
            }
            KeyCode::Up | KeyCode::Char('k') if self.app.show_help => {
                self.app.scroll_help_up();
                Ok(false)
            }
            KeyCode::Down | KeyCode::Char('j') if self.app.show_help => {
                self.app.scroll_help_down();
                Ok(false)
            }
            KeyCode::Esc | KeyCode::Char('q') if self.app.show_help => {
                self.app.show_help = false;
                Ok(false)
            }
            _ if self.app.show_help => Ok(false),
            // Save-path prompt
            KeyCode::Char('s') if ctrl && !self.app.save_mode => {
                let prefill = self.default_save_path();
                self.app.close_picker();
                self.app.enter_save_mode(prefill);
                Ok(false)
            }
            KeyCode::Enter if self.app.save_mode => {
                self.save_transcript();
                Ok(false)
            }
            KeyCode::Esc if self.app.save_mode => {
                self.app.exit_save_mode();
                Ok(false)
            }
            KeyCode::Backspace if self.app.save_mode => {
                self.app.save_input.pop();
                Ok(false)
            }
            KeyCode::Char(c) if self.app.save_mode && !ctrl => {
                self.app.save_input.push(c);
                Ok(false)
            }
            _ if self.app.save_mode => Ok(false),
            // Quick-pick command overlay
            KeyCode::Char('p') if ctrl => {
                if self.app.picker_open {
                    self.app.close_picker();
                } else {
                    self.app.open_picker();
                }
                Ok(false)
            }
            KeyCode::Up if self.app.picker_open => {
                self.app.picker_prev();
                Ok(false)
            }
            KeyCode::Down if self.app.picker_open => {
                let count = commands::picker_items(&self.config.commands).len();
                self.app.picker_next(count);
                Ok(false)
            }
            KeyCode::Enter if self.app.picker_open => {
                self.insert_picked_command();
                Ok(false)
            }
            KeyCode::Esc if self.app.picker_open => {
                self.app.close_picker();
                Ok(false)
            }
            _ if self.app.picker_open => Ok(false),
            // Disconnect
            KeyCode::Char('d') if ctrl => {
                self.disconnect();
                Ok(false)
            }
            // Transcript scrolling
            KeyCode::PageUp => {
                let page = self.app.viewport_height.max(1);
                self.app.scroll_up(page);
                Ok(false)
            }
            KeyCode::PageDown => {
                let page = self.app.viewport_height.max(1);
                self.app.scroll_down(page);
                Ok(false)
            }
            KeyCode::Home => {
                self.app.scroll_to_top();
                Ok(false)
            }
            KeyCode::End => {
                self.app.scroll_to_bottom();
                Ok(false)
            }
            // Command history
            KeyCode::Up if self.app.focus == Focus::Command => {
                self.app.input.history_prev();
                Ok(false)
            }
            KeyCode::Down if self.app.focus == Focus::Command => {
                self.app.input.history_next();
                Ok(false)
            }
            // Tab completion
            KeyCode::Tab if self.app.focus == Focus::Command => {
                self.complete_command();
                Ok(false)
            }
            // Enter connects while disconnected and sends while connected
            KeyCode::Enter => {
                match self.app.focus {
                    Focus::Address => self.connect().await?,
                    Focus::Command => self.send().await?,
                }
                Ok(false)
            }
            KeyCode::Backspace => {
                match self.app.focus {
                    Focus::Address => {
                        self.app.host_input.pop();
                    }
                    Focus::Command => self.app.input.delete_char(),
                }
                Ok(false)
            }
            KeyCode::Esc => {
                self.handle_escape();
                Ok(false)
            }
            KeyCode::Char(c) if !ctrl => {
                match self.app.focus {
                    Focus::Address => self.app.host_input.push(c),
                    Focus::Command => self.app.input.add_char(c),
                }
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Open the channel to the typed address and record the greeting.
    /// Also used for `--connect` at startup.
    pub async fn connect(&mut self) -> Result<()> {
        let host = self.app.host_input.trim().to_string();
        if host.is_empty() {
            self.app
                .set_status_error("Enter a robot address first".to_string());
            return Ok(());
        }
        let port = self.config.port;
        match self.channel.open(&host, port).await {
            Ok(greeting) => {
                self.transcript
                    .record_info(format!("Connecting to {host}:{port}"));
                self.transcript.record_received(greeting);
                self.app.focus = Focus::Command;
                self.app.scroll_to_bottom();
                self.app
                    .set_status_success(format!("Connected to {host}:{port}"));
            }
            Err(err) => {
                self.transcript
                    .record_info(format!("Connection to {host}:{port} failed: {err}"));
                self.app.set_status_error(err.to_string());
            }
        }
        Ok(())
    }

    /// Send the typed command and record the exchange.
    async fn send(&mut self) -> Result<()> {
        let text = self.app.input.input.clone();
        // An empty command is a client-side no-op, not a protocol request
        if text.is_empty() {
            return Ok(());
        }
        if !self.channel.is_open() {
            self.app
                .set_status_info("Command not sent. Not connected.".to_string());
            return Ok(());
        }

        self.transcript.record_sent(text.clone());
        self.app.input.save_to_history(text.clone());
        self.app.input.clear();
        self.app.scroll_to_bottom();

        match self.channel.send_command(&text).await {
            Ok(response) => {
                self.transcript.record_received(response);
                self.app.clear_status();
            }
            Err(err @ ChannelError::Decode(_)) => {
                // The connection survives a bad reply; a later command may succeed
                self.app.set_status_error(err.to_string());
            }
            Err(err) => {
                // The channel stays open until the operator disconnects
                self.app
                    .set_status_error(format!("{err} - press Ctrl+D to disconnect"));
            }
        }
        Ok(())
    }

    fn disconnect(&mut self) {
        if self.channel.is_open() {
            self.channel.close();
            self.transcript
                .record_info("Client has disconnected from server");
            self.app.set_status_info("Disconnected".to_string());
        } else {
            self.app.set_status_info("Not connected".to_string());
        }
        self.app.focus = Focus::Address;
    }

    fn complete_command(&mut self) {
        let completed = commands::complete(
            &self.app.input.input,
            self.config.commands.iter().map(String::as_str),
        );
        if let Some(completed) = completed {
            self.app.input.input = completed;
            self.app.input.reset_history_nav();
        }
    }

    fn insert_picked_command(&mut self) {
        let items = commands::picker_items(&self.config.commands);
        if let Some(cmd) = items.get(self.app.picker_index) {
            self.app.input.input = (*cmd).to_string();
            self.app.input.reset_history_nav();
        }
        self.app.close_picker();
    }

    fn default_save_path(&self) -> String {
        self.config
            .transcript
            .log_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "urdash-session.txt".to_string())
    }

    fn save_transcript(&mut self) {
        let target = self.app.save_input.trim().to_string();
        if target.is_empty() {
            self.app.set_status_error("Enter a file path".to_string());
            return;
        }
        let path = PathBuf::from(&target);
        match self.transcript.save_to_file(&path) {
            Ok(()) => self
                .app
                .set_status_success(format!("Transcript saved to {target}")),
            Err(err) => self.app.set_status_error(err.to_string()),
        }
        self.app.exit_save_mode();
    }

    fn handle_escape(&mut self) {
        self.app.clear_status();
        if self.app.focus == Focus::Command {
            self.app.input.clear();
        }
    }
}
