use chrono::{Local, TimeZone};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use urdash::channel::DashboardChannel;
use urdash::config::Config;
use urdash::transcript::{Direction, Transcript, TranscriptEntry};
use urdash::ui::App;

/// Greeting line the stub dashboard server sends on connect
pub const GREETING: &str = "Connected: Universal Robots Dashboard Server\n";

/// Bind a stub dashboard server on an ephemeral port
pub async fn bind_stub() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// Accept one connection, send the greeting, then answer each received
/// line with the next entry of `replies`. Returns the raw lines received.
pub fn serve_session(
    listener: TcpListener,
    replies: Vec<&'static str>,
) -> JoinHandle<Vec<String>> {
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut reader = BufReader::new(stream);
        reader
            .get_mut()
            .write_all(GREETING.as_bytes())
            .await
            .unwrap();

        let mut received = Vec::new();
        for reply in replies {
            let mut line = String::new();
            if reader.read_line(&mut line).await.unwrap() == 0 {
                break;
            }
            received.push(line);
            reader
                .get_mut()
                .write_all(reply.as_bytes())
                .await
                .unwrap();
        }
        received
    })
}

/// Helper to create an App for testing
pub fn create_test_app() -> App {
    App::new()
}

/// Helper to create a transcript entry with a fixed timestamp
pub fn create_test_entry(direction: Direction, text: &str) -> TranscriptEntry {
    let fixed_time = Local.with_ymd_and_hms(2024, 12, 10, 12, 0, 0).unwrap();
    TranscriptEntry::new_with_time(direction, text.to_string(), fixed_time)
}

/// Helper to create a transcript holding one full connect-and-send exchange
pub fn create_transcript_with_exchange() -> Transcript {
    let mut transcript = Transcript::new_default();
    transcript.push(create_test_entry(
        Direction::Info,
        "Connecting to 127.0.0.1:29999",
    ));
    transcript.push(create_test_entry(Direction::Received, GREETING));
    transcript.push(create_test_entry(Direction::Sent, "robotmode"));
    transcript.push(create_test_entry(
        Direction::Received,
        "Robotmode: RUNNING\n",
    ));
    transcript
}

/// Key press without modifiers
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Ctrl+char key press
pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Helper to render the app to a test terminal and return the buffer as a string
pub fn render_app_to_string(
    app: &mut App,
    transcript: &Transcript,
    channel: &DashboardChannel,
    config: &Config,
    width: u16,
    height: u16,
) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| {
            urdash::ui::draw(f, app, transcript, channel, config);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut result = String::new();
    for y in 0..height {
        for x in 0..width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        result.push('\n');
    }
    result
}
