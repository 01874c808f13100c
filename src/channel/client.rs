use std::io;
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpSocket, TcpStream, lookup_host};

use super::error::ChannelError;

/// Size of the single-shot receive buffer.
pub const RECV_BUFFER_SIZE: usize = 4096;

/// Client for one dashboard command endpoint.
///
/// Holds at most one TCP connection at a time and performs strictly
/// serialized request/response exchanges: commands go out terminated by a
/// single line feed, and each reply is taken from exactly one bounded
/// receive. A reply that spans multiple TCP segments is truncated at the
/// segment boundary; the dashboard server answers each command with one
/// short text message, so no read-until-delimiter loop is attempted.
///
/// All operations are awaited inline by the caller, so at most one command
/// is ever in flight per channel.
#[derive(Debug, Default)]
pub struct DashboardChannel {
    stream: Option<TcpStream>,
}

impl DashboardChannel {
    pub fn new() -> Self {
        Self { stream: None }
    }

    /// Connect to `host:port` and consume the server's greeting.
    ///
    /// The dashboard server sends an unsolicited banner as soon as the
    /// connection is established; it is returned here for display. Errors
    /// with [`ChannelError::AlreadyConnected`] if a connection exists. On
    /// any failure the partially-created socket is released and the
    /// channel is left closed.
    pub async fn open(&mut self, host: &str, port: u16) -> Result<String, ChannelError> {
        if self.stream.is_some() {
            return Err(ChannelError::AlreadyConnected);
        }

        let stream = connect_with_reuse(host, port)
            .await
            .map_err(ChannelError::Connection)?;
        self.stream = Some(stream);

        match self.recv().await {
            Ok(greeting) => Ok(greeting),
            Err(err) => {
                self.stream = None;
                Err(match err {
                    ChannelError::Transport(io_err) => ChannelError::Connection(io_err),
                    other => other,
                })
            }
        }
    }

    /// Drop the connection if one exists. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.stream = None;
    }

    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Address of the connected endpoint, if any.
    pub fn peer_addr(&self) -> Option<SocketAddr> {
        self.stream.as_ref().and_then(|s| s.peer_addr().ok())
    }

    /// Send one command and return the server's reply verbatim, trailing
    /// newline included.
    ///
    /// A single line feed is appended before transmission. Callers must
    /// not pass an empty command; the UI treats empty input as a no-op
    /// before it reaches the channel.
    pub async fn send_command(&mut self, text: &str) -> Result<String, ChannelError> {
        let stream = self.stream.as_mut().ok_or(ChannelError::NotConnected)?;

        let mut payload = String::with_capacity(text.len() + 1);
        payload.push_str(text);
        payload.push('\n');
        stream
            .write_all(payload.as_bytes())
            .await
            .map_err(ChannelError::Transport)?;

        self.recv().await
    }

    /// One bounded receive, decoded as UTF-8.
    async fn recv(&mut self) -> Result<String, ChannelError> {
        let stream = self.stream.as_mut().ok_or(ChannelError::NotConnected)?;

        let mut buf = [0u8; RECV_BUFFER_SIZE];
        let n = stream.read(&mut buf).await.map_err(ChannelError::Transport)?;
        if n == 0 {
            return Err(ChannelError::Transport(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "server closed connection",
            )));
        }

        Ok(std::str::from_utf8(&buf[..n])?.to_string())
    }
}

/// Resolve `host:port` and connect with address reuse enabled on the
/// socket, trying each resolved address in order.
async fn connect_with_reuse(host: &str, port: u16) -> io::Result<TcpStream> {
    let mut last_err = None;
    for addr in lookup_host((host, port)).await? {
        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4()?,
            SocketAddr::V6(_) => TcpSocket::new_v6()?,
        };
        socket.set_reuseaddr(true)?;
        match socket.connect(addr).await {
            Ok(stream) => return Ok(stream),
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("could not resolve {host}:{port}"),
        )
    }))
}
