use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Errors raised by the dashboard command channel.
///
/// `Connection` guarantees the channel ended up closed. `Transport` leaves
/// the channel open; recovery is an explicit `close` by the caller, because
/// the channel cannot tell whether the failure is transient. `Decode` is
/// non-fatal to the connection.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("already connected; disconnect first")]
    AlreadyConnected,

    #[error("not connected")]
    NotConnected,

    #[error("connection failed: {0}")]
    Connection(#[source] io::Error),

    #[error("transport failed: {0}")]
    Transport(#[source] io::Error),

    #[error("response is not valid UTF-8: {0}")]
    Decode(#[from] Utf8Error),
}
