// Command channel to the robot controller's dashboard port
// One TCP connection, strictly serialized request/response exchanges

pub mod client;
pub mod error;

pub use client::{DashboardChannel, RECV_BUFFER_SIZE};
pub use error::ChannelError;
