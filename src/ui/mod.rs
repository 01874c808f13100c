mod app;
mod draw;
mod input_state;
mod types;
mod utils;
mod widgets;

pub mod overlays;

pub use app::{App, Focus};
pub use draw::draw;
pub use input_state::InputState;
pub use types::StatusType;
