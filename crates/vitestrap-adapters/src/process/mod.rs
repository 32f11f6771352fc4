//! Process adapters.

mod recording;
mod system;

pub use recording::{RecordedCommand, RecordingCommandRunner};
pub use system::SystemCommandRunner;
