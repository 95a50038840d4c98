//! Settings configuration types

mod greeting;
mod matching;
mod server;
mod wake_word;

pub use greeting::{GreetingCheck, GreetingSettings};
pub use matching::MatchSettings;
pub use server::{BackendSettings, ServerSettings};
pub use wake_word::WakeWordSettings;
