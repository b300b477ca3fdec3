pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod transcript;

pub use config::{Config, DEFAULT_ENDPOINT, FileLoggingSection, LoggingSection};
pub use error::{Error, Result};
pub use session::{ChatSession, DietOption, NO_REPLY_FALLBACK};
pub use transcript::{Speaker, Transcript, Turn};
