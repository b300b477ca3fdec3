pub mod footer;
pub mod header;
pub mod quick_replies;
pub mod transcript;

pub use footer::Footer;
pub use header::Header;
pub use quick_replies::QuickReplies;
pub use transcript::TranscriptView;
