pub mod mock;
pub mod normalize;
pub mod types;
pub mod webhook;

pub use mock::{MockService, ScriptedRoundTrip};
pub use normalize::normalize_reply;
pub use types::{WebhookRequest, WebhookResponse};
pub use webhook::{WebhookClient, WebhookService};

pub use nutrichat_core::{Error, Result};
