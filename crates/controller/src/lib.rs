pub mod controller;

pub use controller::{SubmitOutcome, TurnController, TurnEvent, spawn_round_trip};

pub use nutrichat_core::{Error, Result};
