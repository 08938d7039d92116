//! Interview preparation and chat features backed by a hosted model

pub mod client;
pub mod coach;
pub mod prompts;
