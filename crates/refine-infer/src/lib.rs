//! Inference clients.
//!
//! One capability, `invoke(prompt) -> raw text`, with a concrete client
//! per provider, selected by configuration at construction time. The
//! pipeline is agnostic to which provider answers.

pub mod client;
pub mod error;
pub mod pacer;

pub use client::{
    GroqClient, InferenceClient, InferenceConfig, OpenAiClient, Provider, ProviderClient,
};
pub use error::InferenceError;
pub use pacer::RequestPacer;
