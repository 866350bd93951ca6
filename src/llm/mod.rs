pub mod client;

pub use client::{CompletionClient, CompletionError, GeminiClient};

#[cfg(test)]
pub use client::MockCompletionClient;
