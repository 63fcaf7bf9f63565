pub mod client;
pub mod completion_provider;

pub use client::OpenAIClient;
pub use completion_provider::OpenAICompletionProvider;
