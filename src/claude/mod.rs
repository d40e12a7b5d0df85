// Claude module
// Messages API client and the chat relay built on it

mod client;
mod relay;
pub mod types;

pub use client::ClaudeClient;
pub use relay::ChatRelay;
pub use types::{ContentBlock, Message, MessageRequest, MessageResponse};
