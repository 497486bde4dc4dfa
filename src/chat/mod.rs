pub mod fallback;
pub mod service;

pub use fallback::FallbackResponder;
pub use service::{ChatError, ChatRequest, ChatService};
