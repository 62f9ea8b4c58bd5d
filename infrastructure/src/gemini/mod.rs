//! Gemini `generateContent` adapter
//!
//! Implements [`LlmGateway`](medinfo_application::LlmGateway) over the
//! Gemini REST API, with Google Search grounding enabled per request.

mod gateway;
mod types;

pub use gateway::{GeminiConfig, GeminiGateway};
