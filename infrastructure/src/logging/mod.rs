//! Search transcript logging.
//!
//! Provides [`JsonlTranscriptLogger`], an append-only JSONL writer that
//! implements the [`ConversationLogger`](medinfo_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlTranscriptLogger;
