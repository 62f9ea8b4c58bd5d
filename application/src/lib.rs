//! Application layer for medinfo
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SearchParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{Citation, GatewayError, GroundedRequest, GroundedResponse, LlmGateway},
    state_listener::{NoStateListener, StateListener},
};
pub use use_cases::search_controller::{
    GENERIC_ERROR_MESSAGE, RESULT_SCROLL_OFFSET, SearchController,
};
pub use use_cases::search_medical_info::{
    SERVICE_ERROR_MESSAGE, SearchMedicalInfoUseCase, ServiceError, normalize_response,
};
