//! Search Medical Info use case.
//!
//! Wraps a single grounded request to the LLM provider and normalizes the
//! answer into a [`SearchResult`]:
//!
//! 1. Missing text becomes the [`NO_INFORMATION_FOUND`] placeholder (not an error)
//! 2. Citations lacking a link or a label are dropped
//! 3. Citations are deduplicated by link, first occurrence wins
//! 4. The result is stamped with the local time
//!
//! Every gateway failure is logged with its cause and re-raised as the one
//! user-safe [`ServiceError`].

use crate::config::SearchParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GroundedRequest, GroundedResponse, LlmGateway};
use medinfo_domain::{
    GroundingSource, NO_INFORMATION_FOUND, PromptTemplate, Query, SearchResult, dedup_sources,
    truncate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Message shown to the user for any provider failure.
pub const SERVICE_ERROR_MESSAGE: &str = "เกิดข้อผิดพลาดในการดึงข้อมูล กรุณาลองใหม่อีกครั้ง";

/// The only failure a search can report to its caller.
///
/// Deliberately carries no cause: provider detail goes to the logs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("เกิดข้อผิดพลาดในการดึงข้อมูล กรุณาลองใหม่อีกครั้ง")]
pub struct ServiceError;

/// Use case for fetching medical information for one query.
///
/// Stateless between calls; safe to share behind an `Arc`.
pub struct SearchMedicalInfoUseCase {
    gateway: Arc<dyn LlmGateway>,
    params: SearchParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SearchMedicalInfoUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: SearchParams) -> Self {
        Self {
            gateway,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Build the outbound request for a query
    pub fn build_request(&self, query: &Query) -> GroundedRequest {
        GroundedRequest {
            model: self.params.model.clone(),
            prompt: PromptTemplate::user_prompt(query.as_str()),
            system_instruction: PromptTemplate::system_instruction(),
            web_search: self.params.web_search,
        }
    }

    /// Fetch and normalize the answer for a query
    pub async fn fetch_result(&self, query: &Query) -> Result<SearchResult, ServiceError> {
        info!(model = %self.params.model, "Searching: {}", truncate(query.as_str(), 100));

        let request = self.build_request(query);
        self.conversation_logger.log(ConversationEvent::new(
            "search_request",
            serde_json::json!({
                "model": self.params.model.as_str(),
                "query": query.as_str(),
                "web_search": request.web_search,
            }),
        ));

        let response = match self.gateway.generate(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, model = %self.params.model, "Search request failed");
                self.conversation_logger.log(ConversationEvent::new(
                    "search_failed",
                    serde_json::json!({
                        "query": query.as_str(),
                        "cause": e.to_string(),
                    }),
                ));
                return Err(ServiceError);
            }
        };

        let result = normalize_response(response, local_timestamp());

        debug!(
            bytes = result.content.len(),
            sources = result.sources.len(),
            "Search result normalized"
        );
        self.conversation_logger.log(ConversationEvent::new(
            "search_result",
            serde_json::json!({
                "query": query.as_str(),
                "bytes": result.content.len(),
                "sources": result.sources.len(),
            }),
        ));

        Ok(result)
    }
}

/// Normalize a raw provider answer into a [`SearchResult`].
pub fn normalize_response(response: GroundedResponse, timestamp: String) -> SearchResult {
    let content = response
        .text
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_INFORMATION_FOUND.to_string());

    let sources = dedup_sources(response.citations.iter().filter_map(|citation| {
        GroundingSource::from_parts(citation.title.as_deref(), citation.uri.as_deref())
    }));

    SearchResult::new(content, sources, timestamp)
}

fn local_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
