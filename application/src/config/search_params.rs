//! Search parameters: request shaping for the search use case.
//!
//! [`SearchParams`] groups the static parameters used by
//! [`SearchMedicalInfoUseCase`](crate::use_cases::search_medical_info::SearchMedicalInfoUseCase)
//! when it builds a request. These are application-layer concerns, not
//! domain policy.

use medinfo_domain::Model;
use serde::{Deserialize, Serialize};

/// Parameters applied to every search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Model the request is sent to.
    pub model: Model,
    /// Let the provider consult web search and attach citations.
    pub web_search: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            web_search: true,
        }
    }
}

impl SearchParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn without_web_search(mut self) -> Self {
        self.web_search = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_web_search() {
        let params = SearchParams::default();
        assert!(params.web_search);
        assert_eq!(params.model, Model::Gemini3FlashPreview);
    }

    #[test]
    fn test_builders() {
        let params = SearchParams::default()
            .with_model(Model::Gemini25Pro)
            .without_web_search();
        assert_eq!(params.model, Model::Gemini25Pro);
        assert!(!params.web_search);
    }
}
