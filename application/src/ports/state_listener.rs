//! State listener port
//!
//! Lets the presentation layer follow the search lifecycle driven by
//! [`SearchController`](crate::use_cases::search_controller::SearchController).

use medinfo_domain::AppState;

/// Callback for application state changes
///
/// Implementations live in the presentation layer (spinner, result card,
/// error panel).
pub trait StateListener: Send + Sync {
    /// Called after every state transition with the new state
    fn on_transition(&self, state: &AppState);

    /// Called after a successful search: bring the result area into view
    fn on_scroll_to_result(&self, _offset: u16) {}
}

/// No-op listener for when nothing follows the state
pub struct NoStateListener;

impl StateListener for NoStateListener {
    fn on_transition(&self, _state: &AppState) {}
}
