//! Backend events delivered to the UI thread.

use client_core::{RecommendError, Ticket};
use shared::protocol::RecommendationResponse;

pub enum UiEvent {
    Info(String),
    WorkerFailed(String),
    RecommendationsFinished {
        ticket: Ticket,
        outcome: Result<RecommendationResponse, RecommendError>,
    },
}

/// Short status-bar hint for a failed submission.
pub fn classify_failure(err: &RecommendError) -> String {
    match err {
        RecommendError::Transport(_) => {
            "Recommendation server unreachable; check that it is running and retry.".to_string()
        }
        RecommendError::Status { status } => {
            format!("Recommendation server returned HTTP {status}.")
        }
        RecommendError::Decode(_) => {
            "Recommendation server sent a reply that could not be read.".to_string()
        }
        RecommendError::InvalidServerUrl { url, .. } => {
            format!("Configured server url '{url}' is invalid.")
        }
    }
}
