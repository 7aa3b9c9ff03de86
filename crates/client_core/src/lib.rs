use tracing::info;

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod render;
pub mod selection;
pub mod session;

pub use client::{HttpRecommender, RecommenderApi};
pub use config::{load_settings, ClientSettings};
pub use error::RecommendError;
pub use form::PreferenceForm;
pub use render::{ResultCard, ResultsGrid};
pub use selection::SelectionState;
pub use session::{Completion, Page, ResultsPhase, Session, Submission, Ticket};

/// One full round trip: snapshot the form, call the recommender, apply the reply.
pub async fn submit(session: &mut Session, api: &dyn RecommenderApi) -> Completion {
    let Submission { ticket, request } = session.begin_submission();
    let outcome = api.recommend(&request).await;
    let completion = session.complete(ticket, outcome);
    info!(ticket = ticket.0, ?completion, "submission finished");
    completion
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
