//! Page-level view state: which panel is shown and what the results panel holds.

use shared::protocol::{PreferenceRequest, RecommendationResponse};
use tracing::{info, warn};

use crate::{
    error::RecommendError,
    form::PreferenceForm,
    render::ResultsGrid,
    selection::SelectionState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Welcome,
    Preferences,
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsPhase {
    Loading,
    Loaded(ResultsGrid),
    Empty,
}

/// Identifies one submission. Later submissions carry larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: PreferenceRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Loaded { count: usize },
    Empty,
    Failed,
    /// A newer submission exists; nothing changed.
    Stale,
}

pub fn failure_notice(server_url: &str, err: &RecommendError) -> String {
    format!(
        "Error connecting to the recommendation server at {server_url}.\n\
         Please make sure the server is running.\n\n\
         To start the server:\n\
         1. Open SWI-Prolog\n\
         2. Load server.pl\n\
         3. Run: ?- server.\n\n\
         Details: {err}"
    )
}

#[derive(Debug)]
pub struct Session {
    pub selection: SelectionState,
    pub form: PreferenceForm,
    server_url: String,
    page: Page,
    results: ResultsPhase,
    latest: Option<Ticket>,
    next_ticket: u64,
    notice: Option<String>,
}

impl Session {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            selection: SelectionState::new(),
            form: PreferenceForm::default(),
            server_url: server_url.into(),
            page: Page::Preferences,
            results: ResultsPhase::Empty,
            latest: None,
            next_ticket: 1,
            notice: None,
        }
    }

    /// Starts on the welcome panel instead of the preference form.
    pub fn with_welcome(server_url: impl Into<String>) -> Self {
        let mut session = Self::new(server_url);
        session.page = Page::Welcome;
        session
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn results(&self) -> &ResultsPhase {
        &self.results
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn is_loading(&self) -> bool {
        self.page == Page::Results && self.results == ResultsPhase::Loading
    }

    pub fn latest_ticket(&self) -> Option<Ticket> {
        self.latest
    }

    pub fn go_to_welcome(&mut self) {
        self.page = Page::Welcome;
    }

    pub fn go_to_preferences(&mut self) {
        self.page = Page::Preferences;
    }

    /// Snapshots the form and moves to the loading results panel.
    ///
    /// Allowed from any page. Any earlier submission still in flight becomes
    /// stale.
    pub fn begin_submission(&mut self) -> Submission {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.latest = Some(ticket);

        let request = self.form.build_request(&self.selection);
        self.page = Page::Results;
        self.results = ResultsPhase::Loading;
        info!(ticket = ticket.0, "submitting preferences");
        Submission { ticket, request }
    }

    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<RecommendationResponse, RecommendError>,
    ) -> Completion {
        if self.latest != Some(ticket) {
            info!(ticket = ticket.0, latest = ?self.latest.map(|t| t.0), "dropping stale reply");
            return Completion::Stale;
        }
        self.latest = None;

        match outcome {
            Ok(response) if response.success && !response.recommendations.is_empty() => {
                let mut grid = ResultsGrid::new();
                grid.render(&response.recommendations);
                let count = grid.len();
                self.results = ResultsPhase::Loaded(grid);
                Completion::Loaded { count }
            }
            Ok(response) => {
                info!(
                    ticket = ticket.0,
                    success = response.success,
                    "no matching dishes"
                );
                self.results = ResultsPhase::Empty;
                Completion::Empty
            }
            Err(err) => {
                warn!(ticket = ticket.0, "error fetching recommendations: {err}");
                self.results = ResultsPhase::Empty;
                self.page = Page::Preferences;
                // At most one notice is pending: a newer failure replaces one
                // that was never taken. Front ends take it after each completion.
                self.notice = Some(failure_notice(&self.server_url, &err));
                Completion::Failed
            }
        }
    }

    /// Blocking notice raised by the last failed submission, handed out once.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn pending_notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
