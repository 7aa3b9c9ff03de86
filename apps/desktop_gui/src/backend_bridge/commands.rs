//! Backend commands queued from UI to backend worker.

use client_core::Ticket;
use shared::protocol::PreferenceRequest;

pub enum BackendCommand {
    Recommend {
        ticket: Ticket,
        request: PreferenceRequest,
    },
}
