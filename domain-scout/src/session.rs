//! Per-run research session state
//!
//! The session is the explicit context threaded through the pipeline: the
//! request that started it, the candidates phase 1 produced, and the names
//! the user kept at the selection gate. It replaces any process-wide mutable
//! state; "start over" discards it and issues a fresh id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pipeline::types::{CandidateName, ResearchRequest};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchSession {
    pub id: Uuid,
    pub request: ResearchRequest,
    /// Filled after phase 1
    pub candidates: Vec<CandidateName>,
    /// Filled after the selection gate; empty until the user has chosen
    pub selected: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ResearchSession {
    pub fn new(request: ResearchRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            request,
            candidates: Vec::new(),
            selected: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn record_candidates(&mut self, candidates: Vec<CandidateName>) {
        self.candidates = candidates;
    }

    /// Store a gate-approved selection. Callers must validate first via
    /// [`crate::pipeline::selection::validate_selection`].
    pub fn record_selection(&mut self, selected: Vec<String>) {
        self.selected = selected;
    }

    /// Discard generated state and begin a fresh session for the same request
    pub fn start_over(&mut self) {
        self.id = Uuid::new_v4();
        self.candidates.clear();
        self.selected.clear();
        self.created_at = Utc::now();
    }
}
