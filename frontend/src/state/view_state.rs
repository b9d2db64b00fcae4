//! Single-shot fetch-and-settle state machine for one resource list.
//!
//! ```text
//! Loading --settle(Ok)--> Ready
//! Loading --settle(Err)--> Failed
//! any --start--> Loading   (new generation)
//! ```
//!
//! Each `start` hands out a [`FetchTicket`]. Only the ticket of the latest
//! generation can settle the state, and only once, so a response that
//! arrives for an abandoned fetch never overwrites a newer one.

use std::rc::Rc;

use common::model::record::Record;
use common::model::resource::ResourceKind;

use crate::error::FetchError;
use crate::telemetry::{PhaseTransition, TransitionObserver, TransitionScope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Loading => "loading",
            Phase::Ready => "ready",
            Phase::Failed => "failed",
        }
    }
}

/// Identifies one fetch attempt of one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    kind: ResourceKind,
    generation: u64,
}

/// Result of offering a terminal event to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// The ticket was superseded or already settled; nothing changed.
    Stale,
}

pub struct ViewState {
    kind: ResourceKind,
    phase: Phase,
    records: Vec<Record>,
    error_message: Option<String>,
    generation: u64,
    observer: Rc<dyn TransitionObserver>,
}

impl ViewState {
    pub fn new(kind: ResourceKind, observer: Rc<dyn TransitionObserver>) -> Self {
        Self {
            kind,
            phase: Phase::Loading,
            records: Vec::new(),
            error_message: None,
            generation: 0,
            observer,
        }
    }

    /// Resets to `Loading` and opens a new fetch attempt.
    ///
    /// Records and error are dropped before the ticket is issued so a stale
    /// `Ready` list can never be shown next to a fresh error.
    pub fn start(&mut self) -> FetchTicket {
        self.generation += 1;
        self.records.clear();
        self.error_message = None;
        self.transition(Phase::Loading);
        FetchTicket {
            kind: self.kind,
            generation: self.generation,
        }
    }

    /// Applies the terminal event of the attempt identified by `ticket`.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<Record>, FetchError>,
    ) -> Settlement {
        if ticket.kind != self.kind
            || ticket.generation != self.generation
            || self.phase != Phase::Loading
        {
            return Settlement::Stale;
        }

        match outcome {
            Ok(records) => {
                self.records = records;
                self.transition(Phase::Ready);
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
                self.transition(Phase::Failed);
            }
        }
        Settlement::Applied
    }

    fn transition(&mut self, to: Phase) {
        let from = self.phase;
        self.phase = to;
        if from != to {
            self.observer.record(&PhaseTransition::now(
                self.kind,
                TransitionScope::List,
                from.label(),
                to.label(),
            ));
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::RecordingObserver;
    use serde_json::json;

    fn users(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(json!({"id": i.to_string(), "name": format!("user {i}")})))
            .collect()
    }

    fn view(kind: ResourceKind) -> (ViewState, Rc<RecordingObserver>) {
        let observer = Rc::new(RecordingObserver::default());
        (ViewState::new(kind, observer.clone()), observer)
    }

    #[test]
    fn starts_loading_with_nothing_to_show() {
        let (state, _) = view(ResourceKind::Activity);
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.records().is_empty());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn success_settles_ready_with_all_records() {
        let (mut state, observer) = view(ResourceKind::User);
        let ticket = state.start();
        assert_eq!(state.settle(ticket, Ok(users(3))), Settlement::Applied);
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.records().len(), 3);
        assert_eq!(state.error_message(), None);
        assert_eq!(observer.path(TransitionScope::List), vec![("loading", "ready")]);
    }

    #[test]
    fn empty_collection_is_ready_not_failed() {
        let (mut state, _) = view(ResourceKind::Team);
        let ticket = state.start();
        state.settle(ticket, Ok(Vec::new()));
        assert!(state.is_ready());
        assert!(state.records().is_empty());
    }

    #[test]
    fn http_failure_keeps_status_in_message() {
        let (mut state, _) = view(ResourceKind::Workout);
        let ticket = state.start();
        state.settle(ticket, Err(FetchError::HttpStatus(404)));
        assert_eq!(state.phase(), Phase::Failed);
        assert!(state.records().is_empty());
        assert!(state.error_message().unwrap().contains("404"));
    }

    #[test]
    fn transport_failure_surfaces_its_message() {
        let (mut state, _) = view(ResourceKind::Workout);
        let ticket = state.start();
        state.settle(ticket, Err(FetchError::Transport("Failed to fetch".into())));
        assert_eq!(state.error_message(), Some("Failed to fetch"));
    }

    #[test]
    fn restart_clears_previous_outcome_before_settling() {
        let (mut state, observer) = view(ResourceKind::User);
        let first = state.start();
        state.settle(first, Ok(users(2)));

        let second = state.start();
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.records().is_empty());

        state.settle(second, Err(FetchError::HttpStatus(500)));
        assert!(state.records().is_empty());
        assert_eq!(
            observer.path(TransitionScope::List),
            vec![("loading", "ready"), ("ready", "loading"), ("loading", "failed")]
        );
    }

    #[test]
    fn superseded_ticket_is_discarded() {
        let (mut state, _) = view(ResourceKind::User);
        let stale = state.start();
        let current = state.start();

        assert_eq!(state.settle(stale, Ok(users(5))), Settlement::Stale);
        assert_eq!(state.phase(), Phase::Loading);

        assert_eq!(state.settle(current, Ok(users(1))), Settlement::Applied);
        assert_eq!(state.records().len(), 1);
    }

    #[test]
    fn settles_at_most_once_per_attempt() {
        let (mut state, _) = view(ResourceKind::User);
        let ticket = state.start();
        state.settle(ticket, Ok(users(1)));
        assert_eq!(
            state.settle(ticket, Err(FetchError::HttpStatus(500))),
            Settlement::Stale
        );
        assert!(state.is_ready());
    }

    #[test]
    fn ticket_of_another_view_is_discarded() {
        let (mut users_view, _) = view(ResourceKind::User);
        let (mut teams_view, _) = view(ResourceKind::Team);
        let _ = users_view.start();
        let teams_ticket = teams_view.start();
        assert_eq!(users_view.settle(teams_ticket, Ok(users(1))), Settlement::Stale);
    }

    #[test]
    fn restarting_against_unchanged_data_is_idempotent() {
        let (mut state, _) = view(ResourceKind::LeaderboardEntry);
        let ticket = state.start();
        state.settle(ticket, Ok(users(4)));
        let first = (state.phase(), state.records().to_vec());

        let ticket = state.start();
        state.settle(ticket, Ok(users(4)));
        assert_eq!((state.phase(), state.records().to_vec()), first);
    }
}
