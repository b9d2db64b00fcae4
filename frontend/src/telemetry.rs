//! Structured observability hook for phase transitions.
//!
//! The state machines report every transition as a [`PhaseTransition`]
//! through a [`TransitionObserver`]. In the browser the observer writes one
//! console line per event; tests plug in [`RecordingObserver`].

#[cfg(test)]
use std::cell::RefCell;
use std::fmt;

use chrono::{DateTime, Utc};
use common::model::resource::ResourceKind;

/// Which machine a transition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionScope {
    List,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTransition {
    pub kind: ResourceKind,
    pub scope: TransitionScope,
    pub from: &'static str,
    pub to: &'static str,
    pub at: DateTime<Utc>,
}

impl PhaseTransition {
    pub fn now(kind: ResourceKind, scope: TransitionScope, from: &'static str, to: &'static str) -> Self {
        Self {
            kind,
            scope,
            from,
            to,
            at: Utc::now(),
        }
    }
}

impl fmt::Display for PhaseTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = match self.scope {
            TransitionScope::List => "list",
            TransitionScope::Edit => "edit",
        };
        write!(
            f,
            "event=phase_transition kind={} scope={} from={} to={} at={}",
            self.kind,
            scope,
            self.from,
            self.to,
            self.at.to_rfc3339()
        )
    }
}

pub trait TransitionObserver {
    fn record(&self, event: &PhaseTransition);
}

/// Writes transitions to the browser console.
pub struct ConsoleObserver;

impl TransitionObserver for ConsoleObserver {
    fn record(&self, event: &PhaseTransition) {
        gloo_console::debug!(event.to_string());
    }
}

/// Keeps every transition in memory.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<PhaseTransition>>,
}

#[cfg(test)]
impl RecordingObserver {
    /// `(from, to)` pairs for the given scope, in emission order.
    pub fn path(&self, scope: TransitionScope) -> Vec<(&'static str, &'static str)> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.scope == scope)
            .map(|e| (e.from, e.to))
            .collect()
    }
}

#[cfg(test)]
impl TransitionObserver for RecordingObserver {
    fn record(&self, event: &PhaseTransition) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_a_single_key_value_line() {
        let event = PhaseTransition::now(ResourceKind::Workout, TransitionScope::List, "loading", "ready");
        let line = event.to_string();
        assert!(line.starts_with("event=phase_transition kind=workouts scope=list from=loading to=ready at="));
        assert!(!line.contains('\n'));
    }
}
