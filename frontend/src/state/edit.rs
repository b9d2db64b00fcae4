//! Inline edit sub-flow for user records.
//!
//! ```text
//! Closed --begin_edit--> Editing --submit--> Validating --valid--> Saving --ok--> Closed (+ list refetch)
//!                           ^                    |                   |
//!                           +------invalid-------+                   +--err--> Failed --submit--> Validating
//! Editing | Failed --cancel--> Closed
//! ```
//!
//! `Validating` is left within the same `submit` call, so it is only ever
//! visible to the transition observer. The draft survives every failure.

use std::rc::Rc;

use common::model::record::Record;
use common::model::resource::ResourceKind;
use common::requests::UserUpdate;
use common::validation::{is_valid_email, INVALID_EMAIL_MESSAGE};

use crate::error::{EditRejected, SaveError};
use crate::telemetry::{PhaseTransition, TransitionObserver, TransitionScope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Closed,
    Editing,
    Validating,
    Saving,
    Failed,
}

impl EditMode {
    pub fn label(self) -> &'static str {
        match self {
            EditMode::Closed => "closed",
            EditMode::Editing => "editing",
            EditMode::Validating => "validating",
            EditMode::Saving => "saving",
            EditMode::Failed => "failed",
        }
    }
}

/// In-progress, unsaved copy of the edited user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub team_id: Option<String>,
}

impl Draft {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.text("name").unwrap_or_default(),
            email: record.text("email").unwrap_or_default(),
            team_id: record.text("team_id"),
        }
    }

    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            name: self.name.clone(),
            email: self.email.clone(),
            team_id: self.team_id.clone().filter(|id| !id.is_empty()),
        }
    }
}

/// A single-field change coming from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Name(String),
    Email(String),
    Team(Option<String>),
}

/// The partial update to send once the draft passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub user_id: String,
    pub payload: UserUpdate,
}

/// What the caller must do after a save response was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The save succeeded and the form closed; the list must be fetched again.
    Refetch,
    /// The save failed; the form stays open with the draft intact.
    Retained,
    /// No save was in flight.
    Ignored,
}

pub struct EditFlow {
    mode: EditMode,
    target: Option<Record>,
    draft: Option<Draft>,
    error_message: Option<String>,
    observer: Rc<dyn TransitionObserver>,
}

impl EditFlow {
    pub fn new(observer: Rc<dyn TransitionObserver>) -> Self {
        Self {
            mode: EditMode::Closed,
            target: None,
            draft: None,
            error_message: None,
            observer,
        }
    }

    /// Snapshots `record` into a fresh draft. Only offered on a loaded list.
    pub fn begin_edit(&mut self, list_ready: bool, record: &Record) -> Result<(), EditRejected> {
        if self.mode == EditMode::Saving {
            return Err(EditRejected::SaveInProgress);
        }
        if !list_ready {
            return Err(EditRejected::ListNotReady);
        }
        if record.id().is_none() {
            return Err(EditRejected::MissingId);
        }

        self.target = Some(record.clone());
        self.draft = Some(Draft::from_record(record));
        self.error_message = None;
        self.transition(EditMode::Editing);
        Ok(())
    }

    pub fn update_field(&mut self, field: DraftField) -> Result<(), EditRejected> {
        self.ensure_editable()?;
        let draft = self.draft.get_or_insert_with(Draft::default);
        match field {
            DraftField::Name(name) => draft.name = name,
            DraftField::Email(email) => draft.email = email,
            DraftField::Team(team_id) => draft.team_id = team_id.filter(|id| !id.is_empty()),
        }
        Ok(())
    }

    /// Validates the draft and, when it passes, moves to `Saving` and
    /// returns the request to issue. An invalid draft returns `Ok(None)`
    /// with the validation message set and no request.
    pub fn submit(&mut self) -> Result<Option<SaveRequest>, EditRejected> {
        self.ensure_editable()?;
        let (Some(draft), Some(user_id)) = (
            self.draft.as_ref(),
            self.target.as_ref().and_then(Record::id),
        ) else {
            return Err(EditRejected::NotEditing);
        };
        let payload = draft.to_update();

        self.error_message = None;
        self.transition(EditMode::Validating);

        if !is_valid_email(&payload.email) {
            self.error_message = Some(INVALID_EMAIL_MESSAGE.to_string());
            self.transition(EditMode::Editing);
            return Ok(None);
        }

        self.transition(EditMode::Saving);
        Ok(Some(SaveRequest { user_id, payload }))
    }

    /// Applies the response of the in-flight save.
    pub fn settle_save(&mut self, result: Result<(), SaveError>) -> SaveOutcome {
        if self.mode != EditMode::Saving {
            return SaveOutcome::Ignored;
        }
        match result {
            Ok(()) => {
                self.clear();
                self.transition(EditMode::Closed);
                SaveOutcome::Refetch
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
                self.transition(EditMode::Failed);
                SaveOutcome::Retained
            }
        }
    }

    pub fn cancel(&mut self) -> Result<(), EditRejected> {
        self.ensure_editable()?;
        self.clear();
        self.transition(EditMode::Closed);
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), EditRejected> {
        match self.mode {
            EditMode::Editing | EditMode::Failed => Ok(()),
            EditMode::Saving | EditMode::Validating => Err(EditRejected::SaveInProgress),
            EditMode::Closed => Err(EditRejected::NotEditing),
        }
    }

    fn clear(&mut self) {
        self.target = None;
        self.draft = None;
        self.error_message = None;
    }

    fn transition(&mut self, to: EditMode) {
        let from = self.mode;
        self.mode = to;
        if from != to {
            self.observer.record(&PhaseTransition::now(
                ResourceKind::User,
                TransitionScope::Edit,
                from.label(),
                to.label(),
            ));
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditMode::Closed
    }

    pub fn is_saving(&self) -> bool {
        self.mode == EditMode::Saving
    }

    pub fn target(&self) -> Option<&Record> {
        self.target.as_ref()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
