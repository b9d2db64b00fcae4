//! Per-view engine combining the list machine, the edit sub-flow and the
//! team options.
//!
//! The controller performs no IO. Every operation that needs the network
//! returns [`Command`]s which the component executes, feeding the results
//! back through the `*_settled` / `*_loaded` operations.

use std::rc::Rc;

use common::model::record::Record;
use common::model::resource::ResourceKind;
use common::model::team::TeamOption;
use common::requests::UserUpdate;

use crate::config::ApiConfig;
use crate::error::{EditRejected, FetchError, SaveError};
use crate::state::edit::{DraftField, EditFlow, SaveOutcome};
use crate::state::view_state::{FetchTicket, Settlement, ViewState};
use crate::telemetry::TransitionObserver;

/// A side effect requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchList { ticket: FetchTicket, url: String },
    FetchTeams { url: String },
    SaveUser { url: String, payload: UserUpdate },
}

pub struct ResourceController {
    config: ApiConfig,
    list: ViewState,
    edit: Option<EditFlow>,
    team_options: Vec<TeamOption>,
}

impl ResourceController {
    pub fn new(kind: ResourceKind, config: ApiConfig, observer: Rc<dyn TransitionObserver>) -> Self {
        let edit = kind.is_editable().then(|| EditFlow::new(observer.clone()));
        Self {
            config,
            list: ViewState::new(kind, observer),
            edit,
            team_options: Vec::new(),
        }
    }

    /// Initial fetches of a freshly mounted view: the list, plus the team
    /// options when the view is editable.
    pub fn mount(&mut self) -> Vec<Command> {
        let mut commands = vec![self.refresh()];
        if self.edit.is_some() {
            commands.push(Command::FetchTeams {
                url: self.config.collection_url(ResourceKind::Team),
            });
        }
        commands
    }

    /// Restarts the list machine and requests a fresh read.
    pub fn refresh(&mut self) -> Command {
        let ticket = self.list.start();
        Command::FetchList {
            ticket,
            url: self.config.collection_url(self.list.kind()),
        }
    }

    pub fn list_settled(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<Record>, FetchError>,
    ) -> Settlement {
        self.list.settle(ticket, outcome)
    }

    /// Stores the team options. A failure leaves them empty and is handed
    /// back to the caller for logging only.
    pub fn teams_loaded(&mut self, outcome: Result<Vec<Record>, FetchError>) -> Result<(), FetchError> {
        match outcome {
            Ok(records) => {
                self.team_options = TeamOption::from_records(&records);
                Ok(())
            }
            Err(err) => {
                self.team_options.clear();
                Err(err)
            }
        }
    }

    pub fn begin_edit(&mut self, record: &Record) -> Result<(), EditRejected> {
        let ready = self.list.is_ready();
        self.edit_flow()?.begin_edit(ready, record)
    }

    pub fn edit_field(&mut self, field: DraftField) -> Result<(), EditRejected> {
        self.edit_flow()?.update_field(field)
    }

    /// Validates and, when valid, requests the partial update. An invalid
    /// draft yields no command.
    pub fn submit(&mut self) -> Result<Vec<Command>, EditRejected> {
        let request = self.edit_flow()?.submit()?;
        Ok(request
            .map(|request| Command::SaveUser {
                url: self.config.user_url(&request.user_id),
                payload: request.payload,
            })
            .into_iter()
            .collect())
    }

    /// Applies the save response. Success closes the form and restarts the
    /// list from the server rather than patching the cached record.
    pub fn save_settled(&mut self, result: Result<(), SaveError>) -> Vec<Command> {
        let outcome = match self.edit.as_mut() {
            Some(edit) => edit.settle_save(result),
            None => SaveOutcome::Ignored,
        };
        match outcome {
            SaveOutcome::Refetch => vec![self.refresh()],
            SaveOutcome::Retained | SaveOutcome::Ignored => Vec::new(),
        }
    }

    pub fn cancel_edit(&mut self) -> Result<(), EditRejected> {
        self.edit_flow()?.cancel()
    }

    fn edit_flow(&mut self) -> Result<&mut EditFlow, EditRejected> {
        self.edit.as_mut().ok_or(EditRejected::NotEditable)
    }

    pub fn kind(&self) -> ResourceKind {
        self.list.kind()
    }

    pub fn list(&self) -> &ViewState {
        &self.list
    }

    pub fn edit(&self) -> Option<&EditFlow> {
        self.edit.as_ref()
    }

    pub fn team_options(&self) -> &[TeamOption] {
        &self.team_options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::edit::EditMode;
    use crate::state::view_state::Phase;
    use crate::telemetry::RecordingObserver;
    use serde_json::json;

    fn controller(kind: ResourceKind) -> ResourceController {
        ResourceController::new(
            kind,
            ApiConfig::new("http://api.test"),
            Rc::new(RecordingObserver::default()),
        )
    }

    fn user_seven() -> Record {
        Record::new(json!({"id": 7, "name": "A", "email": "a@b.com", "team_id": null}))
    }

    fn list_ticket(commands: &[Command]) -> FetchTicket {
        commands
            .iter()
            .find_map(|c| match c {
                Command::FetchList { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .expect("list fetch")
    }

    /// Mounted users view with one loaded record.
    fn loaded_users() -> ResourceController {
        let mut c = controller(ResourceKind::User);
        let commands = c.mount();
        c.list_settled(list_ticket(&commands), Ok(vec![user_seven()]));
        c
    }

    fn fetch_count(commands: &[Command]) -> usize {
        commands.iter().filter(|c| matches!(c, Command::FetchList { .. })).count()
    }

    #[test]
    fn users_mount_fetches_list_and_teams() {
        let mut c = controller(ResourceKind::User);
        let commands = c.mount();
        assert_eq!(commands.len(), 2);
        assert!(matches!(&commands[0], Command::FetchList { url, .. } if url == "http://api.test/api/users/"));
        assert_eq!(commands[1], Command::FetchTeams { url: "http://api.test/api/teams/".into() });
        assert_eq!(c.list().phase(), Phase::Loading);
    }

    #[test]
    fn read_only_kinds_fetch_only_their_list() {
        for kind in [ResourceKind::Activity, ResourceKind::Team, ResourceKind::LeaderboardEntry, ResourceKind::Workout] {
            let mut c = controller(kind);
            let commands = c.mount();
            assert_eq!(commands.len(), 1, "{kind}");
            assert!(c.edit().is_none());
            assert_eq!(c.begin_edit(&user_seven()), Err(EditRejected::NotEditable));
        }
    }

    #[test]
    fn team_failure_is_swallowed_into_empty_options() {
        let mut c = controller(ResourceKind::User);
        c.mount();
        assert!(c.teams_loaded(Err(FetchError::HttpStatus(500))).is_err());
        assert!(c.team_options().is_empty());
        assert_eq!(c.list().phase(), Phase::Loading);
    }

    #[test]
    fn team_options_are_projected() {
        let mut c = controller(ResourceKind::User);
        c.mount();
        c.teams_loaded(Ok(vec![Record::new(json!({"id": "1", "name": "Team DC", "member_count": 6}))]))
            .unwrap();
        assert_eq!(c.team_options(), &[TeamOption { id: "1".into(), name: "Team DC".into() }]);
    }

    #[test]
    fn editing_is_not_offered_before_the_list_loads() {
        let mut c = controller(ResourceKind::User);
        c.mount();
        assert_eq!(c.begin_edit(&user_seven()), Err(EditRejected::ListNotReady));

        let mut failed = controller(ResourceKind::User);
        let commands = failed.mount();
        failed.list_settled(list_ticket(&commands), Err(FetchError::HttpStatus(502)));
        assert_eq!(failed.begin_edit(&user_seven()), Err(EditRejected::ListNotReady));
    }

    #[test]
    fn valid_email_submits_a_patch() {
        let mut c = loaded_users();
        c.begin_edit(&user_seven()).unwrap();
        let commands = c.submit().unwrap();
        assert_eq!(
            commands,
            vec![Command::SaveUser {
                url: "http://api.test/api/users/7/".into(),
                payload: UserUpdate { name: "A".into(), email: "a@b.com".into(), team_id: None },
            }]
        );
        assert_eq!(c.edit().unwrap().mode(), EditMode::Saving);
    }

    #[test]
    fn invalid_email_issues_no_request() {
        let mut c = loaded_users();
        c.begin_edit(&user_seven()).unwrap();
        c.edit_field(DraftField::Email("not-an-email".into())).unwrap();
        assert_eq!(c.submit().unwrap(), Vec::new());
        let edit = c.edit().unwrap();
        assert_eq!(edit.mode(), EditMode::Editing);
        assert_eq!(edit.error_message(), Some("Please enter a valid email address"));
    }

    #[test]
    fn save_success_closes_and_refetches_exactly_once() {
        let mut c = loaded_users();
        c.begin_edit(&user_seven()).unwrap();
        c.edit_field(DraftField::Email("a@b.org".into())).unwrap();
        let save = c.submit().unwrap();
        assert!(matches!(&save[..], [Command::SaveUser { payload, .. }] if payload.email == "a@b.org"));

        let after = c.save_settled(Ok(()));
        assert_eq!(fetch_count(&after), 1);
        assert_eq!(after.len(), 1);
        assert_eq!(c.edit().unwrap().mode(), EditMode::Closed);
        assert_eq!(c.list().phase(), Phase::Loading);

        let updated = Record::new(json!({"id": 7, "name": "A", "email": "a@b.org", "team_id": null}));
        c.list_settled(list_ticket(&after), Ok(vec![updated.clone()]));
        assert_eq!(c.list().records(), &[updated]);
    }

    #[test]
    fn save_conflict_keeps_form_open_without_refetch() {
        let mut c = loaded_users();
        c.begin_edit(&user_seven()).unwrap();
        c.edit_field(DraftField::Email("a@b.org".into())).unwrap();
        c.submit().unwrap();

        let after = c.save_settled(Err(SaveError::Conflict));
        assert!(after.is_empty());
        let edit = c.edit().unwrap();
        assert_eq!(edit.mode(), EditMode::Failed);
        assert_eq!(edit.error_message(), Some("This email is already in use"));
        assert_eq!(edit.draft().unwrap().email, "a@b.org");
        assert!(c.list().is_ready());
    }

    #[test]
    fn cancel_before_submit_leaves_list_untouched() {
        let mut c = loaded_users();
        c.begin_edit(&user_seven()).unwrap();
        c.cancel_edit().unwrap();
        assert_eq!(c.edit().unwrap().mode(), EditMode::Closed);
        assert!(c.list().is_ready());
        assert_eq!(c.list().records(), &[user_seven()]);
    }

    #[test]
    fn stale_list_response_after_refetch_is_dropped() {
        let mut c = loaded_users();
        let first = c.refresh();
        let second = c.refresh();
        let (Command::FetchList { ticket: old, .. }, Command::FetchList { ticket: new, .. }) = (first, second) else {
            panic!("refresh must fetch the list");
        };
        assert_eq!(c.list_settled(old, Ok(vec![])), Settlement::Stale);
        assert_eq!(c.list_settled(new, Ok(vec![user_seven()])), Settlement::Applied);
        assert_eq!(c.list().records().len(), 1);
    }
}
