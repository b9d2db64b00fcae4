use common::model::record::Record;

use crate::error::{FetchError, SaveError};
use crate::state::edit::DraftField;
use crate::state::view_state::FetchTicket;

#[derive(Clone)]
pub enum Msg {
    ListSettled(FetchTicket, Result<Vec<Record>, FetchError>),
    TeamsLoaded(Result<Vec<Record>, FetchError>),
    BeginEdit(Record),
    EditField(DraftField),
    Submit,
    SaveSettled(Result<(), SaveError>),
    CancelEdit,
}
