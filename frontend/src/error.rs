//! Failure taxonomy of the client.
//!
//! Fetch-phase failures terminate a list view in `Failed`; save-phase
//! failures keep the edit form open. Both render as a single user-facing
//! message through `Display`.

use thiserror::Error;

/// Why a collection fetch did not produce records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No response reached the client.
    #[error("{0}")]
    Transport(String),

    /// A response arrived with a status outside 200-299.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// The body of a successful response was not JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Why a user update was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    /// The server rejected the email as a duplicate.
    #[error("This email is already in use")]
    Conflict,

    /// Any other non-success status.
    #[error("Failed to update user")]
    Rejected(u16),

    /// No response reached the client.
    #[error("{0}")]
    Transport(String),
}

/// An edit operation invoked in a mode that does not allow it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditRejected {
    #[error("records of this kind cannot be edited")]
    NotEditable,

    #[error("the list is not loaded")]
    ListNotReady,

    #[error("the record has no id")]
    MissingId,

    #[error("no edit is in progress")]
    NotEditing,

    #[error("a save is in progress")]
    SaveInProgress,
}
