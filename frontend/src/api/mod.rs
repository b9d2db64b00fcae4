//! HTTP calls to the OctoFit API.
//!
//! Each call issues exactly one request: no retry, no timeout, no
//! cancellation. Results are handed to the caller as typed errors; nothing
//! here touches view state.

mod response;

use common::envelope::EnvelopeShape;
use common::model::record::Record;
use common::requests::UserUpdate;
use gloo_net::http::Request;

use crate::error::{FetchError, SaveError};

pub use response::{interpret_collection, interpret_save};

/// `GET` a collection and normalize its records.
pub async fn fetch_collection(url: &str) -> Result<Vec<Record>, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;

    let (shape, records) = interpret_collection(status, &body)?;
    if shape == EnvelopeShape::Unrecognized {
        gloo_console::warn!(format!(
            "event=unrecognized_envelope url={} status={}",
            url, status
        ));
    }
    Ok(records)
}

/// `PATCH` a user with the draft fields.
pub async fn patch_user(url: &str, payload: &UserUpdate) -> Result<(), SaveError> {
    let response = Request::patch(url)
        .json(payload)
        .map_err(|err| SaveError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| SaveError::Transport(err.to_string()))?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    interpret_save(status, &body)
}
