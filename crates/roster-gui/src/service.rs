//! Roster loading service.
//!
//! The one external interface of the application: a one-shot GET of the
//! members JSON, run through Iced's `Task::perform`. Completion (success
//! or failure) arrives as `Message::RosterLoaded`.

use iced::Task;
use roster_model::MemberRecord;

use crate::error::GuiError;
use crate::message::Message;

/// Published members endpoint used when nothing else is configured.
pub const DEFAULT_ROSTER_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Start the roster fetch.
///
/// Returns a Task that will produce a `RosterLoaded` message.
pub fn load_roster(url: String) -> Task<Message> {
    Task::perform(fetch_roster(url), |result| {
        Message::RosterLoaded(result.map_err(|e| e.to_string()))
    })
}

async fn fetch_roster(url: String) -> Result<Vec<MemberRecord>, GuiError> {
    tracing::info!(%url, "fetching roster");

    let response = reqwest::get(&url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(GuiError::roster_load)?;

    let records = response
        .json::<Vec<MemberRecord>>()
        .await
        .map_err(GuiError::roster_load)?;

    tracing::info!(count = records.len(), "roster fetched");
    Ok(records)
}
