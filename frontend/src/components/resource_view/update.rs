//! Update function for the resource view component.
//!
//! Elm-style: each `Msg` is forwarded to the controller, the commands it
//! returns are executed as spawned requests, and their results come back as
//! further messages. Returns whether the view should re-render.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::error::EditRejected;
use crate::state::controller::Command;
use crate::state::view_state::Settlement;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::ResourceViewComponent;

pub fn update(
    component: &mut ResourceViewComponent,
    ctx: &Context<ResourceViewComponent>,
    msg: Msg,
) -> bool {
    let controller = &mut component.controller;
    match msg {
        Msg::ListSettled(ticket, outcome) => {
            controller.list_settled(ticket, outcome) == Settlement::Applied
        }
        Msg::TeamsLoaded(outcome) => {
            if let Err(err) = controller.teams_loaded(outcome) {
                gloo_console::warn!(format!("event=team_options_failed reason={}", err));
            }
            true
        }
        Msg::BeginEdit(record) => accepted(controller.begin_edit(&record)),
        Msg::EditField(field) => accepted(controller.edit_field(field)),
        Msg::Submit => match controller.submit() {
            Ok(commands) => {
                run_commands(ctx, commands);
                true
            }
            Err(err) => accepted(Err(err)),
        },
        Msg::SaveSettled(result) => {
            let saved = result.is_ok();
            let commands = controller.save_settled(result);
            if saved && !commands.is_empty() {
                show_toast("User updated successfully.");
            }
            run_commands(ctx, commands);
            true
        }
        Msg::CancelEdit => accepted(controller.cancel_edit()),
    }
}

/// Spawns one request per command; each reports back through the link.
/// Messages sent to an unmounted component are dropped by Yew.
pub fn run_commands(ctx: &Context<ResourceViewComponent>, commands: Vec<Command>) {
    for command in commands {
        let link = ctx.link().clone();
        match command {
            Command::FetchList { ticket, url } => spawn_local(async move {
                let outcome = api::fetch_collection(&url).await;
                link.send_message(Msg::ListSettled(ticket, outcome));
            }),
            Command::FetchTeams { url } => spawn_local(async move {
                let outcome = api::fetch_collection(&url).await;
                link.send_message(Msg::TeamsLoaded(outcome));
            }),
            Command::SaveUser { url, payload } => spawn_local(async move {
                let result = api::patch_user(&url, &payload).await;
                link.send_message(Msg::SaveSettled(result));
            }),
        }
    }
}

fn accepted(result: Result<(), EditRejected>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            gloo_console::debug!(format!("event=edit_rejected reason={}", err));
            false
        }
    }
}
