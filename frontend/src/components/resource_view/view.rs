//! View rendering for the resource view component.
//!
//! Pure function of the controller state: a spinner while `Loading`, an
//! error panel replacing the whole list when `Failed`, and the table or
//! card grid when `Ready`. For users the edit dialog is layered on top.

use common::model::record::Record;
use common::model::resource::ResourceKind;
use yew::html::Scope;
use yew::prelude::*;

use crate::card_grid::CardGrid;
use crate::state::view_state::Phase;

use super::columns::{empty_label, layout, render_cell, subtitle, table_columns, total_label, Layout};
use super::dialogs::edit_user::edit_user_dialog;
use super::helpers::{format_count, format_date};
use super::messages::Msg;
use super::state::ResourceViewComponent;

pub fn view(component: &ResourceViewComponent, ctx: &Context<ResourceViewComponent>) -> Html {
    let controller = &component.controller;
    let list = controller.list();

    match list.phase() {
        Phase::Loading => loading_panel(),
        Phase::Failed => error_panel(list.error_message().unwrap_or_default()),
        Phase::Ready => {
            let kind = controller.kind();
            let link = ctx.link();
            let body = match layout(kind) {
                Layout::Table => build_table(kind, list.records(), controller.edit().is_some(), link),
                Layout::Cards => build_cards(kind, list.records()),
            };
            html! {
                <div class="container mt-4 mb-5">
                    <div class="content-wrapper">
                        <h2>{ kind.title() }</h2>
                        <p class="text-muted mb-4">{ subtitle(kind) }</p>
                        { body }
                        <div class="mt-3 text-muted">
                            <small>{ format!("{}: ", total_label(kind)) }<strong>{ list.records().len() }</strong></small>
                        </div>
                    </div>
                    {
                        match controller.edit() {
                            Some(edit) => edit_user_dialog(edit, controller.team_options(), link),
                            None => html! {},
                        }
                    }
                </div>
            }
        }
    }
}

fn loading_panel() -> Html {
    html! {
        <div class="container mt-5">
            <div class="loading-spinner">
                <div class="spinner-border" role="status">
                    <span class="visually-hidden">{"Loading..."}</span>
                </div>
            </div>
        </div>
    }
}

fn error_panel(message: &str) -> Html {
    html! {
        <div class="container mt-5">
            <div class="alert alert-danger" role="alert">
                <strong>{"Error: "}</strong>{ message.to_string() }
            </div>
        </div>
    }
}

fn record_key(record: &Record, index: usize) -> String {
    record.id().unwrap_or_else(|| format!("row-{}", index))
}

fn build_table(
    kind: ResourceKind,
    records: &[Record],
    editable: bool,
    link: &Scope<ResourceViewComponent>,
) -> Html {
    let columns = table_columns(kind);
    let span = columns.len() + usize::from(editable);

    let rows = if records.is_empty() {
        html! {
            <tr>
                <td colspan={span.to_string()} class="text-center text-muted py-4">{ empty_label(kind) }</td>
            </tr>
        }
    } else {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let edit_cell = if editable {
                    let target = record.clone();
                    html! {
                        <td>
                            <button class="btn btn-sm btn-outline-primary"
                                onclick={link.callback(move |_| Msg::BeginEdit(target.clone()))}>
                                {"Edit"}
                            </button>
                        </td>
                    }
                } else {
                    html! {}
                };
                html! {
                    <tr key={record_key(record, index)}>
                        { for columns.iter().map(|column| html! { <td>{ render_cell(record, index, column.cell) }</td> }) }
                        { edit_cell }
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="table-responsive">
            <table class="table table-hover table-striped align-middle">
                <thead>
                    <tr>
                        { for columns.iter().map(|column| html! { <th scope="col">{ column.header }</th> }) }
                        { if editable { html! { <th scope="col">{"Actions"}</th> } } else { html! {} } }
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
        </div>
    }
}

fn build_cards(kind: ResourceKind, records: &[Record]) -> Html {
    if records.is_empty() {
        return html! { <p class="text-center text-muted py-4">{ empty_label(kind) }</p> };
    }
    html! {
        <CardGrid columns={3}>
            { for records.iter().enumerate().map(|(index, record)| match kind {
                ResourceKind::Workout => workout_card(record, index),
                _ => team_card(record, index),
            }) }
        </CardGrid>
    }
}

fn created_line(record: &Record) -> String {
    record
        .text("created_at")
        .map(|raw| format_date(&raw))
        .unwrap_or_else(|| "N/A".to_string())
}

fn team_card(record: &Record, index: usize) -> Html {
    html! {
        <div class="card h-100" key={record_key(record, index)}>
            <div class="card-body">
                <h5 class="card-title">{ record.text("name").unwrap_or_else(|| "N/A".to_string()) }</h5>
                <p class="card-text text-muted">{ record.text("description").unwrap_or_default() }</p>
            </div>
            <ul class="list-group list-group-flush">
                <li class="list-group-item d-flex justify-content-between align-items-center">
                    {"Members"}
                    <span class="badge bg-primary rounded-pill">
                        { format_count(record.number("member_count").unwrap_or(0.0)) }
                    </span>
                </li>
                <li class="list-group-item">
                    <small class="text-muted"><strong>{"Created: "}</strong>{ created_line(record) }</small>
                </li>
            </ul>
        </div>
    }
}

fn workout_card(record: &Record, index: usize) -> Html {
    let duration = format_count(record.number("duration").unwrap_or(0.0));
    let calories = format_count(record.number("calories_per_session").unwrap_or(0.0));
    html! {
        <div class="card h-100" key={record_key(record, index)}>
            <div class="card-body">
                <h5 class="card-title">{ record.text("name").unwrap_or_else(|| "N/A".to_string()) }</h5>
                <p class="card-text text-muted">{ record.text("description").unwrap_or_default() }</p>
                <span class="badge bg-info text-dark">{ record.text("activity_type").unwrap_or_else(|| "N/A".to_string()) }</span>
            </div>
            <ul class="list-group list-group-flush">
                <li class="list-group-item">{ format!("Duration: {} min", duration) }</li>
                <li class="list-group-item">
                    { format!("Difficulty: {}", record.text("difficulty").unwrap_or_else(|| "N/A".to_string())) }
                </li>
                <li class="list-group-item">{ format!("Calories: {} kcal", calories) }</li>
            </ul>
        </div>
    }
}
