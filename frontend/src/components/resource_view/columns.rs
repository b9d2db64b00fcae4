//! Per-kind presentation of records.
//!
//! Users, activities and the leaderboard render as tables described by
//! [`Column`] lists; teams and workouts render as cards (see `view.rs`).

use common::model::record::Record;
use common::model::resource::ResourceKind;
use yew::prelude::*;

use super::helpers::{format_count, format_date, format_measure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Table,
    Cards,
}

pub fn layout(kind: ResourceKind) -> Layout {
    match kind {
        ResourceKind::Team | ResourceKind::Workout => Layout::Cards,
        ResourceKind::User | ResourceKind::Activity | ResourceKind::LeaderboardEntry => Layout::Table,
    }
}

/// How one table cell is derived from a record.
#[derive(Debug, Clone, Copy)]
pub enum Cell {
    /// Primary badge with the raw value.
    Badge(&'static str),
    Strong(&'static str, &'static str),
    Text(&'static str, &'static str),
    /// Info badge, or muted placeholder when missing.
    Tag(&'static str, &'static str),
    /// Integer count, `0` when missing, with an optional unit badge.
    Count(&'static str, Option<&'static str>),
    Measure(&'static str),
    Date(&'static str),
    /// Position in the list, medals for the top three.
    Rank,
}

pub struct Column {
    pub header: &'static str,
    pub cell: Cell,
}

const fn col(header: &'static str, cell: Cell) -> Column {
    Column { header, cell }
}

const USER_COLUMNS: &[Column] = &[
    col("ID", Cell::Badge("id")),
    col("Name", Cell::Strong("name", "N/A")),
    col("Email", Cell::Text("email", "N/A")),
    col("Team", Cell::Tag("team_id", "No Team")),
    col("Date Joined", Cell::Date("created_at")),
];

const ACTIVITY_COLUMNS: &[Column] = &[
    col("ID", Cell::Badge("id")),
    col("User", Cell::Strong("user_id", "N/A")),
    col("Activity Type", Cell::Tag("activity_type", "N/A")),
    col("Duration (min)", Cell::Count("duration", None)),
    col("Distance (km)", Cell::Measure("distance")),
    col("Calories", Cell::Count("calories", Some("kcal"))),
    col("Date", Cell::Date("date")),
];

const LEADERBOARD_COLUMNS: &[Column] = &[
    col("Rank", Cell::Rank),
    col("User", Cell::Strong("user", "Unknown")),
    col("Team", Cell::Tag("team", "No Team")),
    col("Total Calories", Cell::Count("total_calories", Some("kcal"))),
    col("Activities", Cell::Count("total_activities", None)),
    col("Duration (min)", Cell::Count("total_duration", None)),
];

pub fn table_columns(kind: ResourceKind) -> &'static [Column] {
    match kind {
        ResourceKind::User => USER_COLUMNS,
        ResourceKind::Activity => ACTIVITY_COLUMNS,
        ResourceKind::LeaderboardEntry => LEADERBOARD_COLUMNS,
        ResourceKind::Team | ResourceKind::Workout => &[],
    }
}

/// Subtitle under the view heading.
pub fn subtitle(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::User => "Manage and view all registered users",
        ResourceKind::Activity => "Track and monitor all fitness activities",
        ResourceKind::Team => "Explore and join fitness teams",
        ResourceKind::LeaderboardEntry => "Top performers and their achievements",
        ResourceKind::Workout => "Personalized workout suggestions",
    }
}

/// Footer counter label, e.g. "Total users".
pub fn total_label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::User => "Total users",
        ResourceKind::Activity => "Total activities",
        ResourceKind::Team => "Total teams",
        ResourceKind::LeaderboardEntry => "Total participants",
        ResourceKind::Workout => "Total workouts",
    }
}

pub fn empty_label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::User => "No users found",
        ResourceKind::Activity => "No activities found",
        ResourceKind::Team => "No teams found",
        ResourceKind::LeaderboardEntry => "No leaderboard data found",
        ResourceKind::Workout => "No workouts found",
    }
}

pub fn render_cell(record: &Record, index: usize, cell: Cell) -> Html {
    match cell {
        Cell::Badge(field) => html! {
            <span class="badge bg-primary">{ record.text(field).unwrap_or_default() }</span>
        },
        Cell::Strong(field, fallback) => html! {
            <strong>{ record.text(field).unwrap_or_else(|| fallback.to_string()) }</strong>
        },
        Cell::Text(field, fallback) => html! {
            { record.text(field).unwrap_or_else(|| fallback.to_string()) }
        },
        Cell::Tag(field, fallback) => match record.text(field) {
            Some(value) => html! { <span class="badge bg-info text-dark">{ value }</span> },
            None => html! { <span class="text-muted">{ fallback }</span> },
        },
        Cell::Count(field, unit) => {
            let value = format_count(record.number(field).unwrap_or(0.0));
            match unit {
                Some(unit) => html! { <span class="badge bg-success">{ format!("{} {}", value, unit) }</span> },
                None => html! { { value } },
            }
        }
        Cell::Measure(field) => html! { { format_measure(record.number(field).unwrap_or(0.0)) } },
        Cell::Date(field) => html! {
            { record.text(field).map(|raw| format_date(&raw)).unwrap_or_else(|| "N/A".to_string()) }
        },
        Cell::Rank => rank_badge(index),
    }
}

fn rank_badge(index: usize) -> Html {
    let position = index + 1;
    match index {
        0 => html! { <span class="badge bg-warning text-dark fs-5">{ format!("🥇 {}", position) }</span> },
        1 => html! { <span class="badge bg-secondary fs-5">{ format!("🥈 {}", position) }</span> },
        2 => html! { <span class="badge bg-danger fs-5">{ format!("🥉 {}", position) }</span> },
        _ => html! { <span class="badge bg-primary">{ position }</span> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_kind_has_columns() {
        for kind in ResourceKind::ALL {
            let has_columns = !table_columns(kind).is_empty();
            assert_eq!(has_columns, layout(kind) == Layout::Table, "{kind}");
        }
    }
}
