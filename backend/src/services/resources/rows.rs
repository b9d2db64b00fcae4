//! Row shapes returned by the collection endpoints.
//!
//! Ids and foreign keys are serialized as strings, which is what the client
//! compares against when it preselects a user's team.

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub team_id: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub member_count: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRow {
    pub id: String,
    pub user_id: String,
    pub activity_type: String,
    pub duration: i64,
    pub distance: Option<f64>,
    pub calories: i64,
    pub date: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub id: String,
    pub user_id: String,
    pub user: String,
    pub team_id: String,
    pub team: Option<String>,
    pub total_calories: i64,
    pub total_activities: i64,
    pub total_duration: i64,
    pub rank: i64,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub activity_type: String,
    pub difficulty: String,
    pub duration: i64,
    pub calories_per_session: i64,
    pub created_at: String,
}

fn id_of(row: &Row, index: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, i64>(index)?.to_string())
}

fn collect<T>(
    conn: &Connection,
    sql: &str,
    map: impl FnMut(&Row) -> rusqlite::Result<T>,
) -> rusqlite::Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows: rusqlite::Result<Vec<T>> = stmt.query_map([], map)?.collect();
    rows
}

const USER_COLUMNS: &str = "SELECT id, name, email, team_id, created_at FROM users";

fn user_row(row: &Row) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: id_of(row, 0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        team_id: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn users(conn: &Connection) -> rusqlite::Result<Vec<UserRow>> {
    collect(conn, &format!("{} ORDER BY id", USER_COLUMNS), user_row)
}

pub fn user(conn: &Connection, id: i64) -> rusqlite::Result<Option<UserRow>> {
    conn.query_row(
        &format!("{} WHERE id = ?1", USER_COLUMNS),
        params![id],
        user_row,
    )
    .optional()
}

pub fn teams(conn: &Connection) -> rusqlite::Result<Vec<TeamRow>> {
    collect(
        conn,
        "SELECT t.id, t.name, t.description, t.created_at,
                (SELECT COUNT(*) FROM users u WHERE u.team_id = CAST(t.id AS TEXT))
         FROM teams t ORDER BY t.id",
        |row| {
            Ok(TeamRow {
                id: id_of(row, 0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                created_at: row.get(3)?,
                member_count: row.get(4)?,
            })
        },
    )
}

pub fn activities(conn: &Connection) -> rusqlite::Result<Vec<ActivityRow>> {
    collect(
        conn,
        "SELECT id, user_id, activity_type, duration, distance, calories, date, created_at
         FROM activities ORDER BY date DESC, id",
        |row| {
            Ok(ActivityRow {
                id: id_of(row, 0)?,
                user_id: row.get(1)?,
                activity_type: row.get(2)?,
                duration: row.get(3)?,
                distance: row.get(4)?,
                calories: row.get(5)?,
                date: row.get(6)?,
                created_at: row.get(7)?,
            })
        },
    )
}

/// Leaderboard entries with the user and team names resolved.
pub fn leaderboard(conn: &Connection) -> rusqlite::Result<Vec<LeaderboardRow>> {
    collect(
        conn,
        "SELECT l.id, l.user_id, COALESCE(u.name, 'Unknown User'), l.team_id, t.name,
                l.total_calories, l.total_activities, l.total_duration, l.rank, l.updated_at
         FROM leaderboard l
         LEFT JOIN users u ON CAST(u.id AS TEXT) = l.user_id
         LEFT JOIN teams t ON CAST(t.id AS TEXT) = l.team_id
         ORDER BY l.rank, l.id",
        |row| {
            Ok(LeaderboardRow {
                id: id_of(row, 0)?,
                user_id: row.get(1)?,
                user: row.get(2)?,
                team_id: row.get(3)?,
                team: row.get(4)?,
                total_calories: row.get(5)?,
                total_activities: row.get(6)?,
                total_duration: row.get(7)?,
                rank: row.get(8)?,
                updated_at: row.get(9)?,
            })
        },
    )
}

pub fn workouts(conn: &Connection) -> rusqlite::Result<Vec<WorkoutRow>> {
    collect(
        conn,
        "SELECT id, name, description, activity_type, difficulty, duration, calories_per_session, created_at
         FROM workouts ORDER BY id",
        |row| {
            Ok(WorkoutRow {
                id: id_of(row, 0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                activity_type: row.get(3)?,
                difficulty: row.get(4)?,
                duration: row.get(5)?,
                calories_per_session: row.get(6)?,
                created_at: row.get(7)?,
            })
        },
    )
}
