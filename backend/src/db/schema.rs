use rusqlite::Connection;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS teams (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS users (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    email      TEXT NOT NULL UNIQUE,
    password   TEXT NOT NULL,
    team_id    TEXT,
    created_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS activities (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id       TEXT NOT NULL,
    activity_type TEXT NOT NULL,
    duration      INTEGER NOT NULL,
    distance      REAL,
    calories      INTEGER NOT NULL,
    date          TEXT NOT NULL,
    created_at    TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS leaderboard (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id          TEXT NOT NULL,
    team_id          TEXT NOT NULL,
    total_calories   INTEGER NOT NULL DEFAULT 0,
    total_activities INTEGER NOT NULL DEFAULT 0,
    total_duration   INTEGER NOT NULL DEFAULT 0,
    rank             INTEGER NOT NULL DEFAULT 0,
    updated_at       TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS workouts (
    id                   INTEGER PRIMARY KEY AUTOINCREMENT,
    name                 TEXT NOT NULL,
    description          TEXT NOT NULL,
    activity_type        TEXT NOT NULL,
    difficulty           TEXT NOT NULL,
    duration             INTEGER NOT NULL,
    calories_per_session INTEGER NOT NULL,
    created_at           TEXT NOT NULL
);
";

pub fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}
