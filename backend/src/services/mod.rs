//! # API Service Module
//!
//! Routes every request under `/api` to its handler.
//!
//! ## Sub-modules:
//! - `resources`: read-only collection endpoints for every resource kind.
//! - `users`: partial update of a single user.

pub mod resources;
pub mod users;

use actix_web::web::{get, patch, scope};
use actix_web::Scope;

/// The base path for all API endpoints.
const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for the API.
///
/// # Registered Routes:
///
/// *   **`PATCH /users/{id}/`**:
///     - **Handler**: `users::update::process`
///     - **Description**: Applies a partial update (`name`, `email`, `team_id`) to one user
///       and returns the stored record. Field errors answer `400` with
///       `{ "<field>": ["<message>"] }`; an unknown id answers `404`.
///
/// *   **`GET /{collection}/`**:
///     - **Handler**: `resources::list::process`
///     - **Description**: Lists `users`, `teams`, `activities`, `leaderboard` or `workouts`.
///       The body is either a bare array or a `{count, next, previous, results}` envelope,
///       depending on `ServerConfig::paginate`. Unknown collections answer `404`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/users/{id}/", patch().to(users::update::process))
        .route("/users/{id}", patch().to(users::update::process))
        .route("/{collection}/", get().to(resources::list::process))
        .route("/{collection}", get().to(resources::list::process))
}

#[cfg(test)]
pub(crate) mod testing {
    use actix_web::web::Data;

    use crate::config::ServerConfig;
    use crate::db::seed::seed_if_empty;
    use crate::db::DbState;

    /// In-memory database holding the demo data.
    pub async fn seeded_state() -> Data<DbState> {
        let state = DbState::in_memory().unwrap();
        seed_if_empty(&mut *state.conn.lock().await).unwrap();
        Data::new(state)
    }

    pub fn config(paginate: bool) -> Data<ServerConfig> {
        Data::new(ServerConfig {
            paginate,
            ..ServerConfig::default()
        })
    }
}
