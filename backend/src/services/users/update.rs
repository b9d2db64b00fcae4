//! # User Update Service
//!
//! Backs `PATCH /api/users/{id}/`. Only the fields present in the body are
//! changed; `team_id: null` clears the team while an absent `team_id` keeps
//! it.
//!
//! ## Workflow
//!
//! 1.  The id segment is parsed; a non-numeric or unknown id is `404`.
//! 2.  The present fields are validated: a blank name, a malformed email or
//!     an email owned by another user is a `400` naming the field.
//! 3.  The merged record is written and read back as the response body.

use actix_web::{web, HttpResponse};
use common::validation::is_valid_email;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Deserializer};

use crate::db::DbState;
use crate::error::ApiError;
use crate::services::resources::rows::{self, UserRow};

pub const BLANK_FIELD: &str = "This field may not be blank.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const DUPLICATE_EMAIL: &str = "user with this email already exists.";

/// Body of a partial update. `team_id` distinguishes "absent" (`None`)
/// from "explicitly null" (`Some(None)`).
#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub team_id: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Actix web handler for `PATCH /api/users/{id}/`.
///
/// # Returns
/// - `200 OK` with the updated user.
/// - `400 Bad Request` with `{ "<field>": ["<message>"] }` on a rejected field.
/// - `404 Not Found` when no user has this id.
pub async fn process(
    user_id: web::Path<String>,
    payload: web::Json<UserPatch>,
    db: web::Data<DbState>,
) -> Result<HttpResponse, ApiError> {
    let id: i64 = user_id.parse().map_err(|_| ApiError::NotFound)?;
    let conn = db.conn.lock().await;
    let updated = update_user(&conn, id, payload.into_inner())?;
    info!("updated user {} ({})", updated.id, updated.email);
    Ok(HttpResponse::Ok().json(updated))
}

/// Validates `patch` against the stored user `id` and writes the result.
pub fn update_user(conn: &Connection, id: i64, patch: UserPatch) -> Result<UserRow, ApiError> {
    let current = rows::user(conn, id)?.ok_or(ApiError::NotFound)?;

    let name = match patch.name {
        Some(name) if name.trim().is_empty() => return Err(ApiError::field("name", BLANK_FIELD)),
        Some(name) => name.trim().to_string(),
        None => current.name,
    };

    let email = match patch.email {
        Some(email) => {
            let email = email.trim().to_string();
            if !is_valid_email(&email) {
                return Err(ApiError::field("email", INVALID_EMAIL));
            }
            if email_taken(conn, &email, id)? {
                return Err(ApiError::field("email", DUPLICATE_EMAIL));
            }
            email
        }
        None => current.email,
    };

    let team_id = match patch.team_id {
        Some(team) => team.filter(|team| !team.trim().is_empty()),
        None => current.team_id,
    };

    conn.execute(
        "UPDATE users SET name = ?1, email = ?2, team_id = ?3 WHERE id = ?4",
        params![name, email, team_id, id],
    )?;
    rows::user(conn, id)?.ok_or(ApiError::NotFound)
}

fn email_taken(conn: &Connection, email: &str, except: i64) -> rusqlite::Result<bool> {
    Ok(conn
        .query_row(
            "SELECT 1 FROM users WHERE email = ?1 AND id <> ?2",
            params![email, except],
            |_| Ok(()),
        )
        .optional()?
        .is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::configure_routes;
    use crate::services::testing::{config, seeded_state};
    use actix_web::{test as web_test, App};
    use serde_json::{json, Value};

    async fn patch(path: &str, body: Value) -> (u16, Value) {
        let app = web_test::init_service(
            App::new()
                .app_data(seeded_state().await)
                .app_data(config(true))
                .service(configure_routes()),
        )
        .await;
        let req = web_test::TestRequest::patch().uri(path).set_json(body).to_request();
        let resp = web_test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: Value = web_test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn applies_a_full_form_submission() {
        let (status, body) = patch(
            "/api/users/1/",
            json!({ "name": "Tony", "email": "tony@stark.com", "team_id": "2" }),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["id"], "1");
        assert_eq!(body["name"], "Tony");
        assert_eq!(body["email"], "tony@stark.com");
        assert_eq!(body["team_id"], "2");
    }

    #[actix_web::test]
    async fn null_team_clears_membership() {
        let (status, body) = patch("/api/users/1/", json!({ "team_id": null })).await;
        assert_eq!(status, 200);
        assert_eq!(body["team_id"], Value::Null);
        assert_eq!(body["name"], "Iron Man");
    }

    #[actix_web::test]
    async fn duplicate_email_names_the_field() {
        let (status, body) = patch("/api/users/1/", json!({ "email": "clark.kent@dc.com" })).await;
        assert_eq!(status, 400);
        assert_eq!(body, json!({ "email": [DUPLICATE_EMAIL] }));
    }

    #[actix_web::test]
    async fn keeping_your_own_email_is_not_a_duplicate() {
        let (status, _) = patch("/api/users/1/", json!({ "email": "tony.stark@marvel.com" })).await;
        assert_eq!(status, 200);
    }

    #[actix_web::test]
    async fn malformed_email_is_rejected() {
        let (status, body) = patch("/api/users/1/", json!({ "email": "not-an-email" })).await;
        assert_eq!(status, 400);
        assert_eq!(body, json!({ "email": [INVALID_EMAIL] }));
    }

    #[actix_web::test]
    async fn blank_name_is_rejected() {
        let (status, body) = patch("/api/users/2/", json!({ "name": "   " })).await;
        assert_eq!(status, 400);
        assert_eq!(body, json!({ "name": [BLANK_FIELD] }));
    }

    #[actix_web::test]
    async fn unknown_ids_are_not_found() {
        for path in ["/api/users/999/", "/api/users/abc/"] {
            let (status, body) = patch(path, json!({ "name": "Nobody" })).await;
            assert_eq!(status, 404, "{path}");
            assert_eq!(body, json!({ "detail": "Not found." }));
        }
    }

    #[test]
    fn absent_and_null_team_are_distinct() {
        let absent: UserPatch = serde_json::from_value(json!({ "name": "A" })).unwrap();
        assert_eq!(absent.team_id, None);
        let cleared: UserPatch = serde_json::from_value(json!({ "team_id": null })).unwrap();
        assert_eq!(cleared.team_id, Some(None));
    }
}
