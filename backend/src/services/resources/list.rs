//! # Collection Listing Service
//!
//! Backs `GET /api/{collection}/`. The collection segment is resolved to a
//! `ResourceKind`, the rows are loaded under the connection lock and
//! serialized either as a bare array or inside a paging envelope.

use actix_web::{web, HttpResponse};
use common::model::resource::ResourceKind;
use log::debug;
use rusqlite::Connection;
use serde::Serialize;
use serde_json::{json, Value};

use super::rows;
use crate::config::ServerConfig;
use crate::db::DbState;
use crate::error::ApiError;

/// Actix web handler for `GET /api/{collection}/`.
///
/// # Returns
/// - `200 OK` with the collection as JSON.
/// - `404 Not Found` for an unknown collection name.
/// - `500 Internal Server Error` when a query fails.
pub async fn process(
    collection: web::Path<String>,
    db: web::Data<DbState>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ApiError> {
    let kind = ResourceKind::from_collection_path(&collection).ok_or(ApiError::NotFound)?;
    let conn = db.conn.lock().await;
    let body = load(&conn, kind)?;
    debug!("listed {} ({} rows)", kind, body.as_array().map_or(0, Vec::len));
    Ok(HttpResponse::Ok().json(shape(body, config.paginate)))
}

/// Loads every row of `kind` as a JSON array.
pub fn load(conn: &Connection, kind: ResourceKind) -> Result<Value, ApiError> {
    Ok(match kind {
        ResourceKind::User => to_array(rows::users(conn)?),
        ResourceKind::Team => to_array(rows::teams(conn)?),
        ResourceKind::Activity => to_array(rows::activities(conn)?),
        ResourceKind::LeaderboardEntry => to_array(rows::leaderboard(conn)?),
        ResourceKind::Workout => to_array(rows::workouts(conn)?),
    })
}

fn to_array<T: Serialize>(rows: Vec<T>) -> Value {
    Value::Array(rows.iter().map(|row| json!(row)).collect())
}

/// Wraps `rows` in `{count, next, previous, results}` when paging is on.
/// The whole collection always fits on the single page.
pub fn shape(rows: Value, paginate: bool) -> Value {
    if !paginate {
        return rows;
    }
    let count = rows.as_array().map_or(0, Vec::len);
    json!({
        "count": count,
        "next": null,
        "previous": null,
        "results": rows,
    })
}
