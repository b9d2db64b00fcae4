//! # Resource Collection Module
//!
//! Read-only listing of the five collections.
//!
//! ## Sub-modules:
//! - `list`: the `GET /api/{collection}/` handler and the paging envelope.
//! - `rows`: one serializable row type per collection, with the query that loads it.

pub mod list;
pub mod rows;
