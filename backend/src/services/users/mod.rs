//! # User Service Module
//!
//! ## Sub-modules:
//! - `update`: partial update of a user's name, email and team.

pub mod update;
