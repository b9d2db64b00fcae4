//! Types and pure logic shared by the OctoFit frontend and its development API.

pub mod envelope;
pub mod model;
pub mod requests;
pub mod validation;
