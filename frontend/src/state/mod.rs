//! Resource-view engine: list phases, the user edit sub-flow and the
//! controller that wires them to commands.

pub mod controller;
pub mod edit;
pub mod view_state;
