//! Web layer for the metro route planner.
//!
//! JSON endpoints for planning routes, resolving free-text requests, and
//! nearest-station lookup. The rendered chat message rides along in the
//! route response so a messaging front-end can forward it verbatim.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
