//! Web layer for the shuttle advisor.
//!
//! Exposes recommendations and full timetables over HTTP for whatever
//! front end (chat bot, web page) delivers them to people.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
