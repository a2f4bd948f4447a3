//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Local, NaiveDateTime};
use tracing::{error, info, warn};

use crate::advisor::Advisor;
use crate::domain::Direction;
use crate::schedule::ScheduleError;

use super::dto::*;
use super::state::AppState;

/// Accepted format of the `at` query parameter.
const AT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trips/to-office", get(trip_to_office))
        .route("/trips/from-office", get(trip_from_office))
        .route("/schedule/to-office", get(schedule_to_office))
        .route("/schedule/from-office", get(schedule_from_office))
        .route("/schedule/reload", post(reload_schedule))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn trip_to_office(
    State(state): State<AppState>,
    Query(query): Query<TripQuery>,
) -> Result<Json<TripResponse>, AppError> {
    recommend(&state, &query, Direction::ToOffice).await
}

async fn trip_from_office(
    State(state): State<AppState>,
    Query(query): Query<TripQuery>,
) -> Result<Json<TripResponse>, AppError> {
    recommend(&state, &query, Direction::FromOffice).await
}

async fn recommend(
    state: &AppState,
    query: &TripQuery,
    direction: Direction,
) -> Result<Json<TripResponse>, AppError> {
    let at = parse_moment(query.at.as_deref())?;
    let schedule = state.schedule.current().await;
    let advisor = Advisor::new(&schedule, &state.config);

    Ok(Json(advisor.recommend(at, direction).into()))
}

/// Parse the requested moment, defaulting to local now.
fn parse_moment(raw: Option<&str>) -> Result<NaiveDateTime, AppError> {
    match raw {
        None => Ok(Local::now().naive_local()),
        Some(s) => NaiveDateTime::parse_from_str(s, AT_FORMAT).map_err(|_| AppError::BadRequest {
            message: format!("Invalid time {s:?}, expected YYYY-MM-DDTHH:MM"),
        }),
    }
}

async fn schedule_to_office(State(state): State<AppState>) -> Json<ScheduleResponse> {
    full_schedule(&state, Direction::ToOffice).await
}

async fn schedule_from_office(State(state): State<AppState>) -> Json<ScheduleResponse> {
    full_schedule(&state, Direction::FromOffice).await
}

async fn full_schedule(state: &AppState, direction: Direction) -> Json<ScheduleResponse> {
    let schedule = state.schedule.current().await;
    let advisor = Advisor::new(&schedule, &state.config);

    Json(advisor.full_schedule_texts(direction).into())
}

/// Re-read the schedule file, keeping the old schedule on failure.
async fn reload_schedule(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let departures = state.schedule.reload().await?;
    info!(departures, "reloaded schedule on request");

    Ok(Json(ReloadResponse { departures }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
