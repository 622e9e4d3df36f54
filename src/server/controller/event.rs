use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{EventsQuery, PaginatedEventsDto},
    },
    server::{
        error::AppError, model::schedule::ScheduleFilter, service::schedule::ScheduleService,
        state::AppState, util::validate::parse_report_date,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Body of every 500 response from the events endpoint.
pub const EVENTS_ERROR: &str = "An error occurred while retrieving events.";

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 50;
/// Keeps the row offset well inside the range the database driver accepts.
const MAX_PAGE: i64 = 1_000_000;

/// Clamps the requested page and page size into their accepted ranges.
///
/// Values of zero or below fall back to the defaults; pages and page sizes are capped.
pub fn clamp_paging(page: Option<i64>, page_size: Option<i64>) -> (u64, u64) {
    let page = page
        .filter(|p| *p > 0)
        .unwrap_or(DEFAULT_PAGE)
        .min(MAX_PAGE);
    let page_size = page_size
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);

    (page as u64, page_size as u64)
}

/// Builds the repository filter from the query string.
///
/// Without `hasEnded`, only events that have not ended are returned.
fn build_filter(query: &EventsQuery) -> Result<ScheduleFilter, AppError> {
    let start_from = query
        .start_date
        .as_deref()
        .map(|text| {
            parse_report_date(text, false)
                .map_err(|_| AppError::BadRequest(format!("Invalid startDate: {}", text)))
        })
        .transpose()?;
    let end_until = query
        .end_date
        .as_deref()
        .map(|text| {
            parse_report_date(text, true)
                .map_err(|_| AppError::BadRequest(format!("Invalid endDate: {}", text)))
        })
        .transpose()?;

    Ok(ScheduleFilter {
        guild_id: query.server_id,
        start_from,
        end_until,
        is_active: query.is_active,
        has_ended: Some(query.has_ended.unwrap_or(false)),
    })
}

/// List scheduled events.
///
/// Returns one page of events ordered by start time. Without `hasEnded` only events
/// that have not ended are listed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Paging and filter parameters
///
/// # Returns
/// - `200 OK` - Page of events with pagination totals
/// - `400 Bad Request` - A date could not be parsed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(EventsQuery),
    responses(
        (status = 200, description = "Page of events", body = PaginatedEventsDto),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Response {
    let filter = match build_filter(&query) {
        Ok(filter) => filter,
        Err(e) => return e.into_response(),
    };
    let (page, page_size) = clamp_paging(query.page, query.page_size);

    match ScheduleService::new(&state.db)
        .get_paginated(&filter, page, page_size)
        .await
    {
        Ok(paginated) => (StatusCode::OK, Json(paginated.into_dto())).into_response(),
        Err(e) => {
            tracing::error!("Failed to retrieve events: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: EVENTS_ERROR.to_string(),
                }),
            )
                .into_response()
        }
    }
}
