use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// One event as returned by the events API.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub event_title: String,
    pub event_description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub host_name: Option<String>,
    pub world_link: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub has_ended: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedEventsDto {
    pub pagination: PaginationDto,
    pub events: Vec<EventDto>,
}

/// Query string accepted by `GET /api/events`.
///
/// Numbers are kept signed so out-of-range values can be clamped instead of rejected.
#[derive(Deserialize, Debug, Default, Clone, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct EventsQuery {
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Events per page, at most 50 (default: 10)
    pub page_size: Option<i64>,
    /// Discord guild ID
    pub server_id: Option<u64>,
    /// Only events starting at or after this date
    pub start_date: Option<String>,
    /// Only events ending at or before this date
    pub end_date: Option<String>,
    pub is_active: Option<bool>,
    /// Defaults to false, hiding ended events
    pub has_ended: Option<bool>,
}
