use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::event,
    error::AppError,
    state::AppState,
};

/// OpenAPI documentation for the events API
#[derive(OpenApi)]
#[openapi(
    info(title = "Schedulebot API", description = "Read-only access to scheduled events"),
    tags(
        (name = "event", description = "Scheduled events posted by the bot")
    )
)]
pub struct ApiDoc;

/// Builds the API routes with Swagger UI at `/swagger-ui` and the OpenAPI document at
/// `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(event::get_events))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serves the web API until the process exits.
///
/// # Arguments
/// - `addr` - Socket address to bind, e.g. `0.0.0.0:8080`
/// - `db` - Database connection shared with request handlers
pub async fn serve(addr: &str, db: DatabaseConnection) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web API listening on {}", addr);

    axum::serve(listener, router().with_state(AppState::new(db))).await?;

    Ok(())
}
