use axum::{
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    catalog_handlers, config::Config, contact_handlers, feedback_handlers, handlers,
    state::AppState,
};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/catalog",
            get(catalog_handlers::list_items).post(catalog_handlers::create_item),
        )
        .route(
            "/catalog/:id",
            get(catalog_handlers::get_item)
                .put(catalog_handlers::update_item)
                .delete(catalog_handlers::delete_item),
        )
}

pub fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/feedback",
            get(feedback_handlers::list_feedback).post(feedback_handlers::create_feedback),
        )
        .route(
            "/feedback/:id",
            axum::routing::put(feedback_handlers::update_feedback)
                .delete(feedback_handlers::delete_feedback),
        )
}

pub fn contact_routes() -> Router<AppState> {
    Router::new().route(
        "/contact",
        get(contact_handlers::list_contacts).post(contact_handlers::submit_contact),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health_check))
}

/// Paths used by the original storefront frontend, mounted under `/api`
pub fn legacy_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/popularItems",
            get(catalog_handlers::list_items).post(catalog_handlers::create_item),
        )
        .route(
            "/popularItems/:id",
            get(catalog_handlers::get_item)
                .put(catalog_handlers::update_item)
                .delete(catalog_handlers::delete_item),
        )
        .merge(feedback_routes())
        .merge(contact_routes())
}

/// Build the full application router
pub fn app(state: AppState, config: &Config) -> Router {
    let static_files = ServeDir::new(&config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::route_not_found.into_service());

    Router::new()
        .merge(catalog_routes())
        .merge(feedback_routes())
        .merge(contact_routes())
        .merge(health_routes())
        .nest("/api", legacy_routes())
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_logger))
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .with_state(state)
}

async fn request_logger(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let elapsed = start.elapsed().as_millis();
    let status = response.status().as_u16();

    tracing::info!("{method} {uri} {status} {elapsed}ms");

    response
}
