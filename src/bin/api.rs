use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use warranty_checker::{
    app_state::AppState,
    auth, config, health,
    items::{self, dtos as item_dtos, validation},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::handlers::signup,
        auth::handlers::login,
        items::handlers::list_items,
        items::handlers::get_item,
        items::handlers::create_item,
        items::handlers::update_item,
        items::handlers::delete_item,
    ),
    components(schemas(
        health::HealthResponse,
        auth::dtos::SignupRequest,
        auth::dtos::LoginRequest,
        auth::dtos::LoginResponse,
        auth::dtos::ErrorResponse,
        item_dtos::ItemPayload,
        item_dtos::ItemResponse,
        item_dtos::ValidationErrorResponse,
        validation::ValidationError,
        warranty_checker::entities::WarrantyState,
    ))
)]
struct ApiDoc;

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::health_check))
        .route("/auth/signup", post(auth::handlers::signup))
        .route("/auth/login", post(auth::handlers::login))
        .route("/items", get(items::handlers::list_items))
        .route("/items/create", post(items::handlers::create_item))
        .route(
            "/items/{id}",
            get(items::handlers::get_item)
                .put(items::handlers::update_item)
                .delete(items::handlers::delete_item),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::from_env().expect("Failed to load configuration");
    let state = AppState::new();

    let app = router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("Failed to bind to address");
    tracing::info!("listening on {}", config.bind_addr());
    axum::serve(listener, app).await.expect("server error");
}
