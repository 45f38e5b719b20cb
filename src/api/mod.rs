use crate::config::Config;
use crate::services::health_service::HealthService;
use crate::services::message_service::MessageService;
use crate::storage::Database;
use crate::storage::message_repo::MessageRepository;
use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::{Router, routing::get};
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod docs;
pub mod extractors;
pub mod health;
pub mod messages;
pub mod root;
pub mod schemas;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub message_service: MessageService,
    pub health_service: HealthService,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, db: Database) -> Self {
        Self {
            config,
            message_service: MessageService::new(db.clone(), MessageRepository::new()),
            health_service: HealthService::new(db),
        }
    }
}

/// Configures and returns the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/messages", get(messages::list_messages).post(messages::create_message))
        .route("/openapi.yaml", get(docs::openapi_yaml))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .and_then(|id| id.header_value().to_str().ok())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                        "otel.kind" = "server",
                    )
                })
                .on_response(
                    |response: &axum::http::Response<Body>, latency: std::time::Duration, span: &tracing::Span| {
                        let status = response.status();
                        span.record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(
                    |error: ServerErrorsFailureClass, _latency: std::time::Duration, _span: &tracing::Span| {
                        tracing::error!(error = %error, "request failed");
                    },
                ),
        )
        .layer(SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeRequestUuid))
        .with_state(state)
}
