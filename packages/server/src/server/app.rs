//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::common::Actor;
use crate::kernel::ServerDeps;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{caller_context_middleware, MEMBER_ID_HEADER, MEMBER_ROLE_HEADER};
use crate::server::routes::{
    filters_handler, graphql_handler, graphql_playground, health_handler, resources_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Populated by caller_context_middleware
    let actor = request
        .extensions()
        .get::<Actor>()
        .cloned()
        .unwrap_or_default();

    let context = GraphQLContext::new(state.deps.clone(), actor);
    request.extensions_mut().insert(context);

    next.run(request).await
}

/// CORS policy: any origin when none are configured
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static(MEMBER_ID_HEADER),
            HeaderName::from_static(MEMBER_ROLE_HEADER),
        ])
}

/// Build the Axum application router
///
/// Rate limiting is layered on by the server binary, since it needs the
/// peer address from the listener.
pub fn build_app(deps: ServerDeps, allowed_origins: &[String]) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let app_state = AxumAppState {
        deps: Arc::new(deps),
    };

    let mut router = Router::new().route("/graphql", post(graphql_handler));

    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(graphql_playground));
    }

    router
        .route("/health", get(health_handler))
        .route("/api/:item_type/:item_slug/filters", get(filters_handler))
        .route("/api/:item_type/:item_slug/resources", get(resources_handler))
        .layer(middleware::from_fn(create_graphql_context)) // Create GraphQL context
        .layer(middleware::from_fn(caller_context_middleware)) // Resolve the caller
        .layer(Extension(app_state)) // Add shared state (must be after middlewares that need it)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
