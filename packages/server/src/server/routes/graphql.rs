use crate::server::graphql::{GraphQLContext, Schema};
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use juniper::http::{graphiql::graphiql_source, GraphQLRequest};
use std::sync::Arc;
use tracing::debug;

/// GraphQL POST endpoint
pub async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    debug!(
        operation = request.operation_name().unwrap_or("anonymous"),
        role = %context.actor().role(),
        "Executing GraphQL request"
    );

    let response = request.execute(&schema, &context).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response)).into_response()
}

/// GraphiQL explorer, served in debug builds only
pub async fn graphql_playground() -> Html<String> {
    Html(graphiql_source("/graphql", None))
}
