use crate::common::{Actor, MemberId, Role};
use axum::{middleware::Next, response::Response};
use tracing::debug;

/// Header carrying the authenticated member id, set by the upstream gateway
pub const MEMBER_ID_HEADER: &str = "x-member-id";
/// Header carrying the member's role
pub const MEMBER_ROLE_HEADER: &str = "x-member-role";

/// Caller context middleware
///
/// Builds the request's Actor from upstream headers and adds it to request
/// extensions. Missing or malformed headers yield an anonymous caller.
pub async fn caller_context_middleware(
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let actor = extract_actor(&request);
    debug!(role = %actor.role(), member_id = ?actor.member_id(), "Resolved caller");
    request.extensions_mut().insert(actor);

    next.run(request).await
}

/// Read the caller from request headers
fn extract_actor(request: &axum::http::Request<axum::body::Body>) -> Actor {
    let header = |name: &str| {
        request
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let Some(member_id) = header(MEMBER_ID_HEADER).and_then(|v| MemberId::parse(v).ok()) else {
        return Actor::anonymous();
    };

    let role = header(MEMBER_ROLE_HEADER)
        .and_then(|v| v.parse::<Role>().ok())
        .unwrap_or(Role::Member);

    Actor::member(member_id, role)
}
