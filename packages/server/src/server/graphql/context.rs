use std::sync::Arc;

use crate::common::Actor;
use crate::kernel::ServerDeps;

/// GraphQL request context
///
/// Shared dependencies plus the caller of this request.
#[derive(Clone)]
pub struct GraphQLContext {
    pub deps: Arc<ServerDeps>,
    pub actor: Actor,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: Arc<ServerDeps>, actor: Actor) -> Self {
        Self { deps, actor }
    }

    pub fn deps(&self) -> &ServerDeps {
        &self.deps
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }
}
