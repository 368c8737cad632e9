use crate::kernel::GatewayDeps;

/// GraphQL request context
///
/// Carries the shared service handles available to all resolvers. The
/// caller's token travels as a field argument rather than in the context,
/// so one context instance serves every request.
#[derive(Clone)]
pub struct GraphQLContext {
    deps: GatewayDeps,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: GatewayDeps) -> Self {
        Self { deps }
    }

    pub fn deps(&self) -> &GatewayDeps {
        &self.deps
    }
}
