//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::GatewayDeps;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::routes::{graphql_batch_handler, graphql_handler, health_handler};

/// Build the Axum application router
///
/// The GraphQL context is request-independent here (the caller's token
/// arrives as a field argument, not a header), so one instance is attached
/// as an extension and shared by every request.
pub fn build_app(deps: GatewayDeps) -> Router {
    let schema = Arc::new(create_schema());
    let context = GraphQLContext::new(deps);

    // The gateway fronts browser clients on arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Build router
    let mut router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(juniper_axum::graphiql("/graphql", None)));
    }

    router
        .route("/health", get(health_handler))
        .layer(Extension(context))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
