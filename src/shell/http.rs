use async_graphql_axum::GraphQLSubscription;
use axum::{Extension, Router, routing::post};

use crate::shell::assembly::GraphQLOptions;
use crate::shell::graphql::{self, AppSchema};

/// Path segment prepended to every route the application registers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalPrefix(Option<String>);

impl GlobalPrefix {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(format!("/{trimmed}")))
        }
    }

    /// `"/api"`, or `""` when no prefix is set.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    pub fn apply(&self, router: Router) -> Router {
        match &self.0 {
            Some(prefix) => Router::new().nest(prefix, router),
            None => router,
        }
    }
}

/// GraphQL routes relative to `mount`, which is only used to point GraphiQL
/// at the externally visible endpoints.
pub fn graphql_routes(schema: AppSchema, options: &GraphQLOptions, mount: &str) -> Router {
    let ws_path = format!("{}/ws", options.path);
    let endpoint = format!("{mount}{}", options.path);
    let ws_endpoint = format!("{mount}{ws_path}");

    let handler = post(graphql::graphql);
    let handler = if options.playground {
        let page = graphql::graphiql(
            &endpoint,
            options
                .install_subscription_handlers
                .then_some(ws_endpoint.as_str()),
        );
        handler.get(move || async move { page })
    } else {
        handler.get(graphql::graphql)
    };

    let mut router = Router::new().route(&options.path, handler);
    if options.install_subscription_handlers {
        router = router.route_service(&ws_path, GraphQLSubscription::new(schema.clone()));
    }
    router.layer(Extension(schema))
}

pub fn router(schema: AppSchema, options: &GraphQLOptions, prefix: &GlobalPrefix) -> Router {
    if options.use_global_prefix {
        prefix.apply(graphql_routes(schema, options, prefix.as_str()))
    } else {
        graphql_routes(schema, options, "")
    }
}
