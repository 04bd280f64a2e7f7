use anyhow::Context;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use std::path::Path;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::shell::assembly::AppModule;
use crate::shell::graphql::{AppSchema, schema_builder};
use crate::shell::http::{self, GlobalPrefix};

/// A fully initialized application: the routed HTTP surface and the schema
/// behind it.
#[derive(Clone)]
pub struct Application {
    router: Router,
    schema: AppSchema,
    modules: Vec<&'static str>,
}

impl Application {
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn schema(&self) -> &AppSchema {
        &self.schema
    }

    pub fn modules(&self) -> &[&'static str] {
        &self.modules
    }

    pub async fn handle(&self, request: Request<Body>) -> Response<Body> {
        match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }
}

/// Builds a fresh application from the production assembly. Every call gets
/// its own feature module state; callers decide whether to reuse it.
pub async fn create_app(config: &AppConfig) -> anyhow::Result<Application> {
    create_app_from(AppModule::from_config(config), &config.global_prefix).await
}

pub async fn create_app_from(
    assembly: AppModule,
    global_prefix: &str,
) -> anyhow::Result<Application> {
    let options = assembly.graphql().clone();

    // 1. Instantiate from the assembly
    let builder = assembly
        .imports()
        .fold(schema_builder(), |builder, module| module.register(builder));
    let modules: Vec<_> = assembly.imports().map(|m| m.name()).collect();

    // 2. Validation policy; input validators live on the resolvers
    let schema = builder
        .limit_depth(options.depth_limit)
        .limit_complexity(options.complexity_limit)
        .finish();

    // 3. Permissive CORS, 4. global prefix
    let prefix = GlobalPrefix::new(global_prefix);
    let router = http::router(schema.clone(), &options, &prefix)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // 5. Initialization
    if let Some(path) = &options.auto_schema_file {
        write_schema_file(&schema, path).await?;
    }

    info!(
        modules = ?modules,
        prefix = prefix.as_str(),
        graphql = %options.path,
        subscriptions = options.install_subscription_handlers,
        "application initialized"
    );

    Ok(Application {
        router,
        schema,
        modules,
    })
}

async fn write_schema_file(schema: &AppSchema, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    tokio::fs::write(path, schema.sdl())
        .await
        .with_context(|| format!("failed to write schema file {}", path.display()))?;
    info!(path = %path.display(), "schema file generated");
    Ok(())
}
