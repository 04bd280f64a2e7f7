// Application assembly: which feature modules are active and how the GraphQL
// layer is configured. Built once, read-only afterwards.

use crate::config::{AppConfig, GraphQLSettings};
use crate::modules::recipes::module::RecipesModule;
use crate::shell::graphql::AppSchemaBuilder;
use std::path::PathBuf;

/// A feature unit the application can import.
pub trait FeatureModule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Install the module's shared state into the schema.
    fn register(&self, schema: AppSchemaBuilder) -> AppSchemaBuilder;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQLOptions {
    /// Where the SDL generated from the resolver code is written.
    pub auto_schema_file: Option<PathBuf>,
    pub install_subscription_handlers: bool,
    pub use_global_prefix: bool,
    pub path: String,
    pub playground: bool,
    pub depth_limit: usize,
    pub complexity_limit: usize,
}

impl From<&GraphQLSettings> for GraphQLOptions {
    fn from(settings: &GraphQLSettings) -> Self {
        Self {
            auto_schema_file: settings.schema_file.clone(),
            install_subscription_handlers: settings.subscriptions,
            use_global_prefix: settings.use_global_prefix,
            path: settings.path.clone(),
            playground: settings.playground,
            depth_limit: settings.depth_limit,
            complexity_limit: settings.complexity_limit,
        }
    }
}

pub struct AppModule {
    imports: Vec<Box<dyn FeatureModule>>,
    graphql: GraphQLOptions,
}

impl AppModule {
    pub fn new(graphql: GraphQLOptions) -> Self {
        Self {
            imports: Vec::new(),
            graphql,
        }
    }

    /// The production assembly: every feature module with fresh state.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(GraphQLOptions::from(&config.graphql)).import(RecipesModule::in_memory())
    }

    pub fn import(mut self, module: impl FeatureModule + 'static) -> Self {
        self.imports.push(Box::new(module));
        self
    }

    pub fn imports(&self) -> impl Iterator<Item = &dyn FeatureModule> {
        self.imports.iter().map(|m| m.as_ref())
    }

    pub fn graphql(&self) -> &GraphQLOptions {
        &self.graphql
    }
}
