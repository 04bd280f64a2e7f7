// Lazily built, process-wide application.
//
// The first caller runs the factory; concurrent callers wait for the same
// initialization. A failed construction is kept and returned to every later
// caller instead of being retried.

use futures::FutureExt;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::config::AppConfig;
use crate::shell::factory::{Application, create_app};

#[derive(Debug, Clone, Error)]
#[error("application bootstrap failed: {0:#}")]
pub struct BootstrapError(Arc<anyhow::Error>);

type Factory = Box<dyn Fn() -> BoxFuture<'static, anyhow::Result<Application>> + Send + Sync>;

pub struct AppCell {
    factory: Factory,
    application: OnceCell<Result<Application, BootstrapError>>,
}

impl AppCell {
    pub fn new(config: AppConfig) -> Self {
        let config = Arc::new(config);
        Self::with_factory(move || {
            let config = config.clone();
            async move { create_app(&config).await }
        })
    }

    pub fn with_factory<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Application>> + Send + 'static,
    {
        Self {
            factory: Box::new(move || factory().boxed()),
            application: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<&Application, BootstrapError> {
        let slot = self
            .application
            .get_or_init(|| async {
                tracing::info!("cold start: building application");
                (self.factory)().await.map_err(|e| {
                    tracing::error!(error = %format!("{e:#}"), "application bootstrap failed");
                    BootstrapError(Arc::new(e))
                })
            })
            .await;
        slot.as_ref().map_err(Clone::clone)
    }

    pub fn is_initialized(&self) -> bool {
        self.application.initialized()
    }
}
