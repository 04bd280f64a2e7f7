use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("recipe {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| match self {
            ApplicationError::NotFound(_) => e.set("code", "NOT_FOUND"),
            ApplicationError::Repository(_) => e.set("code", "INTERNAL_SERVER_ERROR"),
        })
    }
}
