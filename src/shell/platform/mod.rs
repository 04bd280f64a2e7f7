// Entry point shared by every hosting target.
//
// A hosting platform hands us its own request shape; a `PlatformAdapter`
// translates it into an HTTP request for the application and translates the
// HTTP response back. `dispatch` is the whole per-invocation flow.

pub mod azure;

use async_trait::async_trait;
use axum::Json;
use axum::body::Body;
use axum::http::{HeaderValue, Request, Response, StatusCode, header};
use axum::response::IntoResponse;
use thiserror::Error;

use crate::shell::app_cell::{AppCell, BootstrapError};

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("invocation has no {0:?} binding")]
    MissingBinding(String),

    #[error("malformed invocation payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid method {0:?}")]
    InvalidMethod(String),

    #[error("invalid url {0:?}")]
    InvalidUrl(String),

    #[error("invalid header {0:?}")]
    InvalidHeader(String),

    #[error(transparent)]
    Request(#[from] axum::http::Error),

    #[error("failed to read response body: {0}")]
    Body(String),
}

#[derive(Debug, Error)]
pub enum EntryError {
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

/// Translation between a hosting platform's request model and HTTP.
#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    type Inbound: Send;
    type Outbound: Send;

    fn decode(&self, inbound: Self::Inbound) -> Result<Request<Body>, AdapterError>;

    async fn encode(&self, response: Response<Body>) -> Result<Self::Outbound, AdapterError>;
}

/// Handles one invocation: decode, route through the (lazily built)
/// application, default the content type to JSON, encode.
pub async fn dispatch<A>(
    adapter: &A,
    app: &AppCell,
    inbound: A::Inbound,
) -> Result<A::Outbound, EntryError>
where
    A: PlatformAdapter,
{
    let mut response = match adapter.decode(inbound) {
        Ok(request) => {
            let application = app.get().await?;
            application.handle(request).await
        }
        Err(error) => {
            tracing::warn!(%error, "rejecting undecodable invocation");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": error.to_string() })),
            )
                .into_response()
        }
    };

    response
        .headers_mut()
        .entry(header::CONTENT_TYPE)
        .or_insert(HeaderValue::from_static("application/json"));

    Ok(adapter.encode(response).await?)
}
