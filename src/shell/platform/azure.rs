// Azure Functions custom handler.
//
// The Functions host POSTs every HTTP trigger invocation to
// `/{function_name}` as JSON and expects the output bindings back as JSON.
// Request headers arrive as lists of values; the body is either a string or
// an already parsed JSON value.

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderName, HeaderValue, Method, Request, Response, StatusCode, Uri, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing::post};
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::shell::app_cell::AppCell;
use crate::shell::platform::{AdapterError, PlatformAdapter, dispatch};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvocationRequest {
    pub data: HashMap<String, Value>,
    #[serde(default)]
    pub metadata: Value,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HttpTrigger {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvocationResponse {
    pub outputs: HashMap<String, HttpOutput>,
    pub logs: Vec<String>,
    pub return_value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpOutput {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub struct AzureFunctionsAdapter {
    request_binding: String,
    response_binding: String,
}

impl Default for AzureFunctionsAdapter {
    fn default() -> Self {
        Self::new("req", "res")
    }
}

impl AzureFunctionsAdapter {
    pub fn new(request_binding: impl Into<String>, response_binding: impl Into<String>) -> Self {
        Self {
            request_binding: request_binding.into(),
            response_binding: response_binding.into(),
        }
    }
}

#[async_trait]
impl PlatformAdapter for AzureFunctionsAdapter {
    type Inbound = InvocationRequest;
    type Outbound = InvocationResponse;

    fn decode(&self, mut inbound: InvocationRequest) -> Result<Request<Body>, AdapterError> {
        let raw = inbound
            .data
            .remove(&self.request_binding)
            .ok_or_else(|| AdapterError::MissingBinding(self.request_binding.clone()))?;
        let trigger: HttpTrigger = serde_json::from_value(raw)?;

        let method = Method::from_bytes(trigger.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| AdapterError::InvalidMethod(trigger.method.clone()))?;
        let uri: Uri = trigger
            .url
            .parse()
            .map_err(|_| AdapterError::InvalidUrl(trigger.url.clone()))?;
        let path = uri.path_and_query().map_or("/", |pq| pq.as_str());

        let mut builder = Request::builder().method(method).uri(path);
        for (name, values) in &trigger.headers {
            // The body may be re-serialized below, so its length is recomputed.
            if name.eq_ignore_ascii_case(header::CONTENT_LENGTH.as_str()) {
                continue;
            }
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AdapterError::InvalidHeader(name.clone()))?;
            for value in values {
                let header_value = HeaderValue::from_str(value)
                    .map_err(|_| AdapterError::InvalidHeader(name.clone()))?;
                builder = builder.header(header_name.clone(), header_value);
            }
        }

        let body = match trigger.body {
            None | Some(Value::Null) => Body::empty(),
            Some(Value::String(text)) => Body::from(text),
            Some(other) => Body::from(serde_json::to_vec(&other)?),
        };

        Ok(builder.body(body)?)
    }

    async fn encode(&self, response: Response<Body>) -> Result<InvocationResponse, AdapterError> {
        let (parts, body) = response.into_parts();
        let bytes = body
            .collect()
            .await
            .map_err(|e| AdapterError::Body(e.to_string()))?
            .to_bytes();

        let mut headers = BTreeMap::new();
        for name in parts.headers.keys() {
            let joined = parts
                .headers
                .get_all(name)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .collect::<Vec<_>>()
                .join(", ");
            headers.insert(name.as_str().to_string(), joined);
        }

        let output = HttpOutput {
            status_code: parts.status.as_u16(),
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        };

        Ok(InvocationResponse {
            outputs: HashMap::from([(self.response_binding.clone(), output)]),
            logs: Vec::new(),
            return_value: None,
        })
    }
}

#[derive(Clone)]
struct HostState {
    adapter: Arc<AzureFunctionsAdapter>,
    app: Arc<AppCell>,
}

/// The router the Functions host talks to. The application itself is built on
/// the first invocation.
pub fn host_router(adapter: AzureFunctionsAdapter, app: AppCell, function_name: &str) -> Router {
    let route = format!("/{}", function_name.trim_matches('/'));
    Router::new()
        .route(&route, post(invoke))
        .with_state(HostState {
            adapter: Arc::new(adapter),
            app: Arc::new(app),
        })
        .layer(TraceLayer::new_for_http())
}

async fn invoke(
    State(state): State<HostState>,
    Json(invocation): Json<InvocationRequest>,
) -> axum::response::Response {
    match dispatch(state.adapter.as_ref(), &state.app, invocation).await {
        Ok(output) => Json(output).into_response(),
        Err(error) => {
            tracing::error!(%error, "invocation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": error.to_string() })),
            )
                .into_response()
        }
    }
}
