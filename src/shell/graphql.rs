use async_graphql::http::GraphiQLSource;
use async_graphql::{MergedObject, MergedSubscription, Schema, SchemaBuilder};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::http::{HeaderMap, HeaderValue, Method, Uri, header};
use axum::response::{Html, IntoResponse};

use crate::modules::recipes::use_cases::add_recipe::inbound::graphql::AddRecipeMutation;
use crate::modules::recipes::use_cases::get_recipe::inbound::graphql::GetRecipeQuery;
use crate::modules::recipes::use_cases::list_recipes::inbound::graphql::ListRecipesQuery;
use crate::modules::recipes::use_cases::recipe_added::inbound::graphql::RecipeAddedSubscription;
use crate::modules::recipes::use_cases::remove_recipe::inbound::graphql::RemoveRecipeMutation;

#[derive(MergedObject, Default)]
pub struct QueryRoot(GetRecipeQuery, ListRecipesQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(AddRecipeMutation, RemoveRecipeMutation);

#[derive(MergedSubscription, Default)]
pub struct SubscriptionRoot(RecipeAddedSubscription);

pub type AppSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;
pub type AppSchemaBuilder = SchemaBuilder<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn schema_builder() -> AppSchemaBuilder {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot::default(),
    )
}

/// Per-request context derived from the inbound HTTP request, available to
/// every resolver through `Context::data_opt`.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
}

impl RequestContext {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> impl IntoResponse {
    let context = RequestContext {
        method,
        uri,
        headers,
    };
    let response: GraphQLResponse = schema.execute(req.into_inner().data(context)).await.into();
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        response,
    )
}

pub fn graphiql(endpoint: &str, subscription_endpoint: Option<&str>) -> Html<String> {
    let source = GraphiQLSource::build().endpoint(endpoint);
    let source = match subscription_endpoint {
        Some(ws) => source.subscription_endpoint(ws),
        None => source,
    };
    Html(source.finish())
}
