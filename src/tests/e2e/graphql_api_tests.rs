use crate::shell::factory::{Application, create_app};
use crate::tests::fixtures::app::{graphql_post, read_json, test_config};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const ADD_RECIPE: &str = r#"
    mutation AddRecipe($data: NewRecipeInput!) {
        addRecipe(newRecipeData: $data) { id title description ingredients creationDate }
    }
"#;

#[fixture]
async fn app() -> Application {
    create_app(&test_config()).await.unwrap()
}

async fn add_recipe(app: &Application, title: &str) -> Value {
    let response = app
        .handle(graphql_post(
            "/api/graphql",
            ADD_RECIPE,
            json!({ "data": { "title": title, "ingredients": ["Flour"] } }),
        ))
        .await;
    read_json(response).await
}

async fn recipe_titles(app: &Application) -> Vec<String> {
    let response = app
        .handle(graphql_post("/api/graphql", "{ recipes { title } }", Value::Null))
        .await;
    let json = read_json(response).await;
    json["data"]["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect()
}

#[rstest]
#[case("/graphql")]
#[case("/")]
#[case("/apigraphql")]
#[tokio::test]
async fn it_should_return_404_outside_the_global_prefix(
    #[future] app: Application,
    #[case] path: &str,
) {
    let response = app
        .await
        .handle(graphql_post(path, "{ recipes { id } }", Value::Null))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_answer_a_well_formed_query_with_json_data(#[future] app: Application) {
    let response = app
        .await
        .handle(graphql_post("/api/graphql", "{ recipes { id } }", Value::Null))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let json = read_json(response).await;
    assert_eq!(json["data"]["recipes"], json!([]));
}

#[rstest]
#[tokio::test]
async fn it_should_answer_a_resolver_failure_with_errors_and_status_200(
    #[future] app: Application,
) {
    let response = app
        .await
        .handle(graphql_post(
            "/api/graphql",
            r#"{ recipe(id: "missing") { id } }"#,
            Value::Null,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["errors"][0]["message"], "recipe missing not found");
    assert_eq!(json["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[rstest]
#[tokio::test]
async fn it_should_reject_a_malformed_body_with_a_client_error(#[future] app: Application) {
    let app = app.await;
    let response = app
        .handle(
            Request::post("/api/graphql")
                .header("content-type", "application/json")
                .body(Body::from("not-json"))
                .unwrap(),
        )
        .await;

    assert!(response.status().is_client_error());
    assert!(recipe_titles(&app).await.is_empty());
}

#[rstest]
#[case(json!({ "title": "T".repeat(31), "ingredients": [] }))]
#[case(json!({ "title": "Soup", "description": "too short", "ingredients": [] }))]
#[case(json!({ "title": "Soup", "description": "ü".repeat(20), "ingredients": [] }))]
#[case(json!({ "title": "é".repeat(31), "ingredients": [] }))]
#[case(json!({ "title": "Soup", "ingredients": vec!["Salt"; 31] }))]
#[case(json!({ "ingredients": [] }))]
#[tokio::test]
async fn it_should_not_run_the_resolver_for_invalid_input(
    #[future] app: Application,
    #[case] data: Value,
) {
    let app = app.await;
    let response = app
        .handle(graphql_post("/api/graphql", ADD_RECIPE, json!({ "data": data })))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert!(json["errors"].is_array());
    assert!(recipe_titles(&app).await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_accept_multibyte_text_within_the_character_limits(#[future] app: Application) {
    let app = app.await;
    let title = "é".repeat(30);
    let description = "Crème brûlée à la française, très légère".to_string();
    let response = app
        .handle(graphql_post(
            "/api/graphql",
            ADD_RECIPE,
            json!({ "data": { "title": title, "description": description, "ingredients": [] } }),
        ))
        .await;

    let json = read_json(response).await;
    assert!(json.get("errors").is_none(), "unexpected errors: {json}");
    assert_eq!(json["data"]["addRecipe"]["title"], title.as_str());
    assert_eq!(json["data"]["addRecipe"]["description"], description.as_str());
    assert_eq!(recipe_titles(&app).await, vec![title]);
}

#[rstest]
#[case("{ recipes(take: 0) { id } }")]
#[case("{ recipes(take: 51) { id } }")]
#[case("{ recipes(skip: -1) { id } }")]
#[tokio::test]
async fn it_should_validate_paging_arguments(#[future] app: Application, #[case] query: &str) {
    let response = app
        .await
        .handle(graphql_post("/api/graphql", query, Value::Null))
        .await;
    let json = read_json(response).await;
    assert!(json["errors"].is_array());
}

#[rstest]
#[tokio::test]
async fn it_should_add_get_list_and_remove_recipes(#[future] app: Application) {
    let app = app.await;

    let added = add_recipe(&app, "Pancakes").await;
    let id = added["data"]["addRecipe"]["id"].as_str().unwrap().to_string();
    assert_eq!(added["data"]["addRecipe"]["title"], "Pancakes");
    assert_eq!(added["data"]["addRecipe"]["ingredients"], json!(["Flour"]));
    assert!(added["data"]["addRecipe"]["creationDate"].is_string());
    add_recipe(&app, "Waffles").await;

    let fetched = read_json(
        app.handle(graphql_post(
            "/api/graphql",
            "query Get($id: ID!) { recipe(id: $id) { title } }",
            json!({ "id": id }),
        ))
        .await,
    )
    .await;
    assert_eq!(fetched["data"]["recipe"]["title"], "Pancakes");

    let paged = read_json(
        app.handle(graphql_post(
            "/api/graphql",
            "{ recipes(skip: 1, take: 1) { title } }",
            Value::Null,
        ))
        .await,
    )
    .await;
    assert_eq!(paged["data"]["recipes"], json!([{ "title": "Waffles" }]));

    let remove = "mutation Remove($id: ID!) { removeRecipe(id: $id) }";
    let removed = read_json(
        app.handle(graphql_post("/api/graphql", remove, json!({ "id": id })))
            .await,
    )
    .await;
    assert_eq!(removed["data"]["removeRecipe"], true);
    let removed_again = read_json(
        app.handle(graphql_post("/api/graphql", remove, json!({ "id": id })))
            .await,
    )
    .await;
    assert_eq!(removed_again["data"]["removeRecipe"], false);

    assert_eq!(recipe_titles(&app).await, vec!["Waffles".to_string()]);
}

#[rstest]
#[tokio::test]
async fn it_should_build_independent_applications() {
    let (first_config, second_config) = (test_config(), test_config());
    let (first, second) = tokio::join!(create_app(&first_config), create_app(&second_config));
    let (first, second) = (first.unwrap(), second.unwrap());

    add_recipe(&first, "Pancakes").await;

    assert_eq!(recipe_titles(&first).await, vec!["Pancakes".to_string()]);
    assert!(recipe_titles(&second).await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_allow_any_origin(#[future] app: Application) {
    let response = app
        .await
        .handle(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/graphql")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[rstest]
#[tokio::test]
async fn it_should_reach_the_subscription_route_under_the_prefix(#[future] app: Application) {
    let app = app.await;
    let plain_get = |path: &str| Request::get(path).body(Body::empty()).unwrap();

    let prefixed = app.handle(plain_get("/api/graphql/ws")).await;
    assert_ne!(prefixed.status(), StatusCode::NOT_FOUND);
    assert!(prefixed.status().is_client_error());

    let unprefixed = app.handle(plain_get("/graphql/ws")).await;
    assert_eq!(unprefixed.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_serve_graphiql_on_get() {
    let app = create_app(&test_config()).await.unwrap();

    let response = app
        .handle(Request::get("/api/graphql").body(Body::empty()).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
}

#[rstest]
#[tokio::test]
async fn it_should_execute_get_queries_without_the_playground() {
    let mut config = test_config();
    config.graphql.playground = false;
    let app = create_app(&config).await.unwrap();

    let response = app
        .handle(
            Request::get("/api/graphql?query=%7B%20recipes%20%7B%20id%20%7D%20%7D")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let json = read_json(response).await;
    assert_eq!(json["data"]["recipes"], json!([]));
}

#[rstest]
#[tokio::test]
async fn it_should_mount_graphql_at_the_root_when_the_prefix_is_not_used() {
    let mut config = test_config();
    config.graphql.use_global_prefix = false;
    let app = create_app(&config).await.unwrap();

    let root = app
        .handle(graphql_post("/graphql", "{ recipes { id } }", Value::Null))
        .await;
    let prefixed = app
        .handle(graphql_post("/api/graphql", "{ recipes { id } }", Value::Null))
        .await;

    assert_eq!(root.status(), StatusCode::OK);
    assert_eq!(prefixed.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_not_mount_the_websocket_route_when_subscriptions_are_off() {
    let mut config = test_config();
    config.graphql.subscriptions = false;
    let app = create_app(&config).await.unwrap();

    let response = app
        .handle(Request::get("/api/graphql/ws").body(Body::empty()).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_reject_queries_above_the_complexity_limit() {
    let mut config = test_config();
    config.graphql.complexity_limit = 2;
    let app = create_app(&config).await.unwrap();

    let response = app
        .handle(graphql_post(
            "/api/graphql",
            "{ recipes { id title description } }",
            Value::Null,
        ))
        .await;

    let json = read_json(response).await;
    assert!(json["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("complex"));
}
