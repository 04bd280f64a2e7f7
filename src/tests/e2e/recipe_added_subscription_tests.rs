use crate::shell::factory::{Application, create_app};
use crate::tests::fixtures::app::{graphql_post, test_config};
use futures::{SinkExt, StreamExt};
use serde_json::{Value, json};
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

const ADD_SOUP: &str =
    r#"mutation { addRecipe(newRecipeData: { title: "Soup", ingredients: ["Water"] }) { id } }"#;

#[tokio::test]
async fn it_should_stream_recipes_added_after_subscribing() {
    let app = create_app(&test_config()).await.unwrap();
    let schema = app.schema().clone();
    let mut stream = schema.execute_stream("subscription { recipeAdded { title ingredients } }");

    let mutating = app.schema().clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        mutating.execute(ADD_SOUP).await
    });

    let response = tokio::time::timeout(Duration::from_secs(2), stream.next())
        .await
        .expect("no recipeAdded event within 2s")
        .expect("subscription stream ended");

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    assert_eq!(data["recipeAdded"]["title"], "Soup");
    assert_eq!(data["recipeAdded"]["ingredients"], json!(["Water"]));
}

async fn serve(app: &Application) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let router = app.router();
    tokio::spawn(async move { axum::serve(listener, router).await });
    format!("ws://{address}/api/graphql/ws")
}

async fn send_json(socket: &mut Socket, message: Value) {
    socket.send(Message::text(message.to_string())).await.unwrap();
}

/// Next text frame as JSON, or `None` when nothing arrives in time.
async fn next_json(socket: &mut Socket, wait: Duration) -> Option<Value> {
    loop {
        let frame = tokio::time::timeout(wait, socket.next()).await.ok()??.unwrap();
        if let Message::Text(text) = frame {
            return Some(serde_json::from_str(text.as_str()).unwrap());
        }
    }
}

#[tokio::test]
async fn it_should_deliver_recipe_added_over_the_prefixed_websocket_route() {
    let app = create_app(&test_config()).await.unwrap();
    let url = serve(&app).await;

    let mut request = url.into_client_request().unwrap();
    request.headers_mut().insert(
        "sec-websocket-protocol",
        HeaderValue::from_static("graphql-transport-ws"),
    );
    let (mut socket, _) = connect_async(request).await.unwrap();

    send_json(&mut socket, json!({ "type": "connection_init" })).await;
    let ack = next_json(&mut socket, Duration::from_secs(2)).await.unwrap();
    assert_eq!(ack["type"], "connection_ack");

    send_json(
        &mut socket,
        json!({
            "id": "1",
            "type": "subscribe",
            "payload": { "query": "subscription { recipeAdded { title ingredients } }" }
        }),
    )
    .await;

    // The server registers the subscription asynchronously; keep adding until
    // an event comes back.
    let mut delivered = None;
    for _ in 0..10 {
        app.handle(graphql_post("/api/graphql", ADD_SOUP, Value::Null)).await;
        if let Some(message) = next_json(&mut socket, Duration::from_millis(200)).await {
            delivered = Some(message);
            break;
        }
    }

    let message = delivered.expect("no recipeAdded event over the websocket");
    assert_eq!(message["type"], "next");
    assert_eq!(message["id"], "1");
    assert_eq!(message["payload"]["data"]["recipeAdded"]["title"], "Soup");
    assert_eq!(
        message["payload"]["data"]["recipeAdded"]["ingredients"],
        json!(["Water"])
    );
}
