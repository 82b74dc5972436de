//! Drives the real subscription client against a local axum subscribe route.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};
use ui::newsletter::{NewsletterForm, StatusMessage, SubscribeClient, SubscribeOutcome};

struct Captured {
    content_type: Option<String>,
    payload: Value,
}

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    content_type: &'static str,
    body: &'static str,
    posts: Arc<AtomicUsize>,
    tx: Arc<Mutex<Option<oneshot::Sender<Captured>>>>,
}

struct TestServer {
    addr: SocketAddr,
    posts: Arc<AtomicUsize>,
    captured: oneshot::Receiver<Captured>,
}

impl TestServer {
    async fn captured(self) -> (Captured, usize) {
        let captured = tokio::time::timeout(Duration::from_secs(5), self.captured)
            .await
            .expect("subscribe route was hit")
            .expect("payload reported");
        (captured, self.posts.load(Ordering::SeqCst))
    }
}

async fn handle_subscribe(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    state.posts.fetch_add(1, Ordering::SeqCst);
    if let Some(tx) = state.tx.lock().await.take() {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let _ = tx.send(Captured {
            content_type,
            payload,
        });
    }
    (
        state.status,
        [(CONTENT_TYPE, state.content_type)],
        state.body,
    )
}

async fn spawn_subscribe_server(
    status: StatusCode,
    content_type: &'static str,
    body: &'static str,
) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, captured) = oneshot::channel();
    let posts = Arc::new(AtomicUsize::new(0));
    let state = ServerState {
        status,
        content_type,
        body,
        posts: posts.clone(),
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/api/subscribe", post(handle_subscribe))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    TestServer {
        addr,
        posts,
        captured,
    }
}

fn client_for(addr: SocketAddr) -> SubscribeClient {
    // Keep an ambient HTTP_PROXY from swallowing loopback traffic.
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("http client");
    SubscribeClient::with_http(http, format!("http://{addr}/api/subscribe"))
}

fn english() {
    ui::i18n::init();
    ui::i18n::set_language("en-US").expect("fallback bundle loads");
}

fn submitted(email: &str) -> (NewsletterForm, String) {
    let mut form = NewsletterForm::default();
    form.edit(email.into());
    let email = form.begin_submit().expect("submittable");
    assert!(form.loading);
    (form, email)
}

#[tokio::test]
async fn successful_submission_posts_once_and_clears_email() {
    english();
    let server = spawn_subscribe_server(
        StatusCode::OK,
        "application/json",
        r#"{"message":"Subscribed"}"#,
    )
    .await;
    let client = client_for(server.addr);

    let (mut form, email) = submitted("ana@example.com");
    let result = client.subscribe(&email).await;
    assert!(matches!(result, Ok(SubscribeOutcome::Subscribed)));
    form.finish(result);

    let (captured, posts) = server.captured().await;
    assert_eq!(captured.content_type.as_deref(), Some("application/json"));
    assert_eq!(captured.payload, json!({ "email": "ana@example.com" }));
    assert_eq!(posts, 1);

    assert!(!form.loading);
    assert!(form.email.is_empty());
    assert_eq!(form.message, Some(StatusMessage::Subscribed));
    assert_eq!(
        form.message.map(|m| m.text()).as_deref(),
        Some("Thanks for subscribing!")
    );
}

#[tokio::test]
async fn server_error_text_is_displayed_exactly() {
    let server = spawn_subscribe_server(
        StatusCode::CONFLICT,
        "application/json",
        r#"{"error":"Already subscribed"}"#,
    )
    .await;
    let client = client_for(server.addr);

    let (mut form, email) = submitted("ana@example.com");
    form.finish(client.subscribe(&email).await);
    let (_, posts) = server.captured().await;
    assert_eq!(posts, 1);

    assert!(!form.loading);
    assert_eq!(form.email, "ana@example.com");
    assert_eq!(
        form.message.map(|m| m.text()).as_deref(),
        Some("Already subscribed")
    );
}

#[tokio::test]
async fn non_json_reply_maps_to_connectivity_message() {
    english();
    let server = spawn_subscribe_server(
        StatusCode::BAD_GATEWAY,
        "text/html",
        "<html>upstream down</html>",
    )
    .await;
    let client = client_for(server.addr);

    let (mut form, email) = submitted("ana@example.com");
    form.finish(client.subscribe(&email).await);
    server.captured().await;

    assert_eq!(form.message, Some(StatusMessage::Unreachable));
    assert!(!form.loading);
}

#[tokio::test]
async fn refused_connection_maps_to_connectivity_message() {
    english();
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        listener.local_addr().expect("local addr")
    };
    let client = client_for(addr);

    let (mut form, email) = submitted("ana@example.com");
    form.finish(client.subscribe(&email).await);

    assert!(!form.loading);
    assert_eq!(form.email, "ana@example.com");
    assert_eq!(
        form.message.map(|m| m.text()).as_deref(),
        Some("Unable to reach the server. Please try again later.")
    );
}
