// ABOUTME: Tests for the Gemini REST client against a one-shot local HTTP server
// Verifies request shape, header authentication and error mapping without network access

use gemini_chat::gemini::{GeminiClient, GenerationError, ModelClient};
use gemini_chat::models::ModelId;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Local client that ignores any proxy configured in the environment
fn local_client(base_url: String) -> GeminiClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    GeminiClient::with_http_client(http, base_url)
}

/// Serves exactly one request with the given status line and JSON body,
/// returning the raw request text once the exchange is finished.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1beta", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request).into_owned()
    });

    (base_url, handle)
}

fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    request.len() >= header_end + 4 + content_length
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello from Gemini"}]}}]}"#,
    )
    .await;

    let client = local_client(base_url);
    let handle = client.configure("AIza-test-key").unwrap();
    let text = client
        .generate(&handle, ModelId::Gemini15Flash, "Hello")
        .await
        .unwrap();

    assert_eq!(text, "Hello from Gemini");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /v1beta/models/gemini-1.5-flash:generateContent HTTP/1.1"));
    assert!(request.to_lowercase().contains("x-goog-api-key: aiza-test-key"));
    assert!(request.contains(r#"{"contents":[{"role":"user","parts":[{"text":"Hello"}]}]}"#));
}

#[tokio::test]
async fn test_generate_maps_api_error_envelope() {
    let (base_url, server) = serve_once(
        "400 Bad Request",
        r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#,
    )
    .await;

    let client = local_client(base_url);
    let handle = client.configure("bad-key").unwrap();
    let err = client
        .generate(&handle, ModelId::Gemini10Pro, "Hi")
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Api { status: 400, .. }));
    assert_eq!(
        err.to_string(),
        "Gemini API returned 400: INVALID_ARGUMENT: API key not valid. Please pass a valid API key."
    );
    server.await.unwrap();
}

#[tokio::test]
async fn test_generate_rejects_undecodable_body() {
    let (base_url, server) = serve_once("200 OK", "not json").await;

    let client = local_client(base_url);
    let handle = client.configure("AIza-test-key").unwrap();
    let err = client
        .generate(&handle, ModelId::Gemini10Pro, "Hi")
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Decode(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_generate_reports_connection_failure() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = local_client(format!("http://{}/v1beta", addr));
    let handle = client.configure("AIza-test-key").unwrap();
    let err = client
        .generate(&handle, ModelId::Gemini10Pro, "Hi")
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Request(_)));
    assert!(err.to_string().starts_with("Request to Gemini API failed"));
}
