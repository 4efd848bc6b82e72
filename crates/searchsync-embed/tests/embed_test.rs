//! Integration tests for the embedding client.
//!
//! A one-shot HTTP server on a loopback port stands in for the embeddings
//! endpoint and hands back the raw request for inspection.

use searchsync_embed::{EmbedError, EmbeddingClient, EmbeddingConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one request with `status` and `body`, returning the request
/// head and body as text.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0_u8; 4096];
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

    (base, handle)
}

/// True once the headers and a `Content-Length` sized body have arrived.
fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some(head_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..head_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    request.len() >= head_end + 4 + content_length
}

fn config(endpoint: &str) -> EmbeddingConfig {
    EmbeddingConfig {
        api_key: "test-key".to_string(),
        endpoint: endpoint.to_string(),
        api_version: "2024-02-01".to_string(),
        deployment: "embed-small".to_string(),
    }
}

#[tokio::test]
async fn test_embed_returns_first_embedding() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"data": [{"index": 0, "embedding": [0.25, -0.5, 1.0]}, {"index": 1, "embedding": [9.0]}]}"#,
    )
    .await;

    let client = EmbeddingClient::new(config(&base)).unwrap();
    let vector = client.embed("hello").await.unwrap();

    assert_eq!(vector, vec![0.25, -0.5, 1.0]);

    let request = server.await.unwrap();
    assert!(request
        .starts_with("POST /openai/deployments/embed-small/embeddings?api-version=2024-02-01 "));
    assert!(request.to_lowercase().contains("api-key: test-key"));
    assert!(request.contains(r#""input":"hello""#));
    assert!(request.contains(r#""model":"embed-small""#));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let (base, server) = serve_once(
        "401 Unauthorized",
        r#"{"error": {"code": "401", "message": "Access denied"}}"#,
    )
    .await;

    let client = EmbeddingClient::new(config(&base)).unwrap();
    let err = client.embed("hello").await.unwrap_err();

    match err {
        EmbedError::Http { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Access denied"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn test_empty_data_is_an_error() {
    let (base, server) = serve_once("200 OK", r#"{"data": []}"#).await;

    let client = EmbeddingClient::new(config(&base)).unwrap();
    let err = client.embed("hello").await.unwrap_err();

    assert!(matches!(err, EmbedError::EmptyResponse));
    server.await.unwrap();
}

#[tokio::test]
async fn test_empty_text_is_rejected_without_request() {
    // Nothing listens here; reaching the network would surface as a request
    // error rather than EmptyInput.
    let client = EmbeddingClient::new(config("http://127.0.0.1:9")).unwrap();
    let err = client.embed("   ").await.unwrap_err();
    assert!(matches!(err, EmbedError::EmptyInput));
}

#[test]
fn test_missing_api_key_fails_before_network() {
    let err = EmbeddingConfig::from_lookup(|key| match key {
        "AZURE_OPENAI_ENDPOINT" => Some("http://127.0.0.1:9".to_string()),
        "AZURE_OPENAI_API_VERSION" => Some("2024-02-01".to_string()),
        "AZURE_OPENAI_EMBEDDING_DEPLOYMENT" => Some("embed-small".to_string()),
        _ => None,
    })
    .unwrap_err();

    assert!(matches!(err, EmbedError::MissingSetting { ref env_var } if env_var == "AZURE_OPENAI_API_KEY"));
}
