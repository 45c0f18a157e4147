//! HTTP-level tests for the meme campaign client and the image downloader
//!
//! Each test starts a one-shot HTTP server on localhost that records the
//! request head and replies with a canned response.

use memegen_app::actions::Downloader;
use memegen_app::api::{
    http_client, resolve, Resolution, GENERIC_FAILURE_MESSAGE, RATE_LIMIT_MESSAGE,
    TIMEOUT_MESSAGE,
};
use memegen_app::{ApiOutcome, HttpMemeApi, MemeApi};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_test::{assert_err, assert_ok};

/// Serve exactly one response, returning the base URL and a handle that
/// yields the request head.
async fn serve_once(
    status: u16,
    content_type: &str,
    body: Vec<u8>,
) -> (String, JoinHandle<String>) {
    let mut response = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(&body);
    serve_raw(response).await
}

/// Write `response` verbatim after reading the request head, then close
async fn serve_raw(response: Vec<u8>) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut chunk = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&chunk[..n]);
        }

        socket.write_all(&response).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&head).into_owned()
    });

    (format!("http://{}", addr), handle)
}

fn request_line(head: &str) -> &str {
    head.lines().next().unwrap_or_default()
}

#[tokio::test]
async fn test_post_carries_url_and_count_in_query() {
    let body = include_str!("fixtures/meme_campaign/success.json");
    let (base, server) = serve_once(200, "application/json", body.into()).await;

    let api = HttpMemeApi::new(base).unwrap();
    let outcome = api.generate("https://example.com/a b?x=1", 3).await;

    let head = server.await.unwrap();
    let line = request_line(&head);
    assert!(line.starts_with("POST /meme_campaign?"), "got {line}");
    assert!(line.contains("url=https%3A%2F%2Fexample.com%2Fa+b%3Fx%3D1"), "got {line}");
    assert!(line.contains("num_memes=3"), "got {line}");
    // No custom headers on the campaign request
    assert!(!head.to_ascii_lowercase().contains("user-agent"), "got {head}");

    match resolve(outcome) {
        Resolution::Memes(memes) => {
            assert_eq!(memes.len(), 3);
            assert_eq!(memes[0], "https://cdn.example.com/memes/a1.png");
        }
        other => panic!("expected memes, got {other:?}"),
    }
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_ignored() {
    let body = include_str!("fixtures/meme_campaign/success.json");
    let (base, server) = serve_once(200, "application/json", body.into()).await;

    let api = HttpMemeApi::new(format!("{base}/")).unwrap();
    api.generate("https://example.com", 1).await;

    let head = server.await.unwrap();
    assert!(request_line(&head).starts_with("POST /meme_campaign?"));
}

#[tokio::test]
async fn test_server_reported_error_in_success_body() {
    let body = include_str!("fixtures/meme_campaign/api_error.json");
    let (base, server) = serve_once(200, "application/json", body.into()).await;

    let outcome = HttpMemeApi::new(base)
        .unwrap()
        .generate("https://example.com", 1)
        .await;
    server.await.unwrap();

    match resolve(outcome) {
        Resolution::Failed(failure) => {
            assert_eq!(failure.message, "Could not extract content from page");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_uses_server_message() {
    let body = include_str!("fixtures/meme_campaign/rate_limited.json");
    let (base, server) = serve_once(429, "application/json", body.into()).await;

    let outcome = HttpMemeApi::new(base)
        .unwrap()
        .generate("https://example.com", 2)
        .await;
    server.await.unwrap();

    assert!(matches!(outcome, ApiOutcome::HttpError { status: 429, .. }));
    match resolve(outcome) {
        Resolution::Failed(failure) => {
            assert_eq!(failure.message, "Too many requests, slow down");
            assert_eq!(failure.status, 429);
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_with_html_body_uses_default_message() {
    let (base, server) = serve_once(429, "text/html", b"<h1>slow</h1>".to_vec()).await;

    let outcome = HttpMemeApi::new(base)
        .unwrap()
        .generate("https://example.com", 2)
        .await;
    server.await.unwrap();

    match resolve(outcome) {
        Resolution::Failed(failure) => assert_eq!(failure.message, RATE_LIMIT_MESSAGE),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_gateway_timeout_ignores_body() {
    let body = include_str!("fixtures/meme_campaign/api_error.json");
    let (base, server) = serve_once(504, "application/json", body.into()).await;

    let outcome = HttpMemeApi::new(base)
        .unwrap()
        .generate("https://example.com", 5)
        .await;
    server.await.unwrap();

    match resolve(outcome) {
        Resolution::Failed(failure) => assert_eq!(failure.message, TIMEOUT_MESSAGE),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_other_status_is_generic_failure() {
    let (base, server) = serve_once(500, "text/plain", b"boom".to_vec()).await;

    let outcome = HttpMemeApi::new(base)
        .unwrap()
        .generate("https://example.com", 1)
        .await;
    server.await.unwrap();

    match resolve(outcome) {
        Resolution::Failed(failure) => {
            assert_eq!(failure.message, GENERIC_FAILURE_MESSAGE);
            assert_eq!(failure.status, 500);
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let outcome = HttpMemeApi::new(format!("http://{addr}"))
        .unwrap()
        .generate("https://example.com", 1)
        .await;

    assert!(matches!(outcome, ApiOutcome::TransportError { .. }));
    match resolve(outcome) {
        Resolution::Failed(failure) => {
            assert_eq!(failure.message, GENERIC_FAILURE_MESSAGE);
            assert_eq!(failure.status, 0);
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_truncated_success_body_is_transport_error() {
    let response = b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 500\r\n\r\n{\"meme_images\":[\"a".to_vec();
    let (base, server) = serve_raw(response).await;

    let outcome = HttpMemeApi::new(base)
        .unwrap()
        .generate("https://example.com", 1)
        .await;
    server.await.unwrap();

    assert!(
        matches!(outcome, ApiOutcome::TransportError { .. }),
        "got {outcome:?}"
    );
    match resolve(outcome) {
        Resolution::Failed(failure) => {
            assert_eq!(failure.message, GENERIC_FAILURE_MESSAGE);
            assert_eq!(failure.label, "unknown_error");
            assert_eq!(failure.status, 0);
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_downloader_saves_image_bytes() {
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];
    let (base, server) = serve_once(200, "image/png", png.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested");

    let downloader = Downloader::new(http_client().unwrap(), &target);
    let path = assert_ok!(
        downloader
            .save(&format!("{base}/memes/a1.png"), "meme-1.png")
            .await
    );

    let head = server.await.unwrap();
    assert!(request_line(&head).starts_with("GET /memes/a1.png"));
    assert_eq!(path, target.join("meme-1.png"));
    assert_eq!(std::fs::read(&path).unwrap(), png);
}

#[tokio::test]
async fn test_downloader_reports_http_status() {
    let (base, server) = serve_once(404, "text/plain", b"missing".to_vec()).await;
    let dir = tempfile::tempdir().unwrap();

    let downloader = Downloader::new(http_client().unwrap(), dir.path());
    let err = assert_err!(
        downloader
            .save(&format!("{base}/gone.png"), "meme-2.png")
            .await
    );
    server.await.unwrap();

    assert!(err.to_string().contains("404"), "got {err}");
    assert!(!dir.path().join("meme-2.png").exists());
}
