//! Shared helpers for integration tests

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve one canned HTTP response on a local port
///
/// Returns the endpoint url and a handle resolving to the raw request head.
pub async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{}/v2/top-headlines", addr), handle)
}

/// A headlines body with the two-article pets feed
#[allow(dead_code)]
pub const PETS_BODY: &str = r#"{
    "status": "ok",
    "totalResults": 2,
    "articles": [
        {"title": "Cats", "content": "purr", "category": "Pets", "url": "https://example.com/cats"},
        {"title": "Dogs", "content": "bark", "category": "Pets", "url": "https://example.com/dogs"}
    ]
}"#;
