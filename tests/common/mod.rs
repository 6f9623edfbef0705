//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Request heads received by a mock backend.
pub type RequestLog = Arc<Mutex<Vec<String>>>;

/// Build a single-part multipart body around `frame`.
pub fn multipart_body(boundary: &str, content_type: Option<&str>, frame: &[u8]) -> Vec<u8> {
    let mut body = format!("--{}\r\n", boundary).into_bytes();
    if let Some(content_type) = content_type {
        body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(frame);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}

/// Start a mock WADO-RS backend that answers every request with `status`
/// and `body`, recording each request head.
pub async fn start_mock_backend(status: u16, body: Vec<u8>) -> (SocketAddr, RequestLog) {
    start_delayed_backend(status, body, Duration::ZERO).await
}

/// Like `start_mock_backend`, waiting `delay` before responding.
pub async fn start_delayed_backend(
    status: u16,
    body: Vec<u8>,
    delay: Duration,
) -> (SocketAddr, RequestLog) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let body = Arc::new(body);

    let requests = log.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let body = body.clone();
                    let requests = requests.clone();
                    tokio::spawn(async move {
                        let head = read_request_head(&mut socket).await;
                        requests.lock().unwrap().push(head);

                        tokio::time::sleep(delay).await;

                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            406 => "406 Not Acceptable",
                            500 => "500 Internal Server Error",
                            _ => "200 OK",
                        };
                        let head = format!(
                            "HTTP/1.1 {}\r\nContent-Type: multipart/related; type=\"application/octet-stream\"\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                            status_text,
                            body.len()
                        );
                        let _ = socket.write_all(head.as_bytes()).await;
                        let _ = socket.write_all(&body).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, log)
}

async fn read_request_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}
