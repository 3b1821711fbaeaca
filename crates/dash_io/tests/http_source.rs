//! HTTP loading against a one-shot local server.

#![cfg(feature = "http")]

use dash_io::{HttpSource, LoadError, ReportLoader};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const FIXTURE: &str = include_str!("../../../fixtures/analysis.json");

/// Serve one canned response and return the base URL plus the request line seen.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = sock.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let resp = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(resp.as_bytes()).await.unwrap();
        sock.shutdown().await.unwrap();
        let text = String::from_utf8_lossy(&buf).to_string();
        text.lines().next().unwrap_or_default().to_string()
    });
    (format!("http://{addr}/site"), handle)
}

#[tokio::test]
async fn fetches_relative_path_under_base() {
    let (base, server) = serve_once("200 OK", FIXTURE).await;
    let loader = ReportLoader::new(Box::new(HttpSource::new(&base).unwrap()));
    let loaded = loader.load().await.unwrap();
    assert_eq!(loaded.report.scenarios.len(), 3);

    let request_line = server.await.unwrap();
    assert_eq!(request_line, "GET /site/data/analysis.json HTTP/1.1");
}

#[tokio::test]
async fn not_found_is_a_status_error() {
    let (base, server) = serve_once("404 Not Found", "").await;
    let loader = ReportLoader::new(Box::new(HttpSource::new(&base).unwrap()));
    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404, .. }), "got {err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn refused_connection_is_unreachable() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let loader = ReportLoader::new(Box::new(HttpSource::new(&format!("http://{addr}/")).unwrap()));
    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, LoadError::Unreachable { .. }), "got {err:?}");
}
