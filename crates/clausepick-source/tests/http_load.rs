#![cfg(feature = "http")]

use clausepick_source::{ClauseSource, DataLoadError, HttpClauseSource};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned response on a loopback port and return its URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let mut read = 0;
        loop {
            let n = socket.read(&mut buf[read..]).await.unwrap();
            read += n;
            if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });
    format!("http://{addr}/exec")
}

#[tokio::test]
async fn loads_clause_list() {
    let url = serve_once(
        "200 OK",
        r#"{"data":[["43.02","Commercial 1 Zone","C1Z","Permit required for..."],["44.01","Residential Zone","R1Z","..."]]}"#,
    )
    .await;
    let dataset = HttpClauseSource::new(url).load().await.unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records()[0].identifier, "43.02");
}

#[tokio::test]
async fn server_error_carries_status() {
    let url = serve_once("500 Internal Server Error", "oops").await;
    let err = HttpClauseSource::new(url).load().await.unwrap_err();
    assert!(matches!(err, DataLoadError::Status { status: 500 }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn html_body_is_malformed() {
    let url = serve_once("200 OK", "<!DOCTYPE html><p>Sign in</p>").await;
    let err = HttpClauseSource::new(url).load().await.unwrap_err();
    assert!(matches!(err, DataLoadError::Malformed(_)));
}

#[tokio::test]
async fn wrong_shape_is_rejected() {
    let url = serve_once("200 OK", r#"{"result":"ok"}"#).await;
    let err = HttpClauseSource::new(url).load().await.unwrap_err();
    assert!(matches!(err, DataLoadError::Shape { .. }));
}

#[tokio::test]
async fn empty_list_is_not_success() {
    let url = serve_once("200 OK", r#"{"data":[]}"#).await;
    let err = HttpClauseSource::new(url).load().await.unwrap_err();
    assert!(matches!(err, DataLoadError::Empty));
}
