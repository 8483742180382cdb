//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use ada_relay::config::RelayConfig;
use ada_relay::{HttpServer, Shutdown};

/// A request captured by the mock gateway.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub body: String,
}

/// Start a programmable mock upstream gateway on an ephemeral port.
///
/// The handler receives each captured request and returns (status, JSON body).
pub async fn start_mock_gateway<F>(handler: F) -> SocketAddr
where
    F: Fn(&CapturedRequest) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        let mut raw = Vec::new();
                        let mut chunk = [0u8; 4096];
                        let request = loop {
                            let n = match socket.read(&mut chunk).await {
                                Ok(0) | Err(_) => return,
                                Ok(n) => n,
                            };
                            raw.extend_from_slice(&chunk[..n]);
                            if let Some(parsed) = parse_request(&raw) {
                                break parsed;
                            }
                        };

                        let (status, body) = handler(&request);
                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Parse an HTTP/1.1 request once the head and declared body are complete.
fn parse_request(raw: &[u8]) -> Option<CapturedRequest> {
    let head_end = raw.windows(4).position(|w| w == b"\r\n\r\n")?;
    let head = String::from_utf8_lossy(&raw[..head_end]);

    let mut lines = head.lines();
    let request_line = lines.next()?;
    let path = request_line.split_whitespace().nth(1)?.to_string();

    let mut api_key = None;
    let mut content_length = 0usize;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "x-api-key" => api_key = Some(value.trim().to_string()),
            "content-length" => content_length = value.trim().parse().ok()?,
            _ => {}
        }
    }

    let body = &raw[head_end + 4..];
    if body.len() < content_length {
        return None;
    }

    Some(CapturedRequest {
        path,
        api_key,
        body: String::from_utf8_lossy(&body[..content_length]).to_string(),
    })
}

/// Start a relay wired to the given mock gateway, returning its address.
pub async fn start_relay(gateway_addr: SocketAddr) -> SocketAddr {
    let mut config = RelayConfig::default();
    config.gateway.base_url = format!("http://{}", gateway_addr);
    config.gateway.api_key = "test-key".to_string();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    // The coordinator must outlive the helper or the server would see an
    // immediate shutdown; leak it for the life of the test process.
    let shutdown = Box::leak(Box::new(Shutdown::new()));
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    addr
}
