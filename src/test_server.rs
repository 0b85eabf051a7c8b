//! One-shot HTTP server for exercising the client in tests

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Nothing listens on port 1 on loopback
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub struct CannedServer {
    pub url: String,
    request: oneshot::Receiver<String>,
}

impl CannedServer {
    /// Request head received by the server
    pub async fn request(self) -> String {
        self.request.await.unwrap_or_default()
    }
}

/// Accept a single connection and answer it with `status` and `body`
pub async fn serve_once(status: &'static str, body: &'static str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
    });

    CannedServer {
        url: format!("http://{}", addr),
        request: rx,
    }
}
