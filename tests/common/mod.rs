//! Shared utilities for integration tests.
//!
//! Origins are raw TCP servers speaking just enough HTTP/1.1 to answer one
//! request per connection, so tests control every byte the edge sees.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use article_edge::{EdgeConfig, EdgeServer, Shutdown};

/// One request as the origin saw it on the wire.
#[derive(Debug, Clone)]
pub struct OriginRequest {
    pub method: String,
    /// Path plus query exactly as written on the request line.
    pub target: String,
    /// The raw head, request line included.
    pub head: String,
    pub body: Vec<u8>,
}

/// What the origin answers with.
pub struct OriginReply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl OriginReply {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Start a mock origin on an ephemeral port. Every connection carries one
/// request, parsed and handed to `f`; the reply closes the connection.
pub async fn start_origin<F>(f: F) -> SocketAddr
where
    F: Fn(&OriginRequest) -> OriginReply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let _ = serve_one(socket, f).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Boot the edge against the given origin. Returns the edge address and the
/// shutdown handle that keeps it alive.
pub async fn start_edge(origin: SocketAddr) -> (SocketAddr, Shutdown) {
    let mut config = EdgeConfig::default();
    config.upstream.origin = format!("http://{origin}");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = EdgeServer::new(&config).unwrap();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    wait_until_ready(addr).await;
    (addr, shutdown)
}

/// Client with redirects disabled: any 3xx reaching it must have escaped
/// the edge unswallowed.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

/// Poll until the address accepts connections.
pub async fn wait_until_ready(addr: SocketAddr) {
    for _ in 0..50 {
        if TcpStream::connect(addr).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server at {addr} never became ready");
}

async fn serve_one<F>(mut socket: TcpStream, f: Arc<F>) -> std::io::Result<()>
where
    F: Fn(&OriginRequest) -> OriginReply + Send + Sync + 'static,
{
    let request = read_request(&mut socket).await?;
    let reply = f(&request);

    let status_text = match reply.status {
        200 => "200 OK",
        201 => "201 Created",
        301 => "301 Moved Permanently",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        other => return Err(std::io::Error::other(format!("unmapped status {other}"))),
    };

    let mut response = format!("HTTP/1.1 {status_text}\r\n");
    for (name, value) in &reply.headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.body.len(),
        reply.body
    ));

    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await?;
    Ok(())
}

async fn read_request(socket: &mut TcpStream) -> std::io::Result<OriginRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let head_end = loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Err(std::io::Error::other("connection closed before head"));
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut parts = head.lines().next().unwrap_or_default().split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut raw_body = buf[head_end + 4..].to_vec();
    let body = if header_value(&head, "transfer-encoding").is_some_and(|v| v.contains("chunked")) {
        while !raw_body.ends_with(b"0\r\n\r\n") {
            let n = socket.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            raw_body.extend_from_slice(&chunk[..n]);
        }
        decode_chunked(&raw_body)
    } else {
        let content_length = header_value(&head, "content-length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        while raw_body.len() < content_length {
            let n = socket.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            raw_body.extend_from_slice(&chunk[..n]);
        }
        raw_body.truncate(content_length);
        raw_body
    };

    Ok(OriginRequest {
        method,
        target,
        head,
        body,
    })
}

fn header_value<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().skip(1).find_map(|line| {
        let (n, v) = line.split_once(':')?;
        n.eq_ignore_ascii_case(name).then(|| v.trim())
    })
}

fn decode_chunked(mut raw: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    loop {
        let Some(line_end) = raw.windows(2).position(|w| w == b"\r\n") else {
            break;
        };
        let size_line = String::from_utf8_lossy(&raw[..line_end]);
        let size = usize::from_str_radix(size_line.trim(), 16).unwrap_or(0);
        if size == 0 {
            break;
        }
        let start = line_end + 2;
        body.extend_from_slice(&raw[start..start + size]);
        raw = &raw[start + size + 2..];
    }
    body
}
