//! Minimal HTTP/1.1 server that plays a content gateway for integration
//! tests.
//!
//! Serves a single static body with a configurable status line, optional
//! Content-Type, and an optional response delay. Counts connections so
//! tests can assert which gateways were contacted.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use ordhash_core::gateway::GatewayTemplate;

#[derive(Debug, Clone, Copy)]
pub struct GatewayServerOptions {
    /// HTTP status line suffix, e.g. "200 OK" or "404 Not Found".
    pub status: &'static str,
    /// Content-Type header to send; None omits the header.
    pub content_type: Option<&'static str>,
    /// Sleep before answering (simulates a stalled gateway).
    pub response_delay: Option<Duration>,
}

impl Default for GatewayServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: None,
            response_delay: None,
        }
    }
}

/// A running test gateway. The server runs until the process exits.
pub struct GatewayServer {
    base_url: String,
    hits: Arc<AtomicUsize>,
}

impl GatewayServer {
    /// Gateway template pointing at this server, in the production shape
    /// `http://host:port/content/{id}`.
    pub fn template(&self) -> GatewayTemplate {
        GatewayTemplate::new(format!("{}content/{{id}}", self.base_url))
    }

    /// Number of connections this server has accepted.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a gateway serving `body` with HTTP 200 and no Content-Type.
pub fn start(body: Vec<u8>) -> GatewayServer {
    start_with_options(body, GatewayServerOptions::default())
}

/// Like `start` but with a custom status, content type, or delay.
pub fn start_with_options(body: Vec<u8>, opts: GatewayServerOptions) -> GatewayServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            hits_srv.fetch_add(1, Ordering::SeqCst);
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    GatewayServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: GatewayServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(30)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(30)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    if let Some(delay) = opts.response_delay {
        thread::sleep(delay);
    }
    let content_type = match opts.content_type {
        Some(ct) => format!("Content-Type: {}\r\n", ct),
        None => String::new(),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        opts.status,
        body.len(),
        content_type
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
