//! Minimal HTTP/1.1 server that serves one static body for integration tests.
//!
//! Every GET receives the body with 200 OK, except the first `fail_first`
//! requests, which receive `fail_status`. Anything else gets 405.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct ImageServerOptions {
    /// Number of leading GETs answered with `fail_status`.
    pub fail_first: usize,
    /// Status line used for failed requests.
    pub fail_status: &'static str,
}

impl Default for ImageServerOptions {
    fn default() -> Self {
        Self {
            fail_first: 0,
            fail_status: "503 Service Unavailable",
        }
    }
}

/// Handle to a running server.
pub struct ImageServer {
    /// Base URL ending in `/`, e.g. "http://127.0.0.1:12345/".
    pub base_url: String,
    requests: Arc<AtomicUsize>,
}

impl ImageServer {
    /// URL of `name` on this server.
    pub fn url(&self, name: &str) -> String {
        format!("{}{}", self.base_url, name)
    }

    /// GET requests received so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body`. It runs until the process exits.
pub fn start(body: Vec<u8>) -> ImageServer {
    start_with_options(body, ImageServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: ImageServerOptions) -> ImageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let counter = Arc::clone(&counter);
            thread::spawn(move || handle(stream, &body, &counter, opts));
        }
    });
    ImageServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    counter: &AtomicUsize,
    opts: ImageServerOptions,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let method = request.split_whitespace().next().unwrap_or("");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let seen = counter.fetch_add(1, Ordering::SeqCst);
    if seen < opts.fail_first {
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            opts.fail_status
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
