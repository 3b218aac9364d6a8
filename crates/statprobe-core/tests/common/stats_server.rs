//! Minimal HTTP/1.1 server standing in for the stats endpoint in integration tests.
//!
//! Answers every GET with one canned status, content type and body, and
//! records the request header lines so tests can assert on them.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: &'static str,
    /// `None` omits the `Content-Type` header.
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
}

impl CannedResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: "200 OK",
            content_type: Some("application/json; charset=utf-8"),
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn text(body: &str) -> Self {
        Self {
            status: "200 OK",
            content_type: Some("text/plain"),
            body: body.as_bytes().to_vec(),
        }
    }
}

/// Handle to a running server; the server runs until the process exits.
pub struct StatsServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Vec<String>>>>,
}

impl StatsServer {
    /// Header lines of every request received so far (request line first).
    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn stats_url(&self) -> String {
        format!("{}api/stats", self.base_url)
    }
}

/// Starts a server in a background thread. `base_url` is e.g. "http://127.0.0.1:12345/".
pub fn start(response: CannedResponse) -> StatsServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    let response = Arc::new(response);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = Arc::clone(&response);
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &response, &recorded));
        }
    });
    StatsServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

/// Accepts connections but never answers; for timeout tests.
pub fn start_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    format!("http://127.0.0.1:{}/api/stats", port)
}

/// A URL on a port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/stats", port)
}

fn handle(mut stream: TcpStream, response: &CannedResponse, recorded: &Mutex<Vec<Vec<String>>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
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
    let lines: Vec<String> = request
        .lines()
        .map(str::trim)
        .take_while(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    recorded.lock().unwrap().push(lines);

    let content_type = response
        .content_type
        .map(|ct| format!("Content-Type: {}\r\n", ct))
        .unwrap_or_default();
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        response.status,
        response.body.len(),
        content_type
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
}

/// Case-insensitive header lookup in a recorded request.
pub fn header<'a>(request: &'a [String], name: &str) -> Option<&'a str> {
    request.iter().skip(1).find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.trim().eq_ignore_ascii_case(name).then(|| v.trim())
    })
}
