// tests/common/mod.rs
//
// Fixtures shared by the integration tests: report page HTML and a tiny
// single-threaded HTTP server standing in for the portal.
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

pub const SCENARIO_PAGE: &str = r#"<!doctype html>
<html><head><title>Report</title></head><body>
<nav><a href="/Report">Report</a></nav>
<table class="table table-striped">
  <thead><tr><th>#</th><th> Site </th><th>Status</th></tr></thead>
  <tbody>
    <tr><td>1</td><td>A</td><td>Online</td></tr>
    <tr><td>2</td><td>B</td><td>Offline</td></tr>
  </tbody>
</table>
</body></html>"#;

/// Build a page with `rows` of (site, status) under `#`, `Site`, `Region`, `Status`.
pub fn page_with(rows: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (i, (site, status)) in rows.iter().enumerate() {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{site}</td><td>R{}</td><td>{status}</td></tr>\n",
            i + 1,
            i % 3
        ));
    }
    format!(
        "<table><thead><tr><th>#</th><th>Site</th><th>Region</th><th>Status</th></tr></thead>\n<tbody>\n{body}</tbody></table>"
    )
}

pub fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw HTTP/1.1 response with `Connection: close`.
pub fn response(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut extra = String::new();
    for (k, v) in headers {
        extra.push_str(&format!("{k}: {v}\r\n"));
    }
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n{extra}\r\n{body}",
        body.len()
    )
}

/// Serve forever on an ephemeral port; returns the base URL.
pub fn serve<F>(handler: F) -> String
where
    F: Fn(&Request) -> String + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            if let Some(req) = read_request(&stream) {
                let resp = handler(&req);
                let _ = stream.write_all(resp.as_bytes());
                let _ = stream.flush();
            }
        }
    });
    format!("http://{addr}")
}

fn read_request(stream: &TcpStream) -> Option<Request> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);

    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut headers = Vec::new();
    loop {
        let mut h = String::new();
        reader.read_line(&mut h).ok()?;
        let h = h.trim_end();
        if h.is_empty() {
            break;
        }
        if let Some((k, v)) = h.split_once(':') {
            headers.push((k.trim().to_string(), v.trim().to_string()));
        }
    }

    let len = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).ok()?;

    Some(Request { method, path, headers, body: String::from_utf8_lossy(&buf).into_owned() })
}
