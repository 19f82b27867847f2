//! CloudClient against a one-shot loopback HTTP server.
//!
//! Each fake server accepts a single connection, captures the request and
//! answers with a canned response, so the tests see exactly what goes on
//! the wire.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use smarti_agent::adapters::cloud::CloudClient;
use smarti_agent::app::model::SerialLine;
use smarti_agent::app::ports::{StatusPort, TelemetryPort};
use smarti_agent::error::{Error, NetworkError, ParseError};

const STATUS_PATH: &str = "/api/devicecontroller/getdevicestatus/1";
const TELEMETRY_PATH: &str = "/api/sensorcontroller/putsensordata";

struct Captured {
    request_line: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Captured {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((k, v)) = line.split_once(':') {
                headers.push((k.trim().to_ascii_lowercase(), v.trim().to_owned()));
            }
        }

        let len = headers
            .iter()
            .find(|(k, _)| k == "content-length")
            .map_or(0, |(_, v)| v.parse::<usize>().unwrap());
        let mut req_body = vec![0u8; len];
        reader.read_exact(&mut req_body).unwrap();

        write!(
            stream,
            "{status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();

        Captured {
            request_line: request_line.trim_end().to_owned(),
            headers,
            body: req_body,
        }
    });

    (base, handle)
}

fn client(base: &str) -> CloudClient {
    CloudClient::new(
        format!("{base}{STATUS_PATH}"),
        format!("{base}{TELEMETRY_PATH}"),
        Duration::from_secs(5),
    )
}

// ── GET ───────────────────────────────────────────────────────

#[test]
fn fetch_status_decodes_device_status() {
    let (base, server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"device_data":{"device_status":"ON"}}"#,
    );

    let status = client(&base).fetch_status().unwrap();

    assert_eq!(status.device_status(), "ON");
    let req = server.join().unwrap();
    assert_eq!(req.request_line, format!("GET {STATUS_PATH} HTTP/1.1"));
}

#[test]
fn fetch_status_reads_body_of_error_status() {
    let (base, server) = serve_once(
        "HTTP/1.1 404 Not Found",
        r#"{"device_data":{"device_status":"OFF"}}"#,
    );

    let status = client(&base).fetch_status().unwrap();

    assert_eq!(status.device_status(), "OFF");
    server.join().unwrap();
}

#[test]
fn fetch_status_rejects_non_json_body() {
    let (base, server) = serve_once("HTTP/1.1 502 Bad Gateway", "<html>bad gateway</html>");

    let err = client(&base).fetch_status().unwrap_err();

    assert!(matches!(err, Error::Parse(ParseError::Malformed(_))));
    server.join().unwrap();
}

// ── POST ──────────────────────────────────────────────────────

#[test]
fn upload_posts_raw_line_with_json_content_type() {
    let (base, server) = serve_once("HTTP/1.1 200 OK", "stored");

    let receipt = client(&base)
        .upload(&SerialLine::from(&b"23.5\n"[..]))
        .unwrap();

    assert_eq!(receipt.status, 200);
    assert_eq!(receipt.body, "stored");

    let req = server.join().unwrap();
    assert_eq!(req.request_line, format!("POST {TELEMETRY_PATH} HTTP/1.1"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("accept"), Some("text/plain"));
    assert_eq!(req.body, b"23.5\n");
}

#[test]
fn upload_of_initial_line_sends_single_space() {
    let (base, server) = serve_once("HTTP/1.1 200 OK", "");

    client(&base).upload(&SerialLine::initial()).unwrap();

    assert_eq!(server.join().unwrap().body, b" ");
}

#[test]
fn upload_error_status_is_returned_not_raised() {
    let (base, server) = serve_once("HTTP/1.1 500 Internal Server Error", "boom");

    let receipt = client(&base)
        .upload(&SerialLine::from(&b"1\n"[..]))
        .unwrap();

    assert_eq!(receipt.status, 500);
    assert_eq!(receipt.body, "boom");
    server.join().unwrap();
}

// ── Transport failures ────────────────────────────────────────

#[test]
fn refused_connection_is_network_error() {
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let base = format!("http://127.0.0.1:{port}");

    let err = client(&base).fetch_status().unwrap_err();

    assert!(matches!(err, Error::Network(NetworkError::Transport { .. })));
}

#[test]
fn silent_server_hits_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_millis(800));
        drop(stream);
    });

    let mut cloud = CloudClient::new(
        format!("{base}{STATUS_PATH}"),
        format!("{base}{TELEMETRY_PATH}"),
        Duration::from_millis(200),
    );
    let err = cloud.fetch_status().unwrap_err();

    assert!(matches!(err, Error::Network(NetworkError::Transport { .. })));
    server.join().unwrap();
}
