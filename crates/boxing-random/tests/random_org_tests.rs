//! Integration tests for RandomOrgClient against a local stand-in server

use boxing_domain::traits::RandomSource;
use boxing_random::{RandomError, RandomOrgClient};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

fn read_request(stream: &mut TcpStream) {
    let mut buf = [0u8; 1024];
    let mut request = Vec::new();
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
}

/// Serve a single HTTP response and return the base URL to hit
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}/integers/?num=1&min=1", addr)
}

#[test]
fn test_successful_draw() {
    let url = serve_once("200 OK", "17\n");
    let client = RandomOrgClient::new(url).unwrap();

    assert_eq!(client.get_random(100).unwrap(), 17.0);
}

#[test]
fn test_malformed_response() {
    let url = serve_once("200 OK", "not a number");
    let client = RandomOrgClient::new(url).unwrap();

    let result = client.get_random(100);
    assert!(
        matches!(result, Err(RandomError::MalformedResponse(ref body)) if body == "not a number"),
        "got {:?}",
        result
    );
}

#[test]
fn test_error_status_is_unavailable() {
    let url = serve_once("503 Service Unavailable", "busy");
    let client = RandomOrgClient::new(url).unwrap();

    assert!(matches!(client.get_random(100), Err(RandomError::Unavailable(_))));
}

#[test]
fn test_connection_refused_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RandomOrgClient::new(format!("http://{}/?num=1", addr)).unwrap();
    assert!(matches!(client.get_random(100), Err(RandomError::Unavailable(_))));
}

#[test]
fn test_slow_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request(&mut stream);
            // Hold the connection open without answering
            thread::sleep(Duration::from_secs(3));
        }
    });

    let client =
        RandomOrgClient::with_timeout(format!("http://{}/?num=1", addr), Duration::from_millis(200))
            .unwrap();
    assert!(matches!(client.get_random(100), Err(RandomError::Timeout)));
}
