//! fetch-and-render integration tests
//!
//! A one-shot TCP responder on 127.0.0.1 stands in for the CGI endpoint.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

use kmlquery::config::{EndpointConfig, HttpConfig};
use kmlquery::errors::{KmlQueryError, Result};
use kmlquery::query::KmlForm;
use kmlquery::render::{Document, Visibility};
use kmlquery::services::{FetchOutcome, KmlClient};
use kmlquery::transport::{DirectFactory, HttpTransport, TransportChain, TransportFactory};

/// Accept one connection, answer it, return the request line
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut line = String::new();
            let n = reader.read_line(&mut line).unwrap();
            if n == 0 || line == "\r\n" {
                break;
            }
        }

        let response = format!(
            "{}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request_line
    });

    (format!("http://{}", addr), handle)
}

fn sample_form() -> KmlForm {
    KmlForm {
        layer: "LS8:NBAR".to_string(),
        region: "Australia".to_string(),
        west: "110".to_string(),
        south: "-45".to_string(),
        east: "155".to_string(),
        north: "-10".to_string(),
        time: "2013-03-17T00:00:00+10:00".to_string(),
    }
}

fn direct_client(base_url: &str) -> KmlClient {
    let endpoint = EndpointConfig {
        base_url: base_url.to_string(),
        ..EndpointConfig::default()
    };
    let http = HttpConfig {
        timeout_secs: 5,
        ..HttpConfig::default()
    };
    KmlClient::new(
        endpoint,
        "kml".to_string(),
        TransportChain::new(vec![Box::new(DirectFactory::new(&http))]),
    )
}

struct Unavailable(Arc<AtomicUsize>);

impl TransportFactory for Unavailable {
    fn create(&self) -> Result<Box<dyn HttpTransport>> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Err(KmlQueryError::transport_unavailable("not here"))
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

#[tokio::test]
async fn test_renders_body_and_shows_element() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", "<kml>overlay</kml>");
    let client = direct_client(&base_url);
    let document = Document::new().with_element("kml");

    let outcome = client
        .fetch_and_render(1, &sample_form(), &document)
        .await
        .unwrap();

    match outcome {
        FetchOutcome::Rendered { url, status, bytes } => {
            assert_eq!(status, 200);
            assert_eq!(bytes, "<kml>overlay</kml>".len());
            assert!(url.starts_with(&format!("{}/google_earth.cgi?createKML+", base_url)));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let element = document.element("kml").unwrap();
    assert_eq!(element.content, "<kml>overlay</kml>");
    assert_eq!(element.display, Visibility::Block);

    let request_line = server.join().unwrap();
    assert!(request_line.starts_with("GET /google_earth.cgi?createKML+"));
    assert!(request_line.contains("+%26layer%3DLS8%3ANBAR%26region%3DAustralia%26west%3D110"));
    assert!(request_line.contains("%26time%3D2013-03-17T00%3A00%3A00%2B10%3A00 HTTP/1.1"));
}

#[tokio::test]
async fn test_error_status_is_rendered_like_success() {
    let (base_url, server) = serve_once("HTTP/1.1 500 Internal Server Error", "boom");
    let client = direct_client(&base_url);
    let document = Document::new().with_element("kml");

    let outcome = client.fetch_kml(&sample_form(), &document).await.unwrap();

    assert!(matches!(outcome, FetchOutcome::Rendered { status: 500, .. }));
    assert_eq!(document.visible_content("kml").as_deref(), Some("boom"));
    server.join().unwrap();
}

#[tokio::test]
async fn test_unknown_kind_sends_nothing() {
    // nothing listens here; a request would fail
    let client = direct_client("http://127.0.0.1:9");
    let document = Document::new().with_element("kml");

    let outcome = client
        .fetch_and_render(2, &sample_form(), &document)
        .await
        .unwrap();

    assert_eq!(outcome, FetchOutcome::Skipped { code: 2 });
    let element = document.element("kml").unwrap();
    assert!(element.content.is_empty());
    assert_eq!(element.display, Visibility::None);
}

#[tokio::test]
async fn test_exhausted_transports_abort() {
    let calls = Arc::new(AtomicUsize::new(0));
    let client = KmlClient::new(
        EndpointConfig::default(),
        "kml".to_string(),
        TransportChain::new(vec![
            Box::new(Unavailable(calls.clone())),
            Box::new(Unavailable(calls.clone())),
            Box::new(Unavailable(calls.clone())),
        ]),
    );
    let document = Document::new().with_element("kml");

    let err = client
        .fetch_and_render(1, &sample_form(), &document)
        .await
        .unwrap_err();

    assert!(matches!(err, KmlQueryError::TransportUnavailable(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(document.visible_content("kml"), None);
}

#[tokio::test]
async fn test_missing_element_is_reported() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", "<kml/>");
    let client = direct_client(&base_url);
    let document = Document::new().with_element("other");

    let err = client
        .fetch_kml(&sample_form(), &document)
        .await
        .unwrap_err();

    assert!(matches!(err, KmlQueryError::ElementNotFound(_)));
    server.join().unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = direct_client(&format!("http://{}", addr));
    let document = Document::new().with_element("kml");

    let err = client
        .fetch_kml(&sample_form(), &document)
        .await
        .unwrap_err();

    assert!(matches!(err, KmlQueryError::Request(_)));
}

#[test]
fn test_request_url_uses_fresh_cache_buster() {
    let client = direct_client("http://localhost/cgi-bin");
    let a = client.request_url(1, &sample_form()).unwrap();
    let b = client.request_url(1, &sample_form()).unwrap();

    let prefix = "http://localhost/cgi-bin/google_earth.cgi?createKML+";
    assert!(a.starts_with(prefix));
    assert!(b.starts_with(prefix));
    assert_ne!(a, b);
    assert_eq!(client.request_url(0, &sample_form()), None);
}
