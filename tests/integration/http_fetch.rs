use docbot::docs::{get_docs, DocsSource, HttpDocsSource, ModuleRef};
use docbot::DocbotError;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc;
use std::thread;

use crate::support::RE_PAGE;

/// Serve exactly one HTTP response and report the request line.
fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (SocketAddr, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            if header == "\r\n" || header.is_empty() {
                break;
            }
        }

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
        .unwrap();
        stream.flush().unwrap();
        tx.send(request_line.trim_end().to_string()).unwrap();
    });

    (addr, rx)
}

fn local_source(addr: SocketAddr) -> HttpDocsSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpDocsSource::with_client(client, &format!("http://{}/3/library/{{module}}.html", addr))
}

#[tokio::test]
async fn fetches_page_from_templated_url() {
    let (addr, requests) = serve_once("200 OK", RE_PAGE);
    let source = local_source(addr);

    let text = get_docs(&source, &ModuleRef::new("re", "compile")).await.unwrap();

    assert!(text.starts_with("Compile a regular expression pattern"));
    assert_eq!(requests.recv().unwrap(), "GET /3/library/re.html HTTP/1.1");
}

#[tokio::test]
async fn non_200_status_is_an_error() {
    let (addr, _requests) = serve_once("404 Not Found", "<html/>");
    let source = local_source(addr);

    let err = source.fetch_page("nosuchmodule").await.unwrap_err();
    match err {
        DocbotError::HttpStatus { url, status } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/3/library/nosuchmodule.html"));
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let source = local_source(addr);

    let err = source.fetch_page("re").await.unwrap_err();
    assert!(matches!(err, DocbotError::Fetch(_)));
}
