use std::io::{Read, Write};
use std::net::TcpListener;

use measplot::loader::interpret_response;
use measplot::{ChartSession, DataLoader, Origin, ViewerError};

/// Serve exactly one HTTP response on a random local port.
fn serve_once(status_line: &'static str, body: &'static str) -> Origin {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    Origin::new("http:", addr.to_string())
}

#[test]
fn url_is_built_from_protocol_host_and_endpoint() {
    let origin = Origin::new("https:", "lab.example.org:8443");
    assert_eq!(
        origin.url_for("measurements/3/data/"),
        "https://lab.example.org:8443/measurements/3/data/"
    );
}

#[test]
fn non_success_status_carries_body() {
    let err = interpret_response(404, "not found".into()).unwrap_err();
    match err {
        ViewerError::Network { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn success_status_parses_dataset() {
    let ds = interpret_response(
        200,
        r#"{"variables": [{"name": "t", "unit": "s"}], "data_points": []}"#.into(),
    )
    .unwrap();
    assert_eq!(ds.variables[0].name, "t");
    assert!(ds.data_points.is_empty());
}

#[test]
fn fetch_http_500_yields_network_error() {
    let origin = serve_once("500 Internal Server Error", "server error");
    let mut loader = DataLoader::new();
    loader.fetch(origin.url_for("measurements/1/data/"));
    assert!(loader.is_loading());

    let outcome = loader.wait().expect("loader channel closed");
    assert!(!loader.is_loading());

    let mut session = ChartSession::new();
    let err = session.handle_outcome(outcome).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("500") && msg.contains("server error"), "{msg}");
    assert!(session.chart().is_none());
}

#[test]
fn fetch_success_populates_session() {
    let origin = serve_once(
        "200 OK",
        r#"{"name": "run", "variables": [{"name": "a", "unit": "V"}, {"name": "b", "unit": "A"}],
            "data_points": [{"a": 1, "b": 2}, {"a": 2, "b": 4}, {"a": 3, "b": 6}]}"#,
    );
    let mut loader = DataLoader::new();
    loader.fetch(origin.url_for("data"));
    let outcome = loader.wait().expect("loader channel closed");

    let mut session = ChartSession::new();
    session.handle_outcome(outcome).unwrap();
    assert_eq!(session.plotted_points().len(), 3);
    assert_eq!(session.selectors.x.options().len(), 2);
}

#[test]
fn load_path_reads_csv_files() {
    let path = std::env::temp_dir().join(format!("measplot_loader_{}.csv", std::process::id()));
    std::fs::write(&path, "x (m),y (m)\n1,2\n3,4\n").unwrap();

    let mut loader = DataLoader::new();
    loader.load_path(path.clone());
    let ds = loader.wait().expect("loader channel closed").unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(ds.variables.len(), 2);
    assert_eq!(ds.data_points.len(), 2);
    assert!(ds.name.as_deref().unwrap().starts_with("measplot_loader_"));
}

#[test]
fn load_path_missing_file_is_io_error() {
    let mut loader = DataLoader::new();
    loader.load_path(std::env::temp_dir().join("measplot_definitely_missing.json"));
    let err = loader.wait().expect("loader channel closed").unwrap_err();
    assert!(matches!(err, ViewerError::Io(_)));
}

#[test]
fn wait_without_pending_request_returns_immediately() {
    let mut loader = DataLoader::new();
    assert!(!loader.is_loading());
    assert!(loader.wait().is_none());
}

#[test]
fn wait_returns_none_after_last_outcome() {
    let path = std::env::temp_dir().join(format!("measplot_wait_{}.json", std::process::id()));
    std::fs::write(&path, r#"{"variables": [], "data_points": []}"#).unwrap();

    let mut loader = DataLoader::new();
    loader.load_path(path.clone());
    assert!(loader.wait().expect("one outcome pending").is_ok());
    std::fs::remove_file(&path).ok();
    assert!(loader.wait().is_none());
}
