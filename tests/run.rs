mod common;

use common::*;
use imgur_cli::cli::Cli;
use imgur_cli::ui;
use imgur_cli::UploadKind;
use reqwest::Method;

fn output(buf: Vec<u8>) -> serde_json::Value {
    let text = String::from_utf8(buf).unwrap();
    let docs: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&text)
        .into_iter::<serde_json::Value>()
        .map(|doc| doc.unwrap())
        .collect();
    serde_json::Value::Array(docs)
}

#[test]
fn test_run_prints_each_requested_record() {
    let (client, stub) = client(
        StubTransport::new()
            .route("/3/image/AbC12", 200, IMAGE_BODY)
            .route("/3/album/XyZ9", 200, ALBUM_BODY)
            .route_with_headers("/3/credits", 200, CREDITS_BODY, &RATE_LIMIT_HEADERS),
    );
    let cli = Cli {
        image: Some("AbC12".to_string()),
        album: Some("XyZ9".to_string()),
        rate: true,
        ..Cli::default()
    };

    let mut out = Vec::new();
    let failed = ui::run(&cli, &client, &mut out).unwrap();
    assert_eq!(failed, 0);

    let docs = output(out);
    assert_eq!(docs[0]["UserRemaining"], 1987);
    assert_eq!(docs[1]["id"], "AbC12");
    assert_eq!(docs[2]["id"], "XyZ9");

    let paths: Vec<String> = stub
        .requests()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/3/credits", "/3/image/AbC12", "/3/album/XyZ9"]);
}

#[test]
fn test_run_continues_after_a_failure() {
    let (client, stub) = client(
        StubTransport::new().route("/3/gallery/album/GaL1", 200, GALLERY_ALBUM_BODY),
    );
    let cli = Cli {
        gimage: Some("missing".to_string()),
        galbum: Some("GaL1".to_string()),
        url: Some("https://example.com/nope".to_string()),
        ..Cli::default()
    };

    let mut out = Vec::new();
    let failed = ui::run(&cli, &client, &mut out).unwrap();
    assert_eq!(failed, 2);

    let docs = output(out);
    assert_eq!(docs.as_array().unwrap().len(), 1);
    assert_eq!(docs[0]["id"], "GaL1");
    assert_eq!(stub.requests().len(), 2);
}

#[test]
fn test_run_uploads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cat.png");
    std::fs::write(&path, b"\x89PNG").unwrap();

    let (client, stub) = client(StubTransport::new().route("/3/image", 200, UPLOAD_BODY));
    let cli = Cli {
        upload: Some(path.to_string_lossy().into_owned()),
        upload_type: UploadKind::Binary,
        title: Some("a cat".to_string()),
        ..Cli::default()
    };

    let mut out = Vec::new();
    assert_eq!(ui::run(&cli, &client, &mut out).unwrap(), 0);
    assert_eq!(output(out)[0]["deletehash"], "dEl3t3");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    let body = String::from_utf8(requests[0].body.clone().unwrap()).unwrap();
    assert!(body.starts_with("image=iVBORw%3D%3D&type=base64"));
    assert!(body.ends_with("&title=a+cat"));
}

#[test]
fn test_run_upload_missing_file_makes_no_request() {
    let (client, stub) = client(StubTransport::new());
    let cli = Cli {
        upload: Some("/definitely/not/here.png".to_string()),
        ..Cli::default()
    };
    let mut out = Vec::new();
    assert_eq!(ui::run(&cli, &client, &mut out).unwrap(), 1);
    assert!(out.is_empty());
    assert!(stub.requests().is_empty());
}
