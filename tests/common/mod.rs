// Stub transport: answers requests from a table of canned responses keyed
// by URL path and records every request it sees.

#![allow(dead_code)]

use imgur_cli::transport::{HttpRequest, HttpResponse, Transport};
use imgur_cli::{ImgurClient, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const CLIENT_ID: &str = "0123abcd";

#[derive(Default)]
pub struct StubTransport {
    routes: HashMap<String, HttpResponse>,
    pub requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests to `path` (e.g. `/3/image/abc`) with `status` and `body`.
    pub fn route(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            path.to_string(),
            HttpResponse {
                status: StatusCode::from_u16(status).unwrap(),
                headers: HeaderMap::new(),
                body: body.as_bytes().to_vec(),
            },
        );
        self
    }

    /// Like `route`, with extra response headers.
    pub fn route_with_headers(
        mut self,
        path: &str,
        status: u16,
        body: &str,
        headers: &[(&'static str, &'static str)],
    ) -> Self {
        self = self.route(path, status, body);
        let response = self.routes.get_mut(path).unwrap();
        for (name, value) in headers {
            response
                .headers
                .insert(*name, HeaderValue::from_static(*value));
        }
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let path = request.url.path().to_string();
        self.requests.lock().unwrap().push(request);
        Ok(self.routes.get(&path).cloned().unwrap_or_else(|| HttpResponse {
            status: StatusCode::NOT_FOUND,
            headers: HeaderMap::new(),
            body: format!(
                r#"{{"data":{{"error":"No route for {path}","request":"{path}","method":"GET"}},"success":false,"status":404}}"#
            )
            .into_bytes(),
        }))
    }
}

pub fn client(stub: StubTransport) -> (ImgurClient, Arc<StubTransport>) {
    let stub = Arc::new(stub);
    let client = ImgurClient::with_transport(CLIENT_ID, stub.clone()).unwrap();
    (client, stub)
}

pub const RATE_LIMIT_HEADERS: [(&str, &str); 5] = [
    ("x-ratelimit-userlimit", "2000"),
    ("x-ratelimit-userremaining", "1987"),
    ("x-ratelimit-userreset", "1700000000"),
    ("x-ratelimit-clientlimit", "12500"),
    ("x-ratelimit-clientremaining", "12300"),
];

pub const IMAGE_BODY: &str = r#"{
  "data": {
    "id": "AbC12",
    "title": "A cat",
    "description": "Sitting in a box",
    "datetime": 1700000000,
    "type": "image/png",
    "animated": false,
    "width": 640,
    "height": 480,
    "size": 123456,
    "views": 42,
    "bandwidth": 5185152,
    "vote": null,
    "favorite": false,
    "nsfw": null,
    "section": null,
    "account_url": null,
    "account_id": null,
    "is_ad": false,
    "in_most_viral": false,
    "tags": [],
    "in_gallery": false,
    "link": "https://i.imgur.com/AbC12.png"
  },
  "success": true,
  "status": 200
}"#;

pub const ALBUM_BODY: &str = r#"{
  "data": {
    "id": "XyZ9",
    "title": "Cats",
    "description": null,
    "datetime": 1700000100,
    "cover": "AbC12",
    "cover_width": 640,
    "cover_height": 480,
    "account_url": "someone",
    "account_id": 777,
    "privacy": "hidden",
    "layout": "blog",
    "views": 10,
    "link": "https://imgur.com/a/XyZ9",
    "favorite": false,
    "nsfw": false,
    "section": null,
    "images_count": 1,
    "in_gallery": false,
    "images": [
      {
        "id": "AbC12",
        "title": null,
        "description": null,
        "datetime": 1700000000,
        "type": "image/png",
        "animated": false,
        "width": 640,
        "height": 480,
        "size": 123456,
        "views": 42,
        "bandwidth": 5185152,
        "link": "https://i.imgur.com/AbC12.png"
      }
    ]
  },
  "success": true,
  "status": 200
}"#;

pub const GALLERY_IMAGE_BODY: &str = r#"{
  "data": {
    "id": "Qw3rT",
    "title": "Look at this",
    "description": null,
    "datetime": 1700000200,
    "type": "image/gif",
    "animated": true,
    "width": 320,
    "height": 240,
    "size": 999,
    "views": 31337,
    "bandwidth": 31305663,
    "gifv": "https://i.imgur.com/Qw3rT.gifv",
    "mp4": "https://i.imgur.com/Qw3rT.mp4",
    "mp4_size": 500,
    "looping": true,
    "link": "https://i.imgur.com/Qw3rT.gif",
    "vote": null,
    "favorite": false,
    "nsfw": false,
    "comment_count": 12,
    "topic": "Funny",
    "topic_id": 2,
    "section": null,
    "account_url": "poster",
    "account_id": 55,
    "ups": 100,
    "downs": 3,
    "points": 97,
    "score": 120,
    "is_album": false
  },
  "success": true,
  "status": 200
}"#;

pub const GALLERY_ALBUM_BODY: &str = r#"{
  "data": {
    "id": "GaL1",
    "title": "Gallery cats",
    "description": null,
    "datetime": 1700000300,
    "cover": "AbC12",
    "cover_width": 640,
    "cover_height": 480,
    "account_url": "poster",
    "account_id": 55,
    "privacy": "public",
    "layout": "blog",
    "views": 5000,
    "link": "https://imgur.com/a/GaL1",
    "ups": 10,
    "downs": 1,
    "points": 9,
    "score": 11,
    "is_album": true,
    "vote": null,
    "favorite": false,
    "nsfw": false,
    "comment_count": 4,
    "topic": null,
    "topic_id": null,
    "images_count": 0,
    "images": []
  },
  "success": true,
  "status": 200
}"#;

pub const UPLOAD_BODY: &str = r#"{
  "data": {
    "id": "NeW1",
    "title": "a cat",
    "description": null,
    "datetime": 1700000400,
    "type": "image/png",
    "animated": false,
    "width": 1,
    "height": 1,
    "size": 4,
    "views": 0,
    "bandwidth": 0,
    "deletehash": "dEl3t3",
    "name": "",
    "link": "https://i.imgur.com/NeW1.png"
  },
  "success": true,
  "status": 200
}"#;

pub const CREDITS_BODY: &str = r#"{
  "data": {
    "UserLimit": 500,
    "UserRemaining": 499,
    "UserReset": 1700003600,
    "ClientLimit": 12500,
    "ClientRemaining": 12499
  },
  "success": true,
  "status": 200
}"#;
