// Copyright (c) Microsoft. All rights reserved.

#![allow(dead_code)]

use std::sync::Mutex;

use docker_engine::Transport;
use http::{Request, Response, StatusCode};

type Handler = Box<dyn Fn(&Request<Vec<u8>>) -> anyhow::Result<Response<Vec<u8>>> + Send + Sync>;

/// In-memory daemon: answers every request with `handler` and keeps the
/// requests it saw for later assertions.
pub struct MockTransport {
    handler: Handler,
    requests: Mutex<Vec<Request<Vec<u8>>>>,
}

impl MockTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Request<Vec<u8>>) -> anyhow::Result<Response<Vec<u8>>> + Send + Sync + 'static,
    {
        MockTransport {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(status: StatusCode, body: &str) -> Self {
        let body = body.to_owned();
        MockTransport::new(move |_| Ok(response(status, &body)))
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn with_last_request<R>(&self, f: impl FnOnce(&Request<Vec<u8>>) -> R) -> R {
        let requests = self.requests.lock().unwrap();
        f(requests.last().expect("no request was sent"))
    }

    pub fn last_uri(&self) -> String {
        self.with_last_request(|request| request.uri().to_string())
    }

    pub fn last_body(&self) -> serde_json::Value {
        self.with_last_request(|request| serde_json::from_slice(request.body()).unwrap())
    }
}

pub fn response(status: StatusCode, body: &str) -> Response<Vec<u8>> {
    Response::builder()
        .status(status)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.as_bytes().to_vec())
        .unwrap()
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: Request<Vec<u8>>) -> anyhow::Result<Response<Vec<u8>>> {
        let response = (self.handler)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}
