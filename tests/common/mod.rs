#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};
use spotify_web_http::{
    ClientOptions, HttpRequest, HttpResponse, SpotifyWebClient, Transport, TransportError,
};

pub const BASE_URL: &str = "https://api.test/v1";

/// Transport that replays queued responses and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<HttpResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: TransportError) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::from([Err(error)])),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request log mutex must not be poisoned")
            .clone()
    }

    pub fn hits(&self) -> usize {
        self.requests().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .expect("request log mutex must not be poisoned")
            .push(request);
        self.responses
            .lock()
            .expect("response queue mutex must not be poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Ok(HttpResponse::new(
                    500,
                    json!({"error": {"status": 500, "message": "no scripted response"}})
                        .to_string(),
                ))
            })
    }
}

/// Serves `/v1/items?offset=&limit=` as an offset-paged list of `total` numbers.
pub struct PagedTransport {
    pub total: u32,
    requests: Mutex<Vec<HttpRequest>>,
}

impl PagedTransport {
    pub fn new(total: u32) -> Arc<Self> {
        Arc::new(Self {
            total,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("request log mutex must not be poisoned")
            .iter()
            .map(|request| request.url.clone())
            .collect()
    }

    fn page(&self, offset: u32, limit: u32) -> JsonValue {
        let link = |offset: u32| format!("{BASE_URL}/items?offset={offset}&limit={limit}");
        let end = (offset + limit).min(self.total);
        let items: Vec<u32> = (offset..end).collect();
        let next = (offset + limit < self.total).then(|| link(offset + limit));
        let previous = (offset > 0).then(|| link(offset.saturating_sub(limit)));
        json!({
            "href": link(offset),
            "items": items,
            "total": self.total,
            "limit": limit,
            "offset": offset,
            "next": next,
            "previous": previous,
        })
    }
}

#[async_trait]
impl Transport for PagedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|err| TransportError::with_source("bad url", err))?;
        self.requests
            .lock()
            .expect("request log mutex must not be poisoned")
            .push(request);

        let mut offset = 0;
        let mut limit = 20;
        for (name, value) in url.query_pairs() {
            match name.as_ref() {
                "offset" => offset = value.parse().unwrap_or(0),
                "limit" => limit = value.parse().unwrap_or(20),
                _ => {}
            }
        }
        Ok(HttpResponse::new(200, self.page(offset, limit).to_string()))
    }
}

pub fn client_with(transport: Arc<dyn Transport>) -> SpotifyWebClient {
    SpotifyWebClient::new("token")
        .with_transport(transport)
        .with_options(ClientOptions {
            base_url: BASE_URL.to_owned(),
            ..ClientOptions::default()
        })
}

pub fn ok(body: JsonValue) -> HttpResponse {
    HttpResponse::new(200, body.to_string())
}

pub fn status(code: u16) -> HttpResponse {
    HttpResponse::new(
        code,
        json!({"error": {"status": code, "message": format!("status {code}")}}).to_string(),
    )
}
