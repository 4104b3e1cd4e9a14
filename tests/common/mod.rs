#![allow(dead_code)]

use dex_pair_notifier::pipeline::{Status, View};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use warp::http::{Method, Response, StatusCode};
use warp::hyper::body::Bytes;
use warp::path::FullPath;
use warp::Filter;

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl StubResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Default)]
struct StubState {
    responses: Mutex<VecDeque<StubResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Answers every request with the next queued response, whatever the route.
pub struct StubServer {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubServer {
    pub async fn start(responses: Vec<StubResponse>) -> Self {
        let state = Arc::new(StubState {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        });

        let with_state = {
            let state = state.clone();
            warp::any().map(move || state.clone())
        };
        let routes = warp::any()
            .and(with_state)
            .and(warp::method())
            .and(warp::path::full())
            .and(warp::body::bytes())
            .and_then(respond);

        let (addr, server) = warp::serve(routes).bind_ephemeral(SocketAddr::from(([127, 0, 0, 1], 0)));
        tokio::spawn(server);

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn respond(
    state: Arc<StubState>,
    method: Method,
    path: FullPath,
    body: Bytes,
) -> Result<Response<String>, Infallible> {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.as_str().to_string(),
        body: String::from_utf8_lossy(&body).to_string(),
    });

    let next = state.responses.lock().unwrap().pop_front();
    let Some(stub) = next else {
        return Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body("no stub response queued".to_string())
            .unwrap());
    };

    tokio::time::sleep(stub.delay).await;
    Ok(Response::builder()
        .status(StatusCode::from_u16(stub.status).unwrap())
        .header("content-type", "application/json")
        .body(stub.body)
        .unwrap())
}

pub fn pair(name: &str, address: &str, price_usd: &str, volume_h24: f64) -> Value {
    json!({
        "chainId": "solana",
        "dexId": "raydium",
        "baseToken": {"address": address, "name": name, "symbol": name.to_uppercase()},
        "priceUsd": price_usd,
        "volume": {"h24": volume_h24}
    })
}

pub fn listing(count: usize) -> Value {
    let pairs: Vec<Value> = (0..count)
        .map(|i| pair(&format!("Token{}", i), &format!("Addr{}", i), "0.5", 1000.0))
        .collect();
    json!({"schemaVersion": "1.0.0", "pairs": pairs})
}

/// Bot API reply for a successful sendMessage.
pub fn sent_message(chat_id: i64, text: &str) -> Value {
    json!({
        "ok": true,
        "result": {
            "message_id": 1,
            "date": 1700000000,
            "chat": {"id": chat_id, "type": "private", "first_name": "Tester"},
            "text": text
        }
    })
}

pub fn api_failure(description: &str) -> Value {
    json!({"ok": false, "error_code": 400, "description": description})
}

#[derive(Default)]
pub struct RecordingView {
    pub statuses: Vec<Status>,
    pub output: String,
}

impl View for RecordingView {
    fn set_status(&mut self, status: Status) {
        self.statuses.push(status);
    }

    fn set_output(&mut self, text: &str) {
        self.output = text.to_string();
    }
}
