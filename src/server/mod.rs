//! HTTP endpoint for the browser front end
//!
//! Listens on localhost:5000 (configurable) and accepts:
//! - POST /process_command - classify a transcribed utterance
//! - GET /ping - liveness check
//!
//! The browser does speech recognition and sends the final transcript;
//! everything it needs to render comes back in one JSON reply.

mod handlers;
mod types;

pub use handlers::route;
pub use types::{AppState, ProcessCommandRequest, ProcessCommandResponse};

use std::io::Read;

use anyhow::{Context, Result};
use tiny_http::{Response, Server};
use tracing::{error, info};

pub const AUTH_HEADER: &str = "X-Terra-Token";
const MAX_BODY_BYTES: usize = 64 * 1024; // 64 KiB

/// Bind the listener without serving yet
pub fn bind(host: &str, port: u16) -> Result<Server> {
    let bind_addr = format!("{}:{}", host, port);
    Server::http(&bind_addr)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("Failed to start server on {}", bind_addr))
}

/// Serve requests until the listener is closed. Requests are handled one at a time.
pub fn run(server: Server, state: &AppState) {
    let auth_enabled = state.token.is_some();
    match server.server_addr().to_ip() {
        Some(addr) => info!(
            "[terra:http] Server listening on http://{} (auth: {})",
            addr,
            if auth_enabled { "enabled" } else { "disabled" }
        ),
        None => info!("[terra:http] Server listening"),
    }

    for mut request in server.incoming_requests() {
        let method = request.method().to_string();
        let url = request.url().to_string();
        let path = url.split('?').next().unwrap_or(url.as_str()).to_string();

        let token = request
            .headers()
            .iter()
            .find(|h| h.field.equiv(AUTH_HEADER))
            .map(|h| h.value.as_str().to_string());

        let body = match read_request_body(&mut request) {
            Ok(body) => body,
            Err((status, value)) => {
                respond_json(request, status, value);
                continue;
            }
        };

        let (status, value) = route(state, &method, &path, token.as_deref(), &body);
        respond_json(request, status, value);
    }
}

fn read_request_body(
    request: &mut tiny_http::Request,
) -> std::result::Result<String, (u16, serde_json::Value)> {
    let mut body = String::new();
    let mut reader = request.as_reader().take((MAX_BODY_BYTES + 1) as u64);
    if let Err(e) = reader.read_to_string(&mut body) {
        error!("[terra:http] Failed to read body: {}", e);
        return Err((400, serde_json::json!({ "error": "bad_request" })));
    }

    if body.len() > MAX_BODY_BYTES {
        return Err((413, serde_json::json!({ "error": "payload_too_large" })));
    }

    Ok(body)
}

fn respond_json(request: tiny_http::Request, status_code: u16, value: serde_json::Value) {
    let body =
        serde_json::to_string(&value).unwrap_or_else(|_| "{\"error\":\"serialize\"}".to_string());
    let response = Response::from_string(body)
        .with_status_code(status_code)
        .with_header(json_content_type());
    if let Err(e) = request.respond(response) {
        error!("[terra:http] Failed to send response: {}", e);
    }
}

fn json_content_type() -> tiny_http::Header {
    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json; charset=utf-8"[..])
        .unwrap()
}
