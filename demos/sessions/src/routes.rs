// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{CookieIssuer, DEFAULT_EXPIRES_IN, SessionCookie};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use rand::Rng;
use std::sync::Arc;

pub const GREETINGS: [&str; 5] = [
    "Hello World",
    "Hallo Welt",
    "Hola mundo",
    "Salut le Monde",
    "Ciao Mondo",
];

const SUCCESS_BODY: &str = r#"{"status": "success"}"#;

#[derive(Clone, Debug)]
struct AppState {
    issuer: Arc<dyn CookieIssuer>,
}

#[derive(Debug, serde::Deserialize)]
struct SessionLoginRequest {
    #[serde(rename = "idToken")]
    id_token: String,
}

/// Creates the application routes.
pub fn app(issuer: Arc<dyn CookieIssuer>) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(index))
        .route("/sessionLogin", axum::routing::post(session_login))
        .with_state(AppState { issuer })
}

async fn index() -> String {
    let n = rand::rng().random_range(0..GREETINGS.len());
    // View counts are not persisted.
    format!("{} views for {}", 0, GREETINGS[n])
}

async fn session_login(State(state): State<AppState>, body: Bytes) -> Response {
    let id_token = match serde_json::from_slice::<SessionLoginRequest>(&body) {
        Ok(r) => r.id_token,
        Err(e) => {
            tracing::warn!("cannot parse session login request: {e}");
            return (StatusCode::BAD_REQUEST, "Invalid request body").into_response();
        }
    };

    // Creating the session cookie also verifies the ID token.
    let cookie = match state.issuer.create(&id_token, DEFAULT_EXPIRES_IN).await {
        Ok(c) => SessionCookie::new(c, DEFAULT_EXPIRES_IN),
        Err(e) => {
            tracing::error!("SessionCookie: {e}");
            return internal_error();
        }
    };
    let cookie = match cookie.to_header_value() {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("invalid session cookie value: {e}");
            return internal_error();
        }
    };

    (
        StatusCode::OK,
        [
            (header::SET_COOKIE, cookie),
            (
                header::CONTENT_TYPE,
                header::HeaderValue::from_static("application/json"),
            ),
        ],
        SUCCESS_BODY,
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to create a session cookie",
    )
        .into_response()
}
