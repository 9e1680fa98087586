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

use crate::{Error, Result};
use google_cloud_auth::credentials::{CacheableResource, Credentials};
use http::Extensions;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

const MIN_EXPIRES_IN: Duration = Duration::from_secs(5 * 60);
const MAX_EXPIRES_IN: Duration = Duration::from_secs(14 * 24 * 60 * 60);

/// Creates session cookies from ID tokens.
///
/// The application routes only depend on this trait, which makes it possible
/// to test them without a real identity service.
#[async_trait::async_trait]
pub trait CookieIssuer: std::fmt::Debug + Send + Sync {
    /// Verifies `id_token` and returns a session cookie valid for `expires_in`.
    async fn create(&self, id_token: &str, expires_in: Duration) -> Result<String>;
}

/// Implements [CookieIssuer] using the `createSessionCookie` RPC in the
/// Identity Toolkit API.
#[derive(Debug)]
pub struct SessionCookieIssuer {
    project_id: String,
    credentials: Credentials,
    endpoint: String,
    client: Client,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionCookieRequest<'a> {
    id_token: &'a str,
    valid_duration: u64,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionCookieResponse {
    session_cookie: String,
}

impl SessionCookieIssuer {
    pub fn new<P: Into<String>>(project_id: P, credentials: Credentials) -> Self {
        Self {
            project_id: project_id.into(),
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client: Client::new(),
        }
    }

    /// Overrides the service endpoint, e.g. to use an emulator.
    pub fn with_endpoint<E: Into<String>>(mut self, endpoint: E) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/projects/{}:createSessionCookie",
            self.endpoint, self.project_id
        )
    }
}

#[async_trait::async_trait]
impl CookieIssuer for SessionCookieIssuer {
    async fn create(&self, id_token: &str, expires_in: Duration) -> Result<String> {
        if !(MIN_EXPIRES_IN..=MAX_EXPIRES_IN).contains(&expires_in) {
            return Err(Error::InvalidDuration {
                got: expires_in,
                min: MIN_EXPIRES_IN,
                max: MAX_EXPIRES_IN,
            });
        }

        let headers = match self
            .credentials
            .headers(Extensions::new())
            .await
            .map_err(Error::Credentials)?
        {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                unreachable!("requested credentials without a caching etag")
            }
        };

        let body = CreateSessionCookieRequest {
            id_token,
            valid_duration: expires_in.as_secs(),
        };
        let response = self
            .client
            .post(self.url())
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(Error::Transport)?;
            return Err(Error::Service { status, body });
        }
        let response = response
            .json::<CreateSessionCookieResponse>()
            .await
            .map_err(Error::Decode)?;
        tracing::debug!("created session cookie for project {}", self.project_id);
        Ok(response.session_cookie)
    }
}
