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

use http::HeaderValue;
use http::header::InvalidHeaderValue;
use std::time::Duration;

pub const SESSION_COOKIE_NAME: &str = "session";

/// Session cookies expire after 5 days.
pub const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(5 * 24 * 60 * 60);

/// The policy for the session cookie sent to the browser.
///
/// The cookie is never visible to scripts (`HttpOnly`), and it is only sent
/// over HTTPS (`Secure`).
#[derive(Clone, Debug, PartialEq)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
    pub max_age: Duration,
    pub http_only: bool,
    pub secure: bool,
}

impl SessionCookie {
    pub fn new<V: Into<String>>(value: V, expires_in: Duration) -> Self {
        Self {
            name: SESSION_COOKIE_NAME.to_string(),
            value: value.into(),
            max_age: expires_in,
            http_only: true,
            secure: true,
        }
    }

    /// The value for a `Set-Cookie` header.
    pub fn to_header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&self.to_string())
    }
}

impl std::fmt::Display for SessionCookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}={}; Path=/; Max-Age={}",
            self.name,
            self.value,
            self.max_age.as_secs()
        )?;
        if self.http_only {
            f.write_str("; HttpOnly")?;
        }
        if self.secure {
            f.write_str("; Secure")?;
        }
        Ok(())
    }
}
