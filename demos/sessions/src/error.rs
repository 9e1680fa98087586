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

use google_cloud_auth::errors::CredentialsError;
use reqwest::StatusCode;
use std::time::Duration;

/// The errors returned when creating a session cookie.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The requested lifetime is outside the range accepted by the service.
    #[error("session cookie duration must be between {min:?} and {max:?}, got {got:?}")]
    InvalidDuration {
        got: Duration,
        min: Duration,
        max: Duration,
    },

    /// The authentication headers could not be created.
    #[error("cannot create authentication headers: {0}")]
    Credentials(#[source] CredentialsError),

    /// The request did not reach the service, or the response was lost.
    #[error("cannot send request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service rejected the request, e.g. because the ID token is invalid
    /// or expired.
    #[error("the service returned {status}: {body}")]
    Service { status: StatusCode, body: String },

    #[error("cannot decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl Error {
    /// Returns true if the service rejected the request.
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// Returns the HTTP status for service errors.
    pub fn http_status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}
