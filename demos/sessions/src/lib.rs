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

//! A small web application using session cookies.
//!
//! The application exchanges the ID token of a signed-in user for a session
//! cookie, using the Identity Toolkit API. The session cookie has the same
//! claims as the ID token, but it lives for several days.

mod cookie;
mod error;
mod issuer;
mod routes;

pub use cookie::{DEFAULT_EXPIRES_IN, SESSION_COOKIE_NAME, SessionCookie};
pub use error::Error;
pub use issuer::{CookieIssuer, DEFAULT_ENDPOINT, SessionCookieIssuer};
pub use routes::{GREETINGS, app};

pub type Result<T> = std::result::Result<T, Error>;
