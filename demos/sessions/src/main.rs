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

use clap::Parser;
use getting_started_sessions::{DEFAULT_ENDPOINT, SessionCookieIssuer, app};
use google_cloud_auth::credentials::Builder as CredentialsBuilder;
use std::sync::Arc;

const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Serve a greeting and exchange ID tokens for session cookies.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The project that owns the identity platform tenant.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    project_id: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// The Identity Toolkit API endpoint.
    #[arg(long, env = "IDENTITY_TOOLKIT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    identity_endpoint: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .init();
    tracing::info!("Configuration: {args:?}");

    let credentials = CredentialsBuilder::default()
        .with_scopes([CLOUD_PLATFORM_SCOPE])
        .build()?;
    let issuer = SessionCookieIssuer::new(args.project_id, credentials)
        .with_endpoint(args.identity_endpoint);
    let app = app(Arc::new(issuer));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
