// Copyright 2025 Google LLC
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

/// Translate a greeting using a Cloud Translation client authenticated with
/// an API key.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The API key. Create one in the Google Cloud console, under
    /// "APIs & Services > Credentials".
    #[arg(long, env = "TRANSLATE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// The project that owns the API key.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    project_id: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .init();
    tracing::info!("translating with project {}", args.project_id);

    translate_samples::client_with_key::sample(&args.api_key, &args.project_id).await?;
    Ok(())
}
