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

// [START translate_create_client_with_key]
use anyhow::Context;
use google_cloud_auth::credentials::api_key_credentials::Builder as ApiKeyCredentialsBuilder;
use google_cloud_translation_v3::client::TranslationService;
use google_cloud_translation_v3::model::Translation;

/// Translates a greeting using a client authenticated with an API key.
pub async fn sample(api_key: &str, project_id: &str) -> anyhow::Result<Vec<Translation>> {
    let credentials = ApiKeyCredentialsBuilder::new(api_key).build();
    let client = TranslationService::builder()
        .with_credentials(credentials)
        .build()
        .await
        .context("translate client")?;

    let translations = greet(&client, project_id).await?;
    println!("{translations:#?}");
    Ok(translations)
}

/// Translates "Hello, world!" into Russian.
pub async fn greet(client: &TranslationService, project_id: &str) -> anyhow::Result<Vec<Translation>> {
    let parent = format!("projects/{project_id}/locations/global");
    crate::translate_text(client, &parent, ["Hello, world!"], "ru")
        .await
        .context("TranslateText")
}
// [END translate_create_client_with_key]
