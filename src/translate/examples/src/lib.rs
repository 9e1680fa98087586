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

//! Samples for the Cloud Translation client library.

pub mod client_with_key;

#[cfg(test)]
pub(crate) mod mocks;

use google_cloud_translation_v3::client::TranslationService;
use google_cloud_translation_v3::model::Translation;

/// Translates `contents` into `target_language` as plain text.
///
/// `parent` is `projects/{project}` or `projects/{project}/locations/{location}`.
/// The `target_language` is a BCP-47 tag, such as `ru` or `pt-BR`, and it is
/// sent to the service without validation.
pub async fn translate_text<I, S>(
    client: &TranslationService,
    parent: &str,
    contents: I,
    target_language: &str,
) -> google_cloud_gax::Result<Vec<Translation>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let response = client
        .translate_text()
        .set_parent(parent)
        .set_contents(contents)
        .set_mime_type("text/plain")
        .set_target_language_code(target_language)
        .send()
        .await?;
    Ok(response.translations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockTranslationService, client, service_error};
    use google_cloud_gax as gax;
    use google_cloud_translation_v3 as translate;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockTranslationService::new();
        mock.expect_translate_text()
            .withf(|r, _| {
                r.parent == "projects/p/locations/global"
                    && r.contents == ["Hello, world!"]
                    && r.target_language_code == "ru"
                    && r.mime_type == "text/plain"
            })
            .return_once(|_, _| {
                Ok(gax::response::Response::from(
                    translate::model::TranslateTextResponse::new().set_translations([
                        Translation::new()
                            .set_translated_text("Привет, мир!")
                            .set_detected_language_code("en"),
                    ]),
                ))
            });
        let client = client(mock);

        let got = translate_text(&client, "projects/p/locations/global", ["Hello, world!"], "ru").await?;
        assert_eq!(got.len(), 1, "{got:?}");
        assert_eq!(got[0].translated_text, "Привет, мир!");
        assert_eq!(got[0].detected_language_code, "en");
        Ok(())
    }

    #[tokio::test]
    async fn error() -> anyhow::Result<()> {
        let mut mock = MockTranslationService::new();
        mock.expect_translate_text().return_once(|_, _| {
            Err(service_error(
                gax::error::rpc::Code::InvalidArgument,
                "Target language is invalid.",
            ))
        });
        let client = client(mock);

        let got = translate_text(&client, "projects/p", ["Hello"], "xx-invalid").await;
        let err = got.unwrap_err();
        assert_eq!(
            err.status().map(|s| s.code),
            Some(gax::error::rpc::Code::InvalidArgument)
        );
        Ok(())
    }
}
