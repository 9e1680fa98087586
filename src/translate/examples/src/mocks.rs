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

//! Mocks shared by the unit tests in this crate.

use google_cloud_gax as gax;
use google_cloud_translation_v3 as translate;

mockall::mock! {
    #[derive(Debug)]
    pub TranslationService {}
    impl translate::stub::TranslationService for TranslationService {
        async fn translate_text(&self, req: translate::model::TranslateTextRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<translate::model::TranslateTextResponse>>;
    }
}

/// Returns an error as the service would, with the given code and message.
pub fn service_error(code: gax::error::rpc::Code, message: &str) -> gax::error::Error {
    let status = gax::error::rpc::Status::default()
        .set_code(code)
        .set_message(message);
    gax::error::Error::service(status)
}

pub fn client(mock: MockTranslationService) -> translate::client::TranslationService {
    translate::client::TranslationService::from_stub(mock)
}
