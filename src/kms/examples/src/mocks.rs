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
use google_cloud_iam_v1::model::{GetIamPolicyRequest, Policy, SetIamPolicyRequest};
use google_cloud_kms_v1 as kms;

mockall::mock! {
    #[derive(Debug)]
    pub KeyManagementService {}
    impl kms::stub::KeyManagementService for KeyManagementService {
        async fn get_key_ring(&self, req: kms::model::GetKeyRingRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<kms::model::KeyRing>>;
        async fn update_crypto_key_version(&self, req: kms::model::UpdateCryptoKeyVersionRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<kms::model::CryptoKeyVersion>>;
        async fn encrypt(&self, req: kms::model::EncryptRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<kms::model::EncryptResponse>>;
        async fn get_iam_policy(&self, req: GetIamPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<Policy>>;
        async fn set_iam_policy(&self, req: SetIamPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<Policy>>;
    }
}

/// Returns a `NOT_FOUND` error, as the service would for a missing resource.
pub fn not_found(message: &str) -> gax::error::Error {
    use gax::error::rpc::{Code, Status};
    let status = Status::default()
        .set_code(Code::NotFound)
        .set_message(message);
    gax::error::Error::service(status)
}

/// Returns a `PERMISSION_DENIED` error.
pub fn permission_denied(message: &str) -> gax::error::Error {
    use gax::error::rpc::{Code, Status};
    let status = Status::default()
        .set_code(Code::PermissionDenied)
        .set_message(message);
    gax::error::Error::service(status)
}

pub fn client(mock: MockKeyManagementService) -> kms::client::KeyManagementService {
    kms::client::KeyManagementService::from_stub(mock)
}
