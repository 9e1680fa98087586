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

#[cfg(all(test, feature = "run-integration-tests"))]
mod driver {
    #[tokio::test(flavor = "multi_thread")]
    async fn run_all_examples() -> anyhow::Result<()> {
        let key_ring_name = std::env::var("GOOGLE_CLOUD_RUST_TEST_KMS_KEY_RING")?;
        let key_name = format!("{key_ring_name}/cryptoKeys/samples-symmetric");
        let key_version_name = format!("{key_name}/cryptoKeyVersions/1");
        let member = format!(
            "serviceAccount:{}",
            std::env::var("GOOGLE_CLOUD_RUST_TEST_SERVICE_ACCOUNT")?
        );
        kms_samples::run_all_examples(&key_ring_name, &key_name, &key_version_name, &member).await
    }
}
