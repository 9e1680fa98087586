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

// [START kms_disable_cryptokey_version]
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::CryptoKeyVersion;
use google_cloud_kms_v1::model::crypto_key_version::CryptoKeyVersionState;
use google_cloud_wkt::FieldMask;

/// Disables the key version `key_version_name`.
///
/// Example key version name:
/// `projects/PROJECT_ID/locations/global/keyRings/RING_ID/cryptoKeys/KEY_ID/cryptoKeyVersions/1`
pub async fn sample(
    client: &KeyManagementService,
    key_version_name: &str,
) -> anyhow::Result<CryptoKeyVersion> {
    let result = client
        .update_crypto_key_version()
        .set_crypto_key_version(
            CryptoKeyVersion::new()
                .set_name(key_version_name)
                .set_state(CryptoKeyVersionState::Disabled),
        )
        .set_update_mask(FieldMask::default().set_paths(["state"]))
        .send()
        .await?;
    tracing::info!("disabled {}", result.name);
    println!("Disabled crypto key version: {result:?}");
    Ok(result)
}
// [END kms_disable_cryptokey_version]
