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

// [START kms_encrypt]
use bytes::Bytes;
use google_cloud_kms_v1::client::KeyManagementService;

/// Encrypts `plaintext` with the symmetric key `key_name`.
///
/// The key name has the form
/// `projects/{project}/locations/{location}/keyRings/{ring}/cryptoKeys/{key}`.
/// The service picks the primary version of the key.
pub async fn sample(
    client: &KeyManagementService,
    key_name: &str,
    plaintext: impl Into<Bytes>,
) -> anyhow::Result<Bytes> {
    let plaintext: Bytes = plaintext.into();
    let plaintext_crc32c = crc32c::crc32c(&plaintext) as i64;

    let response = client
        .encrypt()
        .set_name(key_name)
        .set_plaintext(plaintext)
        .set_plaintext_crc32c(plaintext_crc32c)
        .send()
        .await?;

    if !response.verified_plaintext_crc32c {
        anyhow::bail!("the request sent to the server was corrupted in-transit");
    }
    if let Some(expected) = response.ciphertext_crc32c {
        let actual = crc32c::crc32c(&response.ciphertext) as i64;
        if actual != expected {
            anyhow::bail!("the response received from the server was corrupted in-transit");
        }
    }
    tracing::info!(
        "encrypted {} bytes with {}",
        response.ciphertext.len(),
        response.name
    );
    Ok(response.ciphertext)
}
// [END kms_encrypt]
