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

//! Samples for the Cloud Key Management Service client library.
//!
//! Each module contains a single `sample()` function. The functions receive
//! an already initialized client, make one call (or one short sequence of
//! calls), and return the relevant part of the response. Errors are returned
//! to the caller as-is, there is no retry loop beyond the client defaults.

pub mod add_member_key_ring;
pub mod disable_key_version;
pub mod enable_key_version;
pub mod encrypt_symmetric;
pub mod remove_member_key_ring;

#[cfg(test)]
pub(crate) mod mocks;

use google_cloud_kms_v1::client::KeyManagementService;

/// Runs all the samples against a real project.
///
/// The key version is disabled and enabled again, and `member` is added and
/// then removed from the key ring policy, so the resources are left as they
/// were found.
pub async fn run_all_examples(
    key_ring_name: &str,
    key_name: &str,
    key_version_name: &str,
    member: &str,
) -> anyhow::Result<()> {
    let _guard = {
        let subscriber = tracing_subscriber::fmt()
            .with_level(true)
            .with_thread_ids(true)
            .finish();

        tracing::subscriber::set_default(subscriber)
    };

    let client = KeyManagementService::builder().build().await?;
    let role = "roles/cloudkms.cryptoKeyEncrypterDecrypter";

    tracing::info!("running encrypt_symmetric example");
    let ciphertext = encrypt_symmetric::sample(&client, key_name, "hi").await?;
    anyhow::ensure!(!ciphertext.is_empty(), "empty ciphertext");
    tracing::info!("running disable_key_version example");
    disable_key_version::sample(&client, key_version_name).await?;
    tracing::info!("running enable_key_version example");
    enable_key_version::sample(&client, key_version_name).await?;
    tracing::info!("running add_member_key_ring example");
    add_member_key_ring::sample(&client, key_ring_name, member, role).await?;
    tracing::info!("running remove_member_key_ring example");
    remove_member_key_ring::sample(&client, key_ring_name, member, role).await?;
    Ok(())
}
