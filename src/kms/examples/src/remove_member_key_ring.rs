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

// [START kms_remove_member_from_keyring_policy]
use google_cloud_iam_v1::model::Policy;
use google_cloud_kms_v1::client::KeyManagementService;

/// Removes `member` from the `role` binding in the IAM policy of a key ring.
///
/// Example key ring name: `projects/PROJECT_ID/locations/global/keyRings/RING_ID`
pub async fn sample(
    client: &KeyManagementService,
    key_ring_name: &str,
    member: &str,
    role: &str,
) -> anyhow::Result<Policy> {
    let key_ring = client.get_key_ring().set_name(key_ring_name).send().await?;

    let mut policy = client
        .get_iam_policy()
        .set_resource(&key_ring.name)
        .send()
        .await?;
    if let Some(binding) = policy.bindings.iter_mut().find(|b| b.role == role) {
        binding.members.retain(|m| m != member);
    }
    policy.bindings.retain(|b| !b.members.is_empty());

    let updated = client
        .set_iam_policy()
        .set_resource(&key_ring.name)
        .set_policy(policy)
        .send()
        .await?;
    tracing::info!("removed {member} with role {role} from {}", key_ring.name);
    println!("Removed member from keyring policy.");
    Ok(updated)
}
// [END kms_remove_member_from_keyring_policy]
