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

//! Runs one of the Cloud KMS samples.

use clap::{Parser, Subcommand};
use google_cloud_kms_v1::client::KeyManagementService;
use kms_samples::{
    add_member_key_ring, disable_key_version, enable_key_version, encrypt_symmetric,
    remove_member_key_ring,
};

#[derive(Debug, Parser)]
#[command(version, about = "Run a Cloud KMS sample")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encrypt a string with a symmetric key.
    Encrypt {
        /// The full name of the key, e.g.
        /// `projects/p/locations/global/keyRings/r/cryptoKeys/k`.
        #[arg(long, env = "KMS_KEY_NAME")]
        key_name: String,
        #[arg(long)]
        plaintext: String,
    },
    /// Disable a key version.
    DisableKeyVersion {
        #[arg(long, env = "KMS_KEY_VERSION_NAME")]
        key_version_name: String,
    },
    /// Enable a key version.
    EnableKeyVersion {
        #[arg(long, env = "KMS_KEY_VERSION_NAME")]
        key_version_name: String,
    },
    /// Remove a principal from a role in the key ring IAM policy.
    RemoveMember {
        #[arg(long, env = "KMS_KEY_RING_NAME")]
        key_ring_name: String,
        /// The principal, e.g. `user:alice@example.com`.
        #[arg(long)]
        member: String,
        #[arg(long, default_value = "roles/cloudkms.cryptoKeyEncrypterDecrypter")]
        role: String,
    },
    /// Add a principal to a role in the key ring IAM policy.
    AddMember {
        #[arg(long, env = "KMS_KEY_RING_NAME")]
        key_ring_name: String,
        #[arg(long)]
        member: String,
        #[arg(long, default_value = "roles/cloudkms.cryptoKeyEncrypterDecrypter")]
        role: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .init();
    tracing::info!("Configuration: {args:?}");

    let client = KeyManagementService::builder().build().await?;
    match args.command {
        Command::Encrypt {
            key_name,
            plaintext,
        } => {
            let ciphertext = encrypt_symmetric::sample(&client, &key_name, plaintext).await?;
            println!("Encrypted ciphertext: {ciphertext:?}");
        }
        Command::DisableKeyVersion { key_version_name } => {
            disable_key_version::sample(&client, &key_version_name).await?;
        }
        Command::EnableKeyVersion { key_version_name } => {
            enable_key_version::sample(&client, &key_version_name).await?;
        }
        Command::RemoveMember {
            key_ring_name,
            member,
            role,
        } => {
            remove_member_key_ring::sample(&client, &key_ring_name, &member, &role).await?;
        }
        Command::AddMember {
            key_ring_name,
            member,
            role,
        } => {
            add_member_key_ring::sample(&client, &key_ring_name, &member, &role).await?;
        }
    }
    Ok(())
}
