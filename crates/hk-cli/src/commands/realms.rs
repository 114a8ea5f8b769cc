//! `housekeeping realms` handlers.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use hk_core::HousekeepingContext;
use hk_sdk::{HousekeepingClient, NewRealm};

use crate::cli::RealmsCommand;

pub async fn run(
    ctx: &HousekeepingContext,
    command: &RealmsCommand,
    out: &mut impl Write,
) -> Result<()> {
    let client = HousekeepingClient::new(ctx);

    match command {
        RealmsCommand::List => {
            let realms = client.list_realms().await.context("Failed to list realms")?;
            for realm in realms {
                writeln!(out, "{}", realm)?;
            }
        }
        RealmsCommand::Show { realm_name } => {
            let realm = client
                .get_realm(realm_name)
                .await
                .with_context(|| format!("Failed to fetch realm {}", realm_name))?;
            writeln!(out, "{}", serde_json::to_string_pretty(&realm)?)?;
        }
        RealmsCommand::Create {
            realm_name,
            public_key,
            replication_factor,
        } => {
            let jwt_public_key_pem = fs::read_to_string(public_key).with_context(|| {
                format!("Failed to read realm public key {}", public_key.display())
            })?;

            let realm = NewRealm {
                realm_name: realm_name.clone(),
                jwt_public_key_pem,
                replication_factor: *replication_factor,
            };
            client
                .create_realm(&realm)
                .await
                .with_context(|| format!("Failed to create realm {}", realm_name))?;
            writeln!(out, "Realm {} created.", realm_name)?;
        }
    }

    Ok(())
}
