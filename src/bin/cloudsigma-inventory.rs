// Copyright (c) 2025 - Cowboy AI, Inc.
//! CloudSigma Inventory
//!
//! Lists the servers of a CloudSigma account and prints each one as a
//! provider-neutral compute node, one JSON document per line.
//!
//! Run with: cargo run --bin cloudsigma-inventory --features client
//!
//! Prerequisites:
//! 1. CLOUDSIGMA_USERNAME and CLOUDSIGMA_PASSWORD set
//! 2. Optionally CLOUDSIGMA_ENDPOINT (defaults to the Zurich region)

use anyhow::{Context, Result};
use cim_infrastructure_cloudsigma::{
    client::CloudSigmaClient, compute::ingress_permissions, compute::ComputeAdapter,
    config::CloudSigmaConfig, domain::FirewallPolicy,
};
use std::collections::HashMap;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CloudSigmaConfig::from_env()
        .context("CloudSigma credentials missing. Set CLOUDSIGMA_USERNAME and CLOUDSIGMA_PASSWORD")?;
    let client = CloudSigmaClient::new(config).context("Failed to create CloudSigma client")?;

    let servers = client
        .list_servers_detail()
        .await
        .context("Failed to list servers")?;
    info!("Found {} server(s)", servers.len());

    let adapter = ComputeAdapter::new(client.clone());
    let mut policies: HashMap<String, Option<FirewallPolicy>> = HashMap::new();
    for server in &servers {
        match adapter.node(server).await {
            Ok(node) => {
                let json = serde_json::to_string(&node).context("Failed to encode node")?;
                println!("{}", json);
            }
            Err(e) => warn!("Skipping server {:?}: {}", server.uuid(), e),
        }

        for nic in &server.nics {
            let Some(reference) = &nic.firewall_policy else {
                continue;
            };
            let key = reference.uuid.clone().unwrap_or_default();
            if !policies.contains_key(&key) {
                let resolved = match client.resolve_firewall_policy(reference).await {
                    Ok(policy) => policy,
                    Err(e) => {
                        warn!("Failed to resolve firewall policy {:?}: {}", reference.uuid, e);
                        None
                    }
                };
                policies.insert(key.clone(), resolved);
            }

            if let Some(Some(policy)) = policies.get(&key) {
                info!(
                    "Server {:?} policy {:?}: {} ingress permission(s)",
                    server.name(),
                    policy.name,
                    ingress_permissions(policy).len()
                );
            }
        }
    }

    info!("Drive cache holds {} entr(ies)", adapter.cache().len());
    Ok(())
}
