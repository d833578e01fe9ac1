#![cfg(test)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use rekey_common::remote::{Adapter, HostInventory, IdentityService, ReachabilityProbe};

/// One simulated host in the in-memory fleet.
pub struct FleetHost {
    pub reachable: bool,
    pub serial: String,
    pub macs: Vec<String>,
    /// Inventory queries error out, as if the management endpoint is down.
    pub inventory_fails: bool,
    pub apply_fails: bool,
}

impl Default for FleetHost {
    fn default() -> Self {
        Self {
            reachable: true,
            serial: "SN-0001".to_string(),
            macs: Vec::new(),
            inventory_fails: false,
            apply_fails: false,
        }
    }
}

/// In-memory stand-in for all three remote collaborators, shared across the
/// pipeline's trait objects through [`InMemoryFleet::collaborators`].
pub struct InMemoryFleet {
    hosts: HashMap<String, FleetHost>,
    pub apply_calls: AtomicUsize,
    /// (host, account, password) triples in apply order.
    pub applied: Mutex<Vec<(String, String, String)>>,
}

impl InMemoryFleet {
    pub fn new() -> Self {
        Self {
            hosts: HashMap::new(),
            apply_calls: AtomicUsize::new(0),
            applied: Mutex::new(Vec::new()),
        }
    }

    pub fn with_host(mut self, name: &str, host: FleetHost) -> Self {
        self.hosts.insert(name.to_string(), host);
        self
    }

    pub fn collaborators(
        self: &Arc<Self>,
    ) -> (
        Box<dyn ReachabilityProbe>,
        Box<dyn HostInventory>,
        Box<dyn IdentityService>,
    ) {
        (
            Box::new(FleetProbe(self.clone())),
            Box::new(FleetInventory(self.clone())),
            Box::new(FleetIdentity(self.clone())),
        )
    }

    fn host(&self, name: &str) -> anyhow::Result<&FleetHost> {
        self.hosts
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("inventory has no record of host {name}"))
    }
}

struct FleetProbe(Arc<InMemoryFleet>);

#[async_trait]
impl ReachabilityProbe for FleetProbe {
    async fn probe(&self, host: &str) -> bool {
        self.0.hosts.get(host).is_some_and(|h| h.reachable)
    }
}

struct FleetInventory(Arc<InMemoryFleet>);

#[async_trait]
impl HostInventory for FleetInventory {
    async fn fetch_serial(&self, host: &str) -> anyhow::Result<String> {
        let record = self.0.host(host)?;
        if record.inventory_fails {
            anyhow::bail!("management endpoint on {host} did not respond");
        }
        Ok(record.serial.clone())
    }

    async fn fetch_adapters(&self, host: &str) -> anyhow::Result<Vec<Adapter>> {
        let record = self.0.host(host)?;
        if record.inventory_fails {
            anyhow::bail!("management endpoint on {host} did not respond");
        }
        Ok(record.macs.iter().map(Adapter::new).collect())
    }
}

struct FleetIdentity(Arc<InMemoryFleet>);

#[async_trait]
impl IdentityService for FleetIdentity {
    async fn set_password(
        &self,
        host: &str,
        account: &str,
        password: &str,
    ) -> anyhow::Result<()> {
        self.0.apply_calls.fetch_add(1, Ordering::SeqCst);

        if self.0.host(host)?.apply_fails {
            anyhow::bail!("directory service refused the change on {host}");
        }

        self.0.applied.lock().unwrap().push((
            host.to_string(),
            account.to_string(),
            password.to_string(),
        ));
        Ok(())
    }
}
