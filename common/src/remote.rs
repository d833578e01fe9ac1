//! # Remote Collaborator Abstractions
//!
//! The three external systems a rotation run talks to, kept behind traits so
//! the pipeline orchestrates without knowing transport details. High-level
//! modules depend on these abstractions only; concrete adapters live in the
//! core crate and test doubles in the test crates.

use async_trait::async_trait;

/// A single network adapter as reported by host inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adapter {
    pub mac_address: String,
}

impl Adapter {
    pub fn new(mac_address: impl Into<String>) -> Self {
        Self {
            mac_address: mac_address.into(),
        }
    }
}

/// Liveness probe. A `false` answer short-circuits the host's pipeline.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn probe(&self, host: &str) -> bool;
}

/// Hardware/network inventory lookups used for token resolution.
///
/// Both operations may legitimately return empty values (blank vendor
/// serial, no adapters reported); an `Err` means the query itself could not
/// be completed and must surface as a rotation failure.
#[async_trait]
pub trait HostInventory: Send + Sync {
    async fn fetch_serial(&self, host: &str) -> anyhow::Result<String>;

    /// Adapters in the order the host reports them; callers rely on that
    /// ordering being preserved.
    async fn fetch_adapters(&self, host: &str) -> anyhow::Result<Vec<Adapter>>;
}

/// The directory/identity service holding the account credential.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Sets the local account password on the given host. One attempt, no
    /// retries; any `Err` is reported as a failed rotation for that host.
    async fn set_password(&self, host: &str, account: &str, password: &str)
    -> anyhow::Result<()>;
}
