//! # Rotation Pipeline
//!
//! Per-host orchestration: reachability check → password derivation →
//! credential apply → outcome record. Every failure inside one host's run is
//! caught at that host's boundary and converted to a status; nothing ever
//! escapes to abort the rest of the batch, so the caller receives exactly
//! one [`RotationOutcome`] per input host.

use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;

use rekey_common::error::RotationError;
use rekey_common::remote::{HostInventory, IdentityService, ReachabilityProbe};
use rekey_common::rotation::{HostTarget, RotationOutcome, Strategy};

use crate::{generate, token};

/// A failure together with whatever password had been computed before it.
struct HostFailure {
    password: String,
    error: RotationError,
}

/// Orchestrates rotation across a batch of hosts, one at a time.
///
/// Collaborators are injected as trait objects; the strategy is chosen once
/// per invocation. No state is shared between hosts and none survives the
/// run.
pub struct RotationPipeline {
    probe: Box<dyn ReachabilityProbe>,
    inventory: Box<dyn HostInventory>,
    identity: Box<dyn IdentityService>,
    strategy: Strategy,
    /// Budget for one host's derivation + apply; the probe carries its own.
    timeout: Duration,
}

impl RotationPipeline {
    pub fn new(
        probe: Box<dyn ReachabilityProbe>,
        inventory: Box<dyn HostInventory>,
        identity: Box<dyn IdentityService>,
        strategy: Strategy,
        timeout: Duration,
    ) -> Self {
        Self {
            probe,
            inventory,
            identity,
            strategy,
            timeout,
        }
    }

    /// Processes `targets` sequentially in input order, invoking
    /// `on_outcome` as each record is produced so consumers can render
    /// results before the batch completes.
    pub async fn run(
        &self,
        targets: &[HostTarget],
        mut on_outcome: impl FnMut(&RotationOutcome),
    ) -> Vec<RotationOutcome> {
        let mut outcomes: Vec<RotationOutcome> = Vec::with_capacity(targets.len());

        for target in targets {
            let outcome: RotationOutcome = self.rotate(target).await;
            on_outcome(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    /// Runs the full pipeline for a single host. Infallible by contract:
    /// every failure path ends in an outcome record.
    pub async fn rotate(&self, target: &HostTarget) -> RotationOutcome {
        debug!(host = %target.host, account = %target.account, "starting rotation");

        if !self.probe.probe(&target.host).await {
            return RotationOutcome::failure(target, String::new(), &RotationError::Unreachable);
        }

        match timeout(self.timeout, self.derive_and_apply(target)).await {
            Ok(Ok(password)) => RotationOutcome::success(target, password),
            Ok(Err(failure)) => {
                RotationOutcome::failure(target, failure.password, &failure.error)
            }
            Err(_elapsed) => {
                RotationOutcome::failure(target, String::new(), &RotationError::Timeout)
            }
        }
    }

    async fn derive_and_apply(&self, target: &HostTarget) -> Result<String, HostFailure> {
        let password: String = self.derive(target).await.map_err(|error| HostFailure {
            password: String::new(),
            error,
        })?;

        match self
            .identity
            .set_password(&target.host, &target.account, &password)
            .await
        {
            Ok(()) => Ok(password),
            Err(e) => Err(HostFailure {
                error: RotationError::ApplyRejected {
                    reason: e.to_string(),
                },
                // Keep the attempted password in the record
                password,
            }),
        }
    }

    async fn derive(&self, target: &HostTarget) -> Result<String, RotationError> {
        match &self.strategy {
            Strategy::Random => generate::generate(),
            Strategy::Token {
                kind,
                phrase,
                position,
            } => {
                let value: String =
                    token::resolve(*kind, &target.host, self.inventory.as_ref()).await?;
                Ok(token::synthesize(&value, phrase, *position))
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
