//! Command-backed inventory and identity adapters.
//!
//! The directory service and hardware inventory stay external by design;
//! the operator points these adapters at whatever remote management tooling
//! the fleet already has (winrs, ssh, a vendor CLI) via command templates.
//! `{host}` and `{account}` placeholders are substituted before the command
//! runs through the shell.

use std::process::Stdio;

use anyhow::{Context, bail, ensure};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use rekey_common::remote::{Adapter, HostInventory, IdentityService};

/// Inventory lookups backed by operator-supplied command templates.
///
/// `fetch_serial` takes the command's trimmed stdout as the serial (blank
/// output is a valid blank serial); `fetch_adapters` expects one MAC
/// address per non-empty stdout line, in the order the host reports them.
pub struct CommandInventory {
    pub serial_cmd: Option<String>,
    pub mac_cmd: Option<String>,
}

#[async_trait]
impl HostInventory for CommandInventory {
    async fn fetch_serial(&self, host: &str) -> anyhow::Result<String> {
        let Some(template) = &self.serial_cmd else {
            bail!("no serial inventory command configured (--serial-cmd)");
        };
        let stdout: String = run_template(template, host).await?;
        Ok(stdout.trim().to_string())
    }

    async fn fetch_adapters(&self, host: &str) -> anyhow::Result<Vec<Adapter>> {
        let Some(template) = &self.mac_cmd else {
            bail!("no adapter inventory command configured (--mac-cmd)");
        };
        let stdout: String = run_template(template, host).await?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Adapter::new)
            .collect())
    }
}

/// Identity service backed by an operator-supplied command template.
///
/// The new password is written to the child's stdin followed by a newline,
/// never placed on the command line where it would leak into process
/// listings.
pub struct CommandIdentity {
    pub apply_cmd: String,
}

#[async_trait]
impl IdentityService for CommandIdentity {
    async fn set_password(
        &self,
        host: &str,
        account: &str,
        password: &str,
    ) -> anyhow::Result<()> {
        let rendered: String = self
            .apply_cmd
            .replace("{host}", host)
            .replace("{account}", account);

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&rendered)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawning apply command for {host}"))?;

        {
            let mut stdin = child.stdin.take().context("apply command has no stdin")?;
            stdin.write_all(password.as_bytes()).await?;
            stdin.write_all(b"\n").await?;
        }

        let output = child
            .wait_with_output()
            .await
            .with_context(|| format!("waiting for apply command on {host}"))?;

        ensure!(
            output.status.success(),
            "apply command exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        Ok(())
    }
}

/// Renders `{host}` into the template and runs it through the shell,
/// returning stdout. Non-zero exit is a failed query.
async fn run_template(template: &str, host: &str) -> anyhow::Result<String> {
    let rendered: String = template.replace("{host}", host);

    let output = Command::new("sh")
        .arg("-c")
        .arg(&rendered)
        .stdin(Stdio::null())
        .output()
        .await
        .with_context(|| format!("running inventory command for {host}"))?;

    ensure!(
        output.status.success(),
        "inventory command exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
    );
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
