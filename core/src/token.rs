//! # Token Resolution & Synthesis
//!
//! Resolves the per-host uniqueness token (hostname, hardware serial, or
//! MAC address) and concatenates it with the operator's static phrase.

use rekey_common::error::RotationError;
use rekey_common::remote::{Adapter, HostInventory};
use rekey_common::rotation::{Phrase, PositionMode, TokenKind};

/// Resolves the token value for `host`.
///
/// An empty string from a successful inventory query is a valid degenerate
/// token (some vendors ship blank serials, some hosts report no adapters);
/// only a failed query becomes an error.
pub async fn resolve(
    kind: TokenKind,
    host: &str,
    inventory: &dyn HostInventory,
) -> Result<String, RotationError> {
    match kind {
        TokenKind::Hostname => Ok(host.to_string()),
        TokenKind::Serial => inventory
            .fetch_serial(host)
            .await
            .map_err(|cause| RotationError::InventoryUnavailable { cause }),
        TokenKind::Mac => {
            let adapters: Vec<Adapter> = inventory
                .fetch_adapters(host)
                .await
                .map_err(|cause| RotationError::InventoryUnavailable { cause })?;

            // Positional convention: the LAST reported adapter wins, not
            // any notion of "primary".
            Ok(adapters
                .last()
                .map(|adapter| adapter.mac_address.clone())
                .unwrap_or_default())
        }
    }
}

/// Pure concatenation of token and phrase. Complexity is not re-checked:
/// the phrase alone already spans all four classes.
pub fn synthesize(token: &str, phrase: &Phrase, position: PositionMode) -> String {
    match position {
        PositionMode::Append => format!("{token}{phrase}"),
        PositionMode::Prepend => format!("{phrase}{token}"),
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
