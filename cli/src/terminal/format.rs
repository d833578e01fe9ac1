use colored::*;

use rekey_common::config::Config;
use rekey_common::rotation::{RotationOutcome, RotationStatus};

pub const CSV_HEADER: &str = "host,account,password,status";

const REDACTED: &str = "********";

/// Renders one outcome in the configured output mode.
pub fn render_row(outcome: &RotationOutcome, cfg: &Config) -> String {
    if cfg.csv {
        csv_row(outcome, cfg)
    } else {
        table_row(outcome, cfg)
    }
}

fn password_field<'a>(outcome: &'a RotationOutcome, cfg: &Config) -> &'a str {
    if outcome.password.is_empty() {
        ""
    } else if cfg.redact {
        REDACTED
    } else {
        &outcome.password
    }
}

fn table_row(outcome: &RotationOutcome, cfg: &Config) -> String {
    let status: ColoredString = status_colored(outcome.status);
    let password: &str = password_field(outcome, cfg);
    let password: &str = if password.is_empty() { "-" } else { password };

    let mut row: String = format!(
        "{:<24} {:<16} {:<24} {}",
        outcome.host.bright_white(),
        outcome.account,
        status,
        password
    );

    if cfg.quiet == 0
        && let Some(detail) = &outcome.detail
    {
        row.push_str(&format!("\n    └─ {}", detail.dimmed()));
    }

    row
}

fn csv_row(outcome: &RotationOutcome, cfg: &Config) -> String {
    [
        outcome.host.as_str(),
        outcome.account.as_str(),
        password_field(outcome, cfg),
        outcome.status.as_str(),
    ]
    .map(escape_csv_field)
    .join(",")
}

fn status_colored(status: RotationStatus) -> ColoredString {
    match status {
        RotationStatus::Successful => status.as_str().green().bold(),
        RotationStatus::PasswordSetFailed => status.as_str().red().bold(),
        RotationStatus::NetworkConnectionFailed => status.as_str().yellow().bold(),
    }
}

/// Quotes a field when it contains a delimiter, quote or newline; embedded
/// quotes are doubled per RFC 4180.
fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
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
