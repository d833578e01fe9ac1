use std::time::Duration;

/// Runtime options shared across commands, built once from CLI flags.
pub struct Config {
    /// 0 = full output, 1 = rows only, 2 = summary only.
    pub quiet: u8,
    /// Masks password values in every rendered row.
    pub redact: bool,
    /// Emit CSV rows instead of the colored table.
    pub csv: bool,
    /// Budget for one host's derivation + apply.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            redact: false,
            csv: false,
            timeout: Duration::from_secs(30),
        }
    }
}
