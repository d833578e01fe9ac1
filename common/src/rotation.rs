//! # Rotation Data Model
//!
//! The types that flow through a rotation run: the per-host target, the
//! derivation strategy selected once per invocation, and the outcome record
//! emitted for every host.

use std::fmt;
use std::str::FromStr;

use crate::error::RotationError;
use crate::policy::ComplexityPolicy;

/// A single account on a single host, immutable for one rotation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostTarget {
    pub host: String,
    pub account: String,
}

impl HostTarget {
    pub fn new(host: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            account: account.into(),
        }
    }
}

/// Per-host uniqueness token source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Serial,
    Hostname,
    Mac,
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "serial" => Ok(Self::Serial),
            "hostname" => Ok(Self::Hostname),
            "mac" => Ok(Self::Mac),
            other => Err(format!(
                "invalid token kind '{other}' (expected serial, hostname or mac)"
            )),
        }
    }
}

/// Where the token lands relative to the phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionMode {
    /// token + phrase
    Append,
    /// phrase + token
    Prepend,
}

impl FromStr for PositionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "prepend" => Ok(Self::Prepend),
            other => Err(format!(
                "invalid position '{other}' (expected append or prepend)"
            )),
        }
    }
}

/// Operator-supplied static phrase, validated once at parse time.
///
/// A phrase must be 4 to 60 characters long and itself span all four
/// complexity classes; token synthesis relies on that to keep the combined
/// password compliant without re-checking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phrase(String);

impl Phrase {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phrase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let policy: ComplexityPolicy = ComplexityPolicy::phrase();
        if !policy.satisfies(s) {
            return Err(format!(
                "phrase must be {}-{} characters and contain a lowercase letter, \
                 an uppercase letter, a digit and a symbol",
                policy.min_len, policy.max_len
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the per-host password is derived. Selected once per invocation and
/// threaded through the pipeline; the two modes are mutually exclusive.
#[derive(Clone, Debug)]
pub enum Strategy {
    /// Fresh random password per host, rejection-sampled against policy.
    Random,
    /// Per-host token combined with a validated static phrase.
    Token {
        kind: TokenKind,
        phrase: Phrase,
        position: PositionMode,
    },
}

/// Public per-host result status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationStatus {
    Successful,
    PasswordSetFailed,
    NetworkConnectionFailed,
}

impl RotationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Successful => "Successful",
            Self::PasswordSetFailed => "PasswordSetFailed",
            Self::NetworkConnectionFailed => "NetworkConnectionFailed",
        }
    }
}

impl fmt::Display for RotationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record per host, created once and never mutated afterwards.
///
/// `password` holds whatever value was computed before the attempt ended:
/// the password actually set on success, the attempted password when the
/// apply call failed, or empty when derivation never produced one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationOutcome {
    pub host: String,
    pub account: String,
    pub password: String,
    pub status: RotationStatus,
    /// Failure sub-reason for operators; `None` on success.
    pub detail: Option<String>,
}

impl RotationOutcome {
    pub fn success(target: &HostTarget, password: String) -> Self {
        Self {
            host: target.host.clone(),
            account: target.account.clone(),
            password,
            status: RotationStatus::Successful,
            detail: None,
        }
    }

    /// Projects the rich internal error down to the public status, keeping
    /// the sub-reason as display detail.
    pub fn failure(target: &HostTarget, password: String, error: &RotationError) -> Self {
        Self {
            host: target.host.clone(),
            account: target.account.clone(),
            password,
            status: error.status(),
            detail: Some(error.to_string()),
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
