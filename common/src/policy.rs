//! # Password Complexity Policy
//!
//! Defines the strength predicate every password in the system must satisfy:
//! bounded length plus at least one character from each of the four classes
//! (lowercase, uppercase, digit, ASCII punctuation).

use anyhow::ensure;

/// Shortest phrase/password the four classes can fit into.
const ABSOLUTE_MIN_LEN: usize = 4;

/// A length-bounded, four-class password strength predicate.
///
/// The symbol class is the full printable ASCII punctuation set
/// (everything printable that is neither alphanumeric nor a space).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComplexityPolicy {
    pub min_len: usize,
    pub max_len: usize,
}

impl ComplexityPolicy {
    /// Builds a policy with caller-chosen bounds.
    ///
    /// Fails if the bounds are inverted or too tight to fit all four
    /// character classes.
    pub fn new(min_len: usize, max_len: usize) -> anyhow::Result<Self> {
        ensure!(
            min_len <= max_len,
            "policy bounds inverted: min {min_len} > max {max_len}"
        );
        ensure!(
            min_len >= ABSOLUTE_MIN_LEN,
            "minimum length {min_len} cannot fit all four character classes"
        );
        Ok(Self { min_len, max_len })
    }

    /// Policy applied to operator-supplied phrases.
    pub const fn phrase() -> Self {
        Self {
            min_len: 4,
            max_len: 60,
        }
    }

    /// Policy applied to randomly generated passwords.
    pub const fn generated() -> Self {
        Self {
            min_len: 30,
            max_len: 60,
        }
    }

    /// Checks `candidate` against the policy. Pure, no side effects.
    pub fn satisfies(&self, candidate: &str) -> bool {
        let len: usize = candidate.chars().count();
        if len < self.min_len || len > self.max_len {
            return false;
        }

        candidate.chars().any(|c| c.is_ascii_lowercase())
            && candidate.chars().any(|c| c.is_ascii_uppercase())
            && candidate.chars().any(|c| c.is_ascii_digit())
            && candidate.chars().any(is_symbol)
    }
}

/// True for printable ASCII punctuation/symbol characters.
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_punctuation()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
