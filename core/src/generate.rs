//! # Random Password Generation
//!
//! Rejection sampling against [`ComplexityPolicy::generated`]: draw a
//! candidate of random length from the full alphanumeric + punctuation
//! alphabet and keep the first one that satisfies the policy. The sampler is
//! bounded; running out of attempts is reported as a distinct error instead
//! of recursing forever.

use rand::Rng;
use tracing::trace;

use rekey_common::error::RotationError;
use rekey_common::policy::ComplexityPolicy;

/// Uppercase, lowercase, digits and all 32 printable ASCII punctuation
/// characters.
const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Far beyond what rejection sampling over this alphabet ever needs; even a
/// 30-char candidate misses a class only a few percent of the time.
const MAX_ATTEMPTS: usize = 512;

/// Produces a random password guaranteed to satisfy the generated-password
/// policy: length in [30,59] with all four character classes present.
///
/// Entropy comes from the OS-seeded thread-local CSPRNG.
pub fn generate() -> Result<String, RotationError> {
    let policy: ComplexityPolicy = ComplexityPolicy::generated();
    let mut rng = rand::rng();

    for attempt in 0..MAX_ATTEMPTS {
        let length: usize = rng.random_range(30..60);
        let candidate: String = (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();

        if policy.satisfies(&candidate) {
            return Ok(candidate);
        }
        trace!(attempt, length, "rejected non-compliant candidate");
    }

    Err(RotationError::GenerationExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
