//! Concrete adapters for the remote collaborator traits.
//!
//! The pipeline only sees the trait objects from `rekey_common::remote`;
//! these implementations are what the CLI wires in: a TCP reachability
//! probe and command-backed inventory/identity adapters so any remote
//! management tooling the operator already has can do the actual work.

pub mod command;
pub mod probe;
