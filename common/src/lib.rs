pub mod config;
pub mod error;
pub mod logging;
pub mod policy;
pub mod remote;
pub mod rotation;
