//! Logging macros shared by every crate in the workspace.
//!
//! Thin wrappers over [`tracing`] so call sites stay terse and the CLI's
//! formatter can style everything in one place. `success!` logs at INFO
//! under a dedicated target for calls that report completed work.

pub use tracing;

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logging::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logging::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::logging::tracing::error!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::logging::tracing::info!(target: "rekey::success", $($arg)*)
    };
}
