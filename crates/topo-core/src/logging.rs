//! Target-tagged logging macros.
//!
//! `ctrl` carries run control flow (fetch, write, refresh), `data` carries
//! record-level problems found while reading the documents.

#[doc(hidden)]
pub use log as __log;

pub const TARGET_CTRL: &str = "ctrl";
pub const TARGET_DATA: &str = "data";

#[macro_export]
macro_rules! info_ctrl {
    ($($arg:tt)+) => {
        $crate::logging::__log::info!(target: $crate::logging::TARGET_CTRL, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug_ctrl {
    ($($arg:tt)+) => {
        $crate::logging::__log::debug!(target: $crate::logging::TARGET_CTRL, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn_data {
    ($($arg:tt)+) => {
        $crate::logging::__log::warn!(target: $crate::logging::TARGET_DATA, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug_data {
    ($($arg:tt)+) => {
        $crate::logging::__log::debug!(target: $crate::logging::TARGET_DATA, $($arg)+)
    };
}
