//! Process-level services: log locations, tracing and terminal setup

pub mod log_dirs;
pub mod terminal_modes;
#[cfg(feature = "runtime")]
pub mod tracing_setup;
