//! Usage: Infrastructure adapters (startup configuration resolved from the host).

pub(crate) mod launch_config;
