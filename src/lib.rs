//! boot: Generate deterministic boot scripts for Roblox projects whose modules
//! are grouped into ordered domains.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{BuildOutcome, build, build_at, build_with, init, init_at, init_with};
pub use domain::{AppError, BootOrder, BootSettings, DomainConfig, GeneratedScript, ScriptShape};
