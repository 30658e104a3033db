//! Concrete implementations of the ports.

pub mod filesystem;
mod luau_dialect;

pub use filesystem::FilesystemStore;
pub use luau_dialect::RobloxLuau;
