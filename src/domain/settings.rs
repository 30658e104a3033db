//! Tool settings shared by `init` and `build`.

/// Immutable settings constructed once per process and passed into commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSettings {
    /// Configuration filename relative to the project root.
    pub config_file: String,
    /// Comment line emitted after the strict-mode pragma.
    pub generated_header: String,
    /// Wally package identifier of the lifecycle-handle library.
    pub lifecycle_package: String,
    /// Exported type name of the lifecycle handle.
    pub lifecycle_type: String,
    /// Rojo project descriptor that marks the project root.
    pub project_marker: String,
    /// Wally manifest.
    pub manifest_marker: String,
    /// Toolchain pin files; any one of them satisfies pre-flight.
    pub toolchain_markers: Vec<String>,
}

pub const CONFIG_FILE: &str = "boot.toml";
pub const GENERATED_HEADER: &str = "-- generated by Boot CLT, do not manually edit";
pub const LIFECYCLE_PACKAGE: &str = "nightcycle/maid@1.1.4";

impl Default for BootSettings {
    fn default() -> Self {
        Self {
            config_file: CONFIG_FILE.to_string(),
            generated_header: GENERATED_HEADER.to_string(),
            lifecycle_package: LIFECYCLE_PACKAGE.to_string(),
            lifecycle_type: "Maid".to_string(),
            project_marker: "default.project.json".to_string(),
            manifest_marker: "wally.toml".to_string(),
            toolchain_markers: vec!["foreman.toml".to_string(), "aftman.toml".to_string()],
        }
    }
}
