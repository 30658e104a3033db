//! Boot order data model loaded from `boot.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// One domain in the boot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainConfig {
    /// Module names in init order.
    pub modules: Vec<String>,
    /// Whether later domains inherit these modules.
    pub is_shared: bool,
    /// Instance path the modules live under, e.g. `game/ReplicatedStorage/Shared`.
    pub domain_path: String,
    /// Output script path. Domains without one only contribute modules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_path: Option<String>,
}

impl DomainConfig {
    pub fn new(domain_path: impl Into<String>) -> Self {
        Self {
            modules: Vec::new(),
            is_shared: false,
            domain_path: domain_path.into(),
            build_path: None,
        }
    }

    pub fn shared(mut self) -> Self {
        self.is_shared = true;
        self
    }

    pub fn with_build_path(mut self, path: impl Into<String>) -> Self {
        self.build_path = Some(path.into());
        self
    }

    pub fn with_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modules = modules.into_iter().map(Into::into).collect();
        self
    }

    fn validate(&self, index: usize) -> Result<(), AppError> {
        if self.domain_path.trim().is_empty() {
            return Err(AppError::malformed(format!("boot_order[{index}]: domain_path is empty")));
        }
        for module in &self.modules {
            if module.trim().is_empty() {
                return Err(AppError::malformed(format!(
                    "boot_order[{index}]: invalid module name '{module}'"
                )));
            }
        }
        if matches!(&self.build_path, Some(path) if path.trim().is_empty()) {
            return Err(AppError::malformed(format!("boot_order[{index}]: build_path is empty")));
        }
        Ok(())
    }
}

/// Ordered, immutable sequence of domains.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BootOrder {
    domains: Vec<DomainConfig>,
}

/// On-disk shape of `boot.toml`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BootConfigFile {
    boot_order: Vec<DomainConfig>,
}

impl BootOrder {
    pub fn new(domains: Vec<DomainConfig>) -> Self {
        Self { domains }
    }

    pub fn domains(&self) -> &[DomainConfig] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Parse and validate `boot.toml` content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let file: BootConfigFile = toml::from_str(content)?;
        for (index, domain) in file.boot_order.iter().enumerate() {
            domain.validate(index)?;
        }
        Ok(Self::new(file.boot_order))
    }

    pub fn to_toml(&self) -> Result<String, AppError> {
        let file = BootConfigFile { boot_order: self.domains.clone() };
        Ok(toml::to_string_pretty(&file)?)
    }

    /// Default five-domain layout written by `init`.
    pub fn template() -> Self {
        Self::new(vec![
            DomainConfig::new("game/ReplicatedStorage/Packages").shared(),
            DomainConfig::new("game/ReplicatedStorage/Shared").shared(),
            DomainConfig::new("game/ServerScriptService/Server")
                .with_build_path("src/Server/Boot.server.luau"),
            DomainConfig::new("game/ReplicatedFirst/First")
                .with_build_path("src/First/Boot.client.luau"),
            DomainConfig::new("game/ReplicatedStorage/Client")
                .with_build_path("src/Client/Boot.client.luau"),
        ])
    }
}
