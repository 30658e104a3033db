pub mod assembler;
pub mod boot_order;
pub mod config_resolver;
pub mod error;
pub mod preflight;
pub mod script;
pub mod settings;

pub use assembler::{BootAssembler, VARIANT_MARKERS, boot_statements, contributing_domains};
pub use boot_order::{BootOrder, DomainConfig};
pub use config_resolver::ConfigResolver;
pub use error::AppError;
pub use preflight::ProjectContext;
pub use script::{
    BootStatement, GeneratedScript, LifecycleHandle, ScriptLine, ScriptShape, Statement,
};
pub use settings::{BootSettings, CONFIG_FILE, GENERATED_HEADER, LIFECYCLE_PACKAGE};
