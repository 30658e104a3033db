//! Boot-order resolution and script assembly.

use tracing::debug;

use crate::domain::script::{render_lines, script_lines};
use crate::domain::{BootOrder, BootStatement, DomainConfig, GeneratedScript, LifecycleHandle};
use crate::ports::ScriptDialect;

/// Variant markers stripped when deriving the instance path of a script.
pub const VARIANT_MARKERS: [&str; 2] = ["client", "server"];

/// Domains whose modules are booted by the domain at `index`.
///
/// Shared domains are scanned over `[0, index - 1)`, so the domain directly
/// before `index` is never inherited. Generated output depends on this
/// boundary; keep it.
pub fn contributing_domains(order: &BootOrder, index: usize) -> Vec<&DomainConfig> {
    let domains = order.domains();
    let Some(current) = domains.get(index) else {
        return Vec::new();
    };

    let scan_end = index.saturating_sub(1);
    let mut contributing: Vec<&DomainConfig> =
        domains[..scan_end].iter().filter(|domain| domain.is_shared).collect();
    contributing.push(current);
    contributing
}

/// Flatten contributing domains into init calls. Duplicates are kept.
pub fn boot_statements(order: &BootOrder, index: usize) -> Vec<BootStatement> {
    contributing_domains(order, index)
        .into_iter()
        .flat_map(|domain| {
            domain.modules.iter().map(move |module| BootStatement::new(&domain.domain_path, module))
        })
        .collect()
}

/// Assembles one [`GeneratedScript`] per domain with a build path.
pub struct BootAssembler<'a, D: ScriptDialect + ?Sized> {
    dialect: &'a D,
    lifecycle: LifecycleHandle,
    generated_header: &'a str,
}

impl<'a, D: ScriptDialect + ?Sized> BootAssembler<'a, D> {
    pub fn new(dialect: &'a D, lifecycle: LifecycleHandle, generated_header: &'a str) -> Self {
        Self { dialect, lifecycle, generated_header }
    }

    pub fn assemble(&self, order: &BootOrder) -> Vec<GeneratedScript> {
        order
            .domains()
            .iter()
            .enumerate()
            .filter_map(|(index, domain)| {
                let Some(build_path) = domain.build_path.as_deref() else {
                    debug!(domain = %domain.domain_path, "no build path, contributing only");
                    return None;
                };
                Some(self.assemble_domain(order, index, build_path))
            })
            .collect()
    }

    fn assemble_domain(
        &self,
        order: &BootOrder,
        index: usize,
        build_path: &str,
    ) -> GeneratedScript {
        let statements = boot_statements(order, index);

        let instance_path = self.dialect.normalize_output_path(build_path, &VARIANT_MARKERS);
        let shape = self.dialect.classify_shape(build_path);
        debug!(
            build_path,
            %shape,
            modules = statements.len(),
            "assembling boot script"
        );

        let lines = script_lines(shape, self.generated_header, &statements);
        GeneratedScript {
            destination: build_path.to_string(),
            instance_path,
            shape,
            module_count: statements.len(),
            lines: render_lines(&lines, &self.lifecycle, self.dialect),
        }
    }
}
