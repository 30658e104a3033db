//! Roblox Luau dialect following Rojo file-naming conventions.

use crate::domain::{LifecycleHandle, ScriptShape, Statement};
use crate::ports::ScriptDialect;

const LUAU_EXTENSIONS: [&str; 2] = ["luau", "lua"];
const SCRIPT_MARKERS: [&str; 2] = ["server", "client"];
const HANDLE_VARIABLE: &str = "maid";

/// Luau output for Rojo-synced Roblox projects.
#[derive(Debug, Clone, Copy, Default)]
pub struct RobloxLuau;

impl RobloxLuau {
    /// Split `path` into `(dir_with_slash, stem, extension)` when it is a Luau file.
    fn split_script_path(path: &str) -> Option<(&str, &str, &str)> {
        let name_start = path.rfind('/').map_or(0, |i| i + 1);
        let (dir, file_name) = path.split_at(name_start);
        let (stem, extension) = file_name.rsplit_once('.')?;
        LUAU_EXTENSIONS.contains(&extension).then_some((dir, stem, extension))
    }

    fn instance_chain(segments: &[&str]) -> String {
        let mut segments = segments.iter();
        let mut chain = match segments.next() {
            Some(&"game") => match segments.next() {
                Some(service) => format!("game:GetService(\"{service}\")"),
                None => "game".to_string(),
            },
            Some(root) => (*root).to_string(),
            None => return "game".to_string(),
        };
        for segment in segments {
            chain.push_str(&format!(":WaitForChild(\"{segment}\")"));
        }
        chain
    }
}

impl ScriptDialect for RobloxLuau {
    fn module_reference(&self, domain_path: &str, module: &str) -> String {
        let segments: Vec<&str> =
            domain_path.split('/').chain(module.split('/')).filter(|s| !s.is_empty()).collect();
        format!("require({})", Self::instance_chain(&segments))
    }

    fn shared_dependency_reference(&self, alias: &str) -> String {
        let chain = Self::instance_chain(&["game", "ReplicatedStorage", "Packages", alias]);
        format!("local {alias} = require({chain})")
    }

    fn normalize_output_path(&self, path: &str, markers: &[&str]) -> String {
        let Some((dir, stem, extension)) = Self::split_script_path(path) else {
            return path.to_string();
        };

        let mut stem = stem;
        while let Some(stripped) = markers
            .iter()
            .find_map(|marker| stem.strip_suffix(marker).and_then(|rest| rest.strip_suffix('.')))
        {
            stem = stripped;
        }
        format!("{dir}{stem}.{extension}")
    }

    fn classify_shape(&self, path: &str) -> ScriptShape {
        let is_script = Self::split_script_path(path).is_some_and(|(_, stem, _)| {
            SCRIPT_MARKERS
                .iter()
                .any(|marker| stem.strip_suffix(marker).is_some_and(|rest| rest.ends_with('.')))
        });
        if is_script { ScriptShape::TopLevel } else { ScriptShape::Module }
    }

    fn render_statement(&self, statement: &Statement, lifecycle: &LifecycleHandle) -> String {
        let alias = &lifecycle.alias;
        match statement {
            Statement::StrictPragma => "--!strict".to_string(),
            Statement::GeneratedMarker(text) => text.clone(),
            Statement::Section(name) => format!("-- {name}"),
            Statement::RequireLifecycle => self.shared_dependency_reference(alias),
            Statement::ImportLifecycleType => {
                format!("type {ty} = {alias}.{ty}", ty = lifecycle.type_name)
            }
            Statement::FunctionOpen => {
                format!("return function({HANDLE_VARIABLE}: {}): nil", lifecycle.type_name)
            }
            Statement::ConstructHandle => format!("local {HANDLE_VARIABLE} = {alias}.new()"),
            Statement::Boot(boot) => format!(
                "{}.init({HANDLE_VARIABLE})",
                self.module_reference(&boot.domain_path, &boot.module)
            ),
            Statement::RegisterTeardown => format!(
                "{HANDLE_VARIABLE}:GiveTask(script.Destroying:Connect(\
                 function() {HANDLE_VARIABLE}:Destroy() end))"
            ),
            Statement::ReturnVoid => "return nil".to_string(),
            Statement::FunctionClose => "end".to_string(),
        }
    }
}
