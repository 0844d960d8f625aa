//! Stored document templates and the modules they belong to

mod builtin;
mod sample;

pub use builtin::builtin_template;
pub use sample::sample_payload;

use crate::problem::InputProblem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Which business document a template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Sales,
    Purchase,
    Payment,
}

impl ModuleType {
    pub const ALL: [ModuleType; 3] = [ModuleType::Sales, ModuleType::Purchase, ModuleType::Payment];

    pub fn parse(text: &str) -> Option<ModuleType> {
        match text
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "sales" => Some(ModuleType::Sales),
            "purchase" => Some(ModuleType::Purchase),
            "payment" => Some(ModuleType::Payment),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModuleType::Sales => "sales",
            ModuleType::Purchase => "purchase",
            ModuleType::Payment => "payment",
        }
    }

    /// Document heading used when a fragment template has to be wrapped in
    /// a shell of our own.
    pub fn title(&self) -> &'static str {
        match self {
            ModuleType::Sales => "Sales Invoice",
            ModuleType::Purchase => "Purchase Invoice",
            ModuleType::Payment => "Payment Receipt",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stored template record, as kept by the module-preferences store. The
/// field names match the stored wire shape. Read-only during rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub id: String,
    pub module_type: ModuleType,
    pub html_template: String,
    #[serde(default)]
    pub is_default: bool,
}

impl Template {
    /// Wrap loose HTML as an ad-hoc template for the given module.
    pub fn from_html(module_type: ModuleType, html_template: String) -> Template {
        Template {
            id: String::new(),
            module_type,
            html_template,
            is_default: false,
        }
    }
}

/// Read a template from disk. A `.json` file is parsed as a stored
/// [`Template`] record; anything else is taken as raw HTML belonging to
/// the given module.
pub fn load_template(path: &Path, module_type: ModuleType) -> Result<Template, InputProblem> {
    let content = fs::read_to_string(path)
        .map_err(|cause| InputProblem::TemplateUnreadable(path.to_path_buf(), cause))?;

    if path
        .extension()
        .and_then(|extension| extension.to_str())
        == Some("json")
    {
        serde_json::from_str(&content)
            .map_err(|cause| InputProblem::TemplateRecordInvalid(path.to_path_buf(), cause))
    } else {
        Ok(Template::from_html(module_type, content))
    }
}
