//! Problems reported at the command-line boundary
//!
//! Rendering itself never fails: a shape mismatch between template and
//! payload produces blanks, not errors. What can fail is getting the
//! inputs in the door, and those failures are enumerated here.

use owo_colors::OwoColorize;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum InputProblem {
    TemplateUnreadable(PathBuf, io::Error),
    TemplateRecordInvalid(PathBuf, serde_json::Error),
    PayloadUnreadable(PathBuf, io::Error),
    PayloadInvalid(PathBuf, serde_json::Error),
    PayloadNotObject(PathBuf),
    UnknownModuleType(String),
    InvalidCopyCount(String),
    OutputUnwritable(PathBuf, io::Error),
}

impl InputProblem {
    pub fn message(&self) -> String {
        match self {
            InputProblem::TemplateUnreadable(path, cause) => {
                format!("cannot read template {}: {}", path.display(), cause)
            }
            InputProblem::TemplateRecordInvalid(path, cause) => {
                format!("template record {} is not valid: {}", path.display(), cause)
            }
            InputProblem::PayloadUnreadable(path, cause) => {
                format!("cannot read payload {}: {}", path.display(), cause)
            }
            InputProblem::PayloadInvalid(path, cause) => {
                format!("payload {} is not valid JSON: {}", path.display(), cause)
            }
            InputProblem::PayloadNotObject(path) => {
                format!("payload {} must be a JSON object", path.display())
            }
            InputProblem::UnknownModuleType(given) => {
                format!(
                    "unknown module type '{}' (expected sales, purchase, or payment)",
                    given
                )
            }
            InputProblem::InvalidCopyCount(given) => {
                format!("copies must be a positive number, got '{}'", given)
            }
            InputProblem::OutputUnwritable(path, cause) => {
                format!("cannot write output {}: {}", path.display(), cause)
            }
        }
    }

    /// The colorized one-liner printed to stderr before exiting.
    pub fn present(&self) -> String {
        format!("{}: {}", "error".bright_red(), self.message())
    }
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Error for InputProblem {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputProblem::TemplateUnreadable(_, cause)
            | InputProblem::PayloadUnreadable(_, cause)
            | InputProblem::OutputUnwritable(_, cause) => Some(cause),
            InputProblem::TemplateRecordInvalid(_, cause)
            | InputProblem::PayloadInvalid(_, cause) => Some(cause),
            _ => None,
        }
    }
}
