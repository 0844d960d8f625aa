//! Writing rendered documents for the print collaborator
//!
//! This crate's contract ends at a self-contained HTML string; the actual
//! printing surface (a browser print dialog or a headless PDF renderer)
//! picks the document up from a file or a pipe.

use crate::problem::InputProblem;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Write the rendered document to the given file, or to standard output
/// when no target is supplied.
pub fn write_document(document: &str, target: Option<&Path>) -> Result<(), InputProblem> {
    match target {
        Some(path) => {
            fs::write(path, document)
                .map_err(|cause| InputProblem::OutputUnwritable(path.to_path_buf(), cause))?;
            info!(target = %path.display(), bytes = document.len(), "document written");
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(document.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|cause| InputProblem::OutputUnwritable(PathBuf::from("-"), cause))
        }
    }
}
