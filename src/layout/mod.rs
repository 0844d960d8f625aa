//! Print layout: density stylesheets, multi-copy composition, and the
//! document shell for fragment templates

mod compose;
mod density;
mod scaffold;

pub use compose::compose_copies;
pub use density::inject_density_styles;
pub use scaffold::ensure_document_shell;
