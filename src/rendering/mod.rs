//! The placeholder-resolution pipeline

mod conditional;
mod expand;
mod logo;
mod scalar;

pub use conditional::resolve_conditionals;
pub use expand::expand_collections;
pub use logo::patch_logo_fallback;
pub use scalar::substitute_scalars;

use crate::layout::{compose_copies, ensure_document_shell, inject_density_styles};
use crate::payload::Payload;
use crate::template::Template;
use tracing::{debug, info};

/// Render one document: resolve every placeholder in the template against
/// the payload, then lay the result out for the requested number of copies.
///
/// The passes run in a fixed order. Collections expand first, so tokens
/// inside block bodies resolve against their row; conditionals next, on the
/// remaining scalar keys; then the catch-all scalar pass. The logo fallback
/// patch brackets the scalar pass because conditional blocks can
/// materialize image tags of their own. Density CSS is injected into the
/// single fully-substituted record, and replication happens last, so every
/// copy shares the one `<style>` block sitting outside the replicated body.
///
/// Each pass derives a new string from the previous one; nothing here
/// raises for any template or payload shape.
pub fn render(template: &Template, payload: &Payload, copies: u32) -> String {
    info!(
        module = %template.module_type,
        copies,
        "rendering document"
    );

    let html = expand_collections(&template.html_template, payload);
    let html = resolve_conditionals(&html, payload);
    let html = patch_logo_fallback(&html);
    let html = substitute_scalars(&html, payload);
    let html = patch_logo_fallback(&html);
    debug!(length = html.len(), "placeholders resolved");

    let html = ensure_document_shell(&html, template.module_type);
    let html = inject_density_styles(&html, copies);
    compose_copies(&html, copies)
}
