//! counterfoil renders printable business documents from placeholder
//! templates.
//!
//! A stored HTML template carries mustache-style tokens: scalar
//! placeholders (`{{total}}`, `{{contact.name}}`), conditional sections
//! (`{{#notes}}...{{/notes}}`, `{{^billingAddress}}...{{/billingAddress}}`),
//! and repeating collection blocks over the reserved `items` and
//! `allocations` keys. [`render`] resolves all of them against a payload,
//! injects copy-density CSS, and replicates the record body for multi-copy
//! printing. The result is one self-contained HTML string ready for a
//! print surface.

mod regex;

pub mod layout;
pub mod output;
pub mod payload;
pub mod problem;
pub mod rendering;
pub mod template;

pub use payload::{load_payload, Payload};
pub use problem::InputProblem;
pub use rendering::render;
pub use template::{builtin_template, load_template, sample_payload, ModuleType, Template};
