//! Collection block expansion, the first pass over a template

use crate::compile;
use crate::payload::{resolve_path, scalar_text, Payload};
use crate::regex::Captures;
use serde_json::Value;

/// Expand `{{#items}}...{{/items}}` and `{{#allocations}}...{{/allocations}}`
/// blocks into one rendered fragment per row, in array order. A missing,
/// non-array, or empty collection removes the block outright.
///
/// Runs before the conditional passes so that tokens inside a block body
/// are resolved against their row and never caught by the generic per-key
/// patterns keyed on `items`/`allocations` themselves.
pub fn expand_collections(html: &str, payload: &Payload) -> String {
    let items = compile!(r"(?s)\{\{#items\}\}(.*?)\{\{/items\}\}");
    let html = items.replace_all(html, |captures: &Captures| {
        render_rows(&captures[1], payload.rows("items"))
    });

    let allocations = compile!(r"(?s)\{\{#allocations\}\}(.*?)\{\{/allocations\}\}");
    let html = allocations.replace_all(&html, |captures: &Captures| {
        render_rows(&captures[1], payload.rows("allocations"))
    });

    // The inverse form exists for allocations only: its body is the
    // fallback shown when a payment has nothing allocated against it.
    let unallocated = compile!(r"(?s)\{\{\^allocations\}\}(.*?)\{\{/allocations\}\}");
    let html = unallocated.replace_all(&html, |captures: &Captures| {
        if payload
            .rows("allocations")
            .is_empty()
        {
            captures[1].to_string()
        } else {
            String::new()
        }
    });

    html.into_owned()
}

fn render_rows(body: &str, rows: &[Value]) -> String {
    let token = compile!(r"\{\{([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)\}\}");

    let mut output = String::new();
    for (position, row) in rows.iter().enumerate() {
        let fragment = token.replace_all(body, |captures: &Captures| {
            let name = &captures[1];
            match name {
                // rows are numbered for display, so 1-based
                "index" => (position + 1).to_string(),
                "serialNumbers" => serial_numbers(row),
                _ => resolve_path(row, name),
            }
        });
        output.push_str(&fragment);
    }
    output
}

fn serial_numbers(row: &Value) -> String {
    match row.get("serialNumbers") {
        Some(Value::Array(numbers)) => numbers
            .iter()
            .map(scalar_text)
            .collect::<Vec<String>>()
            .join(", "),
        _ => String::new(),
    }
}
