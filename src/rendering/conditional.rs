//! Conditional section resolution, keyed on scalar field truthiness

use crate::payload::{scalar_text, Payload, COLLECTION_KEYS};
use crate::regex::{escape, Captures, Regex};

/// Resolve `{{#key}}...{{/key}}` and `{{^key}}...{{/key}}` blocks for every
/// payload key except the reserved collections. A truthy key keeps its
/// positive blocks (with any literal `{{key}}` token inside replaced by the
/// value) and drops its negative blocks; a falsy key does the opposite.
///
/// Keys absent from the payload are untouched here, and the scalar pass
/// never matches block delimiters, so their blocks survive verbatim in the
/// output rather than aborting the render.
pub fn resolve_conditionals(html: &str, payload: &Payload) -> String {
    let mut output = html.to_string();

    for key in payload.keys() {
        if COLLECTION_KEYS.contains(&key) {
            continue;
        }

        let shown = payload.is_truthy(key);
        let value = payload
            .get(key)
            .map(scalar_text)
            .unwrap_or_default();

        output = resolve_positive(&output, key, shown, &value);
        output = resolve_negative(&output, key, shown);
    }

    output
}

fn resolve_positive(html: &str, key: &str, shown: bool, value: &str) -> String {
    let pattern = format!(r"(?s)\{{\{{#{0}\}}\}}(.*?)\{{\{{/{0}\}}\}}", escape(key));
    let matcher = match Regex::new(&pattern) {
        Ok(matcher) => matcher,
        // fail open, leaving the block for the caller to see
        Err(_) => return html.to_string(),
    };

    let token = format!("{{{{{}}}}}", key);
    matcher
        .replace_all(html, |captures: &Captures| {
            if shown {
                // literal replacement: values may contain $-sequences
                captures[1].replace(&token, value)
            } else {
                String::new()
            }
        })
        .into_owned()
}

fn resolve_negative(html: &str, key: &str, shown: bool) -> String {
    let pattern = format!(r"(?s)\{{\{{\^{0}\}}\}}(.*?)\{{\{{/{0}\}}\}}", escape(key));
    let matcher = match Regex::new(&pattern) {
        Ok(matcher) => matcher,
        Err(_) => return html.to_string(),
    };

    matcher
        .replace_all(html, |captures: &Captures| {
            if shown {
                String::new()
            } else {
                captures[1].to_string()
            }
        })
        .into_owned()
}
