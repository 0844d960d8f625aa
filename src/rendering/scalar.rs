//! Final scalar placeholder substitution

use crate::compile;
use crate::payload::Payload;
use crate::regex::Captures;

/// Replace every remaining `{{key}}` or `{{dotted.path}}` token with its
/// resolved value, empty string when unresolved. Runs after collection and
/// conditional resolution, so only genuinely top-level scalar tokens are
/// left. Block delimiters (`{{#...}}`, `{{^...}}`, `{{/...}}`) fall outside
/// the token class and are deliberately left alone.
pub fn substitute_scalars(html: &str, payload: &Payload) -> String {
    let token = compile!(r"\{\{([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)\}\}");

    token
        .replace_all(html, |captures: &Captures| payload.resolve(&captures[1]))
        .into_owned()
}
