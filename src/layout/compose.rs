//! Multi-copy composition of the rendered record

use crate::compile;

const PAGE_BREAK: &str = "<div class=\"page-break\"></div>";
const CLEAR_FLOATS: &str = "<div style=\"clear:both;height:0;\"></div>";

/// Replicate the `<body>` inner content `copies` times for simultaneous
/// multi-copy printing. A single copy is already the whole body and passes
/// through untouched. At four copies one page-break marker goes in after
/// the second repetition, splitting the grid across two physical pages. A
/// float-clearing element always follows the last repetition so the 49%
/// floats cannot leak into whatever the print surface appends.
///
/// Documents without a `<body>` element are returned unchanged.
pub fn compose_copies(html: &str, copies: u32) -> String {
    if copies <= 1 {
        return html.to_string();
    }

    let body = compile!(r"(?is)<body[^>]*>(.*)</body\s*>");
    let captures = match body.captures(html) {
        Some(captures) => captures,
        None => return html.to_string(),
    };
    let inner = match captures.get(1) {
        Some(inner) => inner,
        None => return html.to_string(),
    };

    let content = inner.as_str();
    let mut replicated =
        String::with_capacity(content.len() * copies as usize + PAGE_BREAK.len() + CLEAR_FLOATS.len());
    for copy in 1..=copies {
        replicated.push_str(content);
        if copies == 4 && copy == 2 {
            replicated.push_str(PAGE_BREAK);
        }
    }
    replicated.push_str(CLEAR_FLOATS);

    let mut output = String::with_capacity(html.len() + replicated.len());
    output.push_str(&html[..inner.start()]);
    output.push_str(&replicated);
    output.push_str(&html[inner.end()..]);
    output
}
