//! Copy-count density stylesheets

use crate::compile;

// One record per page, full width, room for borders and breathing space.
static SINGLE_COPY_CSS: &str = "\
body { font-size: 12px; }
body > div { width: 100%; border: 1px solid #444; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 6px; }
.document-title { font-size: 18px; }
";

// Two records side by side. Floats wrap naturally at 49% width.
static TWO_UP_CSS: &str = "\
body { font-size: 10px; }
body > div { width: 49%; float: left; margin: 0 0.5% 8px 0.5%; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 3px; }
.document-title { font-size: 14px; }
h2, h3 { margin: 4px 0; }
";

// Four records in a 2x2 grid. Secondary sections give up their space.
static FOUR_UP_CSS: &str = "\
body { font-size: 8px; }
body > div { width: 49%; float: left; margin: 0 0.5% 6px 0.5%; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 2px; }
.document-title { font-size: 11px; }
h2, h3 { margin: 2px 0; }
.terms-section, .signature-section, .amount-in-words, .tagline, .item-code, .tax-breakdown { display: none; }
.page-break { clear: both; page-break-after: always; }
";

/// Inject the density `<style>` block for the requested copy count before
/// `</head>`. Only 1, 2, and 4 are recognized layouts; any other count is
/// replicated full-size with no density adjustment, so this becomes a
/// pass-through. Pure string surgery, the payload is never consulted.
pub fn inject_density_styles(html: &str, copies: u32) -> String {
    let rules = match copies {
        1 => SINGLE_COPY_CSS,
        2 => TWO_UP_CSS,
        4 => FOUR_UP_CSS,
        _ => return html.to_string(),
    };

    let block = format!("<style>\n{}</style>\n", rules);
    match head_close(html) {
        Some(at) => {
            let mut output = String::with_capacity(html.len() + block.len());
            output.push_str(&html[..at]);
            output.push_str(&block);
            output.push_str(&html[at..]);
            output
        }
        // no head to anchor on; lead with the styles instead of losing them
        None => format!("{}{}", block, html),
    }
}

fn head_close(html: &str) -> Option<usize> {
    compile!(r"(?i)</head\s*>")
        .find(html)
        .map(|found| found.start())
}
