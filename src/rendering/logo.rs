//! Logo image fallback injection

use crate::compile;
use crate::regex::Captures;

// Hides a broken logo image and drops a text placeholder in its place.
const FALLBACK_HANDLER: &str =
    " onerror=\"this.style.display='none';this.insertAdjacentHTML('afterend','<strong>LOGO</strong>')\"";

/// Give every logo `<img>` without an `onerror` handler a fallback that
/// degrades to a "LOGO" text placeholder when the image fails to load.
/// A logo image is one whose `alt` text mentions "Logo" (which covers the
/// "Company Logo" convention too). Applying the pass twice is harmless:
/// patched tags carry a handler and are skipped.
pub fn patch_logo_fallback(html: &str) -> String {
    let image = compile!(r"(?i)<img\b[^>]*>");

    image
        .replace_all(html, |captures: &Captures| {
            let tag = &captures[0];
            if is_logo(tag)
                && !tag
                    .to_ascii_lowercase()
                    .contains("onerror")
            {
                inject_handler(tag)
            } else {
                tag.to_string()
            }
        })
        .into_owned()
}

fn is_logo(tag: &str) -> bool {
    let alt = compile!(r#"(?i)\balt\s*=\s*(?:"([^"]*)"|'([^']*)')"#);
    let text = match alt.captures(tag) {
        Some(captures) => captures
            .get(1)
            .or_else(|| captures.get(2))
            .map(|group| group.as_str())
            .unwrap_or(""),
        None => return false,
    };
    text.contains("Logo")
}

fn inject_handler(tag: &str) -> String {
    let trimmed = tag.trim_end_matches('>');
    let (body, closing) = if trimmed.ends_with('/') {
        (
            trimmed
                .trim_end_matches('/')
                .trim_end(),
            " />",
        )
    } else {
        (trimmed, ">")
    };
    format!("{}{}{}", body, FALLBACK_HANDLER, closing)
}
