//! Printable document shell for body-only template fragments

use crate::compile;
use crate::template::ModuleType;
use serde::Serialize;
use tinytemplate::TinyTemplate;

static SHELL: &str = "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>{title}</title>
</head>
<body>
<div class=\"document\">
{content}
</div>
</body>
</html>
";

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    content: &'a str,
}

/// Stored templates are often body fragments rather than whole documents.
/// Wrap such a fragment in a minimal shell so the density styles have a
/// `</head>` to anchor on and the compositor a `<body>` to replicate. A
/// template that already carries its own `<html>` or `<body>` element
/// passes through untouched.
pub fn ensure_document_shell(html: &str, module_type: ModuleType) -> String {
    let element = compile!(r"(?i)<(?:html|body)\b");
    if element.is_match(html) {
        return html.to_string();
    }

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    if tt
        .add_template("shell", SHELL)
        .is_err()
    {
        return html.to_string();
    }

    let context = Context {
        title: module_type.title(),
        content: html,
    };

    match tt.render("shell", &context) {
        Ok(document) => document,
        // fail open: an unwrapped fragment still renders, just shell-less
        Err(_) => html.to_string(),
    }
}
