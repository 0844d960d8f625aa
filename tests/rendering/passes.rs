#[cfg(test)]
mod passes {
    use counterfoil::payload::Payload;
    use counterfoil::rendering::{
        expand_collections, patch_logo_fallback, resolve_conditionals, substitute_scalars,
    };
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Payload {
        Payload::from_value(value)
    }

    /// Collection bodies must be expanded before the generic per-key
    /// passes run, so a row field sharing its name with a top-level
    /// scalar resolves against the row.
    #[test]
    fn collection_rows_shadow_top_level_keys() {
        let fields = payload(json!({
            "name": "the company",
            "items": [ { "name": "Pen" }, { "name": "Book" } ]
        }));

        let html = "{{#items}}[{{name}}]{{/items}}<p>{{name}}</p>";
        let html = expand_collections(html, &fields);
        let html = resolve_conditionals(&html, &fields);
        let html = substitute_scalars(&html, &fields);

        assert_eq!(html, "[Pen][Book]<p>the company</p>");
    }

    /// The reserved keys never reach the conditional pass, so an `items`
    /// block that survives expansion (unbalanced, say) is not mangled by
    /// the truthiness machinery.
    #[test]
    fn conditional_pass_ignores_collections_entirely() {
        let fields = payload(json!({
            "items": [ { "name": "Pen" } ],
            "show": "yes"
        }));

        let html = resolve_conditionals("{{#show}}on{{/show}} {{#items}}row{{/items}}", &fields);

        assert_eq!(html, "on {{#items}}row{{/items}}");
    }

    #[test]
    fn present_but_falsy_scalars_render_blank() {
        let fields = payload(json!({ "discount": "" }));

        let html = substitute_scalars("<td>{{discount}}</td>", &fields);

        assert_eq!(html, "<td></td>");
    }

    /// Three passes in sequence leave a token-free document; running any
    /// of them again is a no-op.
    #[test]
    fn resolved_documents_are_a_fixed_point() {
        let fields = payload(json!({
            "total": "210.00",
            "notes": "",
            "items": [ { "name": "Pen" } ]
        }));

        let html = "{{#items}}<p>{{name}}</p>{{/items}}{{#notes}}<p>{{notes}}</p>{{/notes}}<p>{{total}}</p>";
        let html = expand_collections(html, &fields);
        let html = resolve_conditionals(&html, &fields);
        let html = substitute_scalars(&html, &fields);

        assert_eq!(html, "<p>Pen</p><p>210.00</p>");
        assert_eq!(expand_collections(&html, &fields), html);
        assert_eq!(resolve_conditionals(&html, &fields), html);
        assert_eq!(substitute_scalars(&html, &fields), html);
    }

    /// Conditional blocks can materialize logo images; the patch picks
    /// them up whether it runs before or after substitution.
    #[test]
    fn conditional_logo_images_get_the_fallback() {
        let fields = payload(json!({
            "showLetterhead": "yes",
            "companyLogo": "https://x.example/logo.png"
        }));

        let html = "{{#showLetterhead}}<img alt=\"Company Logo\" src=\"{{companyLogo}}\">{{/showLetterhead}}";
        let html = resolve_conditionals(html, &fields);
        let html = patch_logo_fallback(&html);
        let html = substitute_scalars(&html, &fields);
        let html = patch_logo_fallback(&html);

        assert!(html.contains("src=\"https://x.example/logo.png\""));
        assert_eq!(html.matches("onerror=").count(), 1);
    }

    /// Values containing regex- and replacement-significant characters
    /// must come through every pass byte for byte.
    #[test]
    fn hostile_scalar_values_survive_all_passes() {
        let fields = payload(json!({
            "amount": "$&1,000.00 (50% of $2,000) [net]",
            "show": "$1 deposit"
        }));

        let html = "{{#show}}{{show}}{{/show}} {{amount}}";
        let html = expand_collections(html, &fields);
        let html = resolve_conditionals(&html, &fields);
        let html = substitute_scalars(&html, &fields);

        assert_eq!(html, "$1 deposit $&1,000.00 (50% of $2,000) [net]");
    }
}
