#[cfg(test)]
mod pipeline {
    use counterfoil::payload::Payload;
    use counterfoil::template::{ModuleType, Template};
    use counterfoil::render;
    use serde_json::json;

    const TEMPLATE: &str = "<html><head></head><body>{{#items}}<p>{{index}}:{{name}}={{rate}}</p>{{/items}}<p>Total:{{total}}</p></body></html>";

    fn template(html: &str) -> Template {
        Template::from_html(ModuleType::Sales, html.to_string())
    }

    fn invoice_payload() -> Payload {
        Payload::from_value(json!({
            "items": [
                { "name": "Pen", "rate": "10.00" },
                { "name": "Book", "rate": "200.00" }
            ],
            "total": "210.00"
        }))
    }

    #[test]
    fn end_to_end_single_copy() {
        let result = render(&template(TEMPLATE), &invoice_payload(), 1);

        assert!(result.contains("<p>1:Pen=10.00</p><p>2:Book=200.00</p><p>Total:210.00</p>"));

        // density rules for one copy sit inside the head
        let style = result
            .find("<style>")
            .unwrap();
        let head = result
            .find("</head>")
            .unwrap();
        assert!(style < head);
        assert!(result.contains("font-size: 12px"));
    }

    #[test]
    fn two_copies_share_one_style_block() {
        let result = render(&template(TEMPLATE), &invoice_payload(), 2);

        assert_eq!(result.matches("<p>Total:210.00</p>").count(), 2);
        assert_eq!(result.matches("<style>").count(), 1);
        assert!(result.contains("width: 49%"));
        assert!(result.contains("clear:both;height:0;"));
        assert!(!result.contains("page-break\"></div>"));
    }

    #[test]
    fn four_copies_break_between_the_pairs() {
        let result = render(&template(TEMPLATE), &invoice_payload(), 4);

        assert_eq!(result.matches("<p>Total:210.00</p>").count(), 4);
        assert_eq!(result.matches("<div class=\"page-break\"></div>").count(), 1);

        let break_at = result
            .find("<div class=\"page-break\"></div>")
            .unwrap();
        let before = result[..break_at]
            .matches("<p>Total:210.00</p>")
            .count();
        assert_eq!(before, 2);
    }

    #[test]
    fn unrecognized_copy_counts_replicate_without_density() {
        let result = render(&template(TEMPLATE), &invoice_payload(), 3);

        assert_eq!(result.matches("<p>Total:210.00</p>").count(), 3);
        assert!(!result.contains("<style>"));
        assert!(!result.contains("page-break"));
    }

    #[test]
    fn fragment_templates_are_given_a_shell() {
        let fragment = "{{#items}}<p>{{name}}</p>{{/items}}";

        let result = render(&template(fragment), &invoice_payload(), 2);

        assert!(result.contains("<title>Sales Invoice</title>"));
        assert_eq!(result.matches("<p>Pen</p>").count(), 2);
        assert_eq!(result.matches("<style>").count(), 1);
    }

    #[test]
    fn empty_collections_drop_their_section() {
        let fields = Payload::from_value(json!({ "items": [], "total": "0.00" }));

        let result = render(&template(TEMPLATE), &fields, 1);

        assert!(result.contains("<body><p>Total:0.00</p>"));
        assert!(!result.contains("{{#items}}"));
    }

    #[test]
    fn rendering_never_panics_on_shapeless_input() {
        // empty template, empty payload
        let result = render(&template(""), &Payload::default(), 1);
        assert!(result.contains("<title>Sales Invoice</title>"));

        // unbalanced block delimiters are left for the reader to see
        let broken = "<html><head></head><body>{{#items}}<p>{{name}}</p></body></html>";
        let result = render(&template(broken), &invoice_payload(), 4);
        assert!(result.contains("{{#items}}"));

        // payload that was not even an object renders a blank document
        let shapeless = Payload::from_value(json!("not an object"));
        let result = render(&template(TEMPLATE), &shapeless, 2);
        assert_eq!(result.matches("<p>Total:</p>").count(), 2);
    }
}
