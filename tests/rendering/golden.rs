#[cfg(test)]
mod golden {
    use counterfoil::template::{builtin_template, sample_payload, ModuleType};
    use counterfoil::render;

    /// Every built-in template rendered against its sample payload, at
    /// every recognized density, must come out fully resolved: not one
    /// `{{` left anywhere. A leftover token means the template references
    /// a field the sample does not carry, or a pass is leaking.
    #[test]
    fn builtin_templates_resolve_completely() {
        let mut failures = Vec::new();

        for module in ModuleType::ALL {
            let template = builtin_template(module);
            let payload = sample_payload(module);

            for copies in [1, 2, 4] {
                let result = render(&template, &payload, copies);

                if let Some(at) = result.find("{{") {
                    let context_end = (at + 40).min(result.len());
                    println!(
                        "{} at {} copies leaves a token near: {}",
                        module,
                        copies,
                        &result[at..context_end]
                    );
                    failures.push((module, copies));
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "{} rendered documents still contain placeholder tokens",
                failures.len()
            );
        }
    }

    #[test]
    fn builtin_documents_are_print_ready() {
        for module in ModuleType::ALL {
            let template = builtin_template(module);
            let payload = sample_payload(module);

            for copies in [1u32, 2, 4] {
                let result = render(&template, &payload, copies);

                // self-contained: density styles inline, inside the head
                assert_eq!(result.matches("<style>").count(), 2, "{}", module);
                let head = result
                    .find("</head>")
                    .unwrap();
                assert!(result[..head].contains("font-size:"), "{}", module);

                // logo fallback injected exactly once per copy
                assert_eq!(
                    result.matches("onerror=").count() as u32,
                    copies,
                    "{} at {} copies",
                    module,
                    copies
                );
            }
        }
    }

    #[test]
    fn copies_replicate_the_whole_record() {
        let sentinels = [
            (ModuleType::Sales, "INV-2031"),
            (ModuleType::Purchase, "PB-0452"),
            (ModuleType::Payment, "RCT-0178"),
        ];

        for (module, sentinel) in sentinels {
            let template = builtin_template(module);
            let payload = sample_payload(module);

            for copies in [1usize, 2, 4] {
                let result = render(&template, &payload, copies as u32);
                assert_eq!(
                    result.matches(sentinel).count(),
                    copies,
                    "{} at {} copies",
                    module,
                    copies
                );
            }
        }
    }

    #[test]
    fn sales_sample_exercises_both_conditional_branches() {
        let result = render(
            &builtin_template(ModuleType::Sales),
            &sample_payload(ModuleType::Sales),
            1,
        );

        // billingAddress is truthy: positive branch in, fallback out
        assert!(result.contains("22 Victoria Street"));
        assert!(!result.contains("No billing address on record"));

        // discount is present but empty: its row disappears
        assert!(!result.contains("Discount"));
    }

    #[test]
    fn purchase_sample_takes_the_fallback_branch() {
        let result = render(
            &builtin_template(ModuleType::Purchase),
            &sample_payload(ModuleType::Purchase),
            1,
        );

        // shippingAddress is empty, so the negative block shows
        assert!(result.contains("Deliver to registered address"));
        assert!(!result.contains("Deliver to:"));
    }

    #[test]
    fn payment_sample_lists_its_allocations() {
        let result = render(
            &builtin_template(ModuleType::Payment),
            &sample_payload(ModuleType::Payment),
            1,
        );

        assert!(result.contains("INV-2027"));
        assert!(result.contains("INV-2031"));
        assert!(!result.contains("Payment not yet allocated"));
    }

    #[test]
    fn unallocated_payment_shows_the_fallback_row() {
        use counterfoil::payload::Payload;
        use serde_json::json;

        let template = builtin_template(ModuleType::Payment);
        let payload = Payload::from_value(json!({
            "companyName": "Meridian Trading Co.",
            "tagline": "",
            "companyAddress": "",
            "companyPhone": "",
            "companyEmail": "",
            "companyLogo": "",
            "receiptNumber": "RCT-0179",
            "paymentDate": "06/08/2026",
            "contact": { "name": "Walk-in customer" },
            "paymentMode": "Cash",
            "reference": "",
            "amount": "500.00",
            "amountInWords": "Five hundred rupees only",
            "allocations": [],
            "notes": "",
            "terms": ""
        }));

        let result = render(&template, &payload, 1);

        assert!(result.contains("Payment not yet allocated to any invoice"));
        assert!(!result.contains("{{"));
    }
}
