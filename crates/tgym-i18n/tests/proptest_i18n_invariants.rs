//! Property-based invariant tests for the localization layer.
//!
//! Verifies:
//!
//! 1. A key absent from the catalog resolves to itself.
//! 2. A key present in the catalog resolves to its template.
//! 3. Templates without braces are unchanged by interpolation.
//! 4. `{}` placeholders consume arguments in order.
//! 5. Interpolation never panics on arbitrary templates and arguments.
//! 6. Escaped braces always collapse to a single brace.

use std::collections::HashMap;

use proptest::prelude::*;
use tgym_i18n::{KeyEcho, Localizer, TextProvider, interpolate};

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,20}"
}

fn catalog_strategy() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map(key_strategy(), "[^{}]{0,30}", 0..16)
}

fn localizer(entries: &HashMap<String, String>) -> Localizer {
    let json = serde_json::to_string(entries).unwrap();
    Localizer::from_json("xx", &json).unwrap()
}

proptest! {
    #[test]
    fn absent_key_echoes(entries in catalog_strategy(), key in "[A-Z]{1,10}") {
        // Generated catalog keys are lowercase, so an uppercase key is absent.
        let l = localizer(&entries);
        prop_assert_eq!(l.lookup(&key), key.as_str());
        prop_assert_eq!(KeyEcho.lookup(&key), key.as_str());
    }

    #[test]
    fn present_key_resolves(entries in catalog_strategy()) {
        let l = localizer(&entries);
        for (k, v) in &entries {
            prop_assert_eq!(l.lookup(k), v.as_str());
        }
    }

    #[test]
    fn brace_free_templates_unchanged(template in "[^{}]{0,60}", n in any::<i64>()) {
        prop_assert_eq!(interpolate(&template, &[&n]), template);
    }

    #[test]
    fn sequential_args_in_order(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(interpolate("{} {}", &[&a, &b]), format!("{a} {b}"));
    }

    #[test]
    fn never_panics(template in ".{0,80}", args in prop::collection::vec(any::<i32>(), 0..4)) {
        let refs: Vec<&dyn std::fmt::Display> =
            args.iter().map(|a| a as &dyn std::fmt::Display).collect();
        let _ = interpolate(&template, &refs);
    }

    #[test]
    fn escapes_collapse(prefix in "[a-z ]{0,10}", suffix in "[a-z ]{0,10}") {
        let template = format!("{prefix}{{{{{suffix}}}}}");
        prop_assert_eq!(interpolate(&template, &[]), format!("{prefix}{{{suffix}}}"));
    }
}
