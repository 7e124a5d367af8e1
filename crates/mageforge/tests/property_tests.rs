//! Property-based tests for the node assembler
//!
//! These verify:
//! 1. Serialization is a pure function of the spec: assembling twice yields
//!    identical text.
//! 2. Text and attribute escaping round-trips arbitrary content.
//! 3. Absent attribute values never reach the output.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use mageforge::{to_document, Spec, SpecValue};

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,7}"
}

fn arb_scalar() -> impl Strategy<Value = SpecValue> {
    prop_oneof![
        any::<bool>().prop_map(SpecValue::Bool),
        any::<i64>().prop_map(SpecValue::Int),
        "[ -~]{0,16}".prop_map(SpecValue::Str),
        Just(SpecValue::None),
    ]
}

fn arb_spec() -> impl Strategy<Value = Spec> {
    let leaf = prop::collection::vec((arb_name(), arb_scalar(), any::<bool>()), 0..4).prop_map(
        |entries| {
            let mut spec = Spec::new();
            for (name, value, is_attr) in entries {
                if is_attr {
                    spec.insert(format!("@{name}"), value);
                } else {
                    spec.insert(name, value);
                }
            }
            spec
        },
    );
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            inner.clone(),
            prop::collection::vec((arb_name(), inner), 0..3),
        )
            .prop_map(|(mut spec, children)| {
                for (name, child) in children {
                    spec.insert(name, child);
                }
                spec
            })
    })
}

fn unescape_text(escaped: &str) -> String {
    escaped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn prop_assembly_is_deterministic(spec in arb_spec()) {
        let first = to_document(&spec, "root");
        let second = to_document(&spec, "root");
        prop_assert_eq!(first.is_ok(), second.is_ok());
        if let (Ok(a), Ok(b)) = (first, second) {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn prop_text_escaping_round_trips(text in "[ -~]{1,32}") {
        let spec = Spec::new().child("v", text.as_str());
        let out = to_document(&spec, "root").map_err(|e| TestCaseError::fail(e.to_string()))?;
        if let Some(start) = out.find("<v>") {
            let end = out.find("</v>").ok_or_else(|| TestCaseError::fail("unterminated"))?;
            let inner = out.get(start + 3..end).unwrap_or_default();
            prop_assert!(!inner.contains('<'));
            prop_assert_eq!(unescape_text(inner), text);
        } else {
            // Empty content collapses to a self-closing element.
            prop_assert!(out.contains("<v/>"));
        }
    }

    #[test]
    fn prop_attribute_escaping_keeps_document_well_formed(value in "[ -~]{0,32}") {
        let spec = Spec::new().attr("label", value.as_str());
        let out = to_document(&spec, "root").map_err(|e| TestCaseError::fail(e.to_string()))?;
        let attr = out
            .split("label=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap_or_default();
        prop_assert!(!attr.contains('<'));
        prop_assert!(!attr.contains('"'));
    }

    #[test]
    fn prop_absent_attributes_are_suppressed(name in arb_name()) {
        let mut spec = Spec::new();
        spec.insert(format!("@{name}"), None::<&str>);
        let out = to_document(&spec, "root").map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(out, "<?xml version=\"1.0\"?>\n<root/>\n".to_string());
    }
}
