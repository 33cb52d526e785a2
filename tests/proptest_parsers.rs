//! Property-based tests for CPE parsers.
//!
//! Ensures parsers don't panic on arbitrary input, and that every model
//! survives a trip through the formatted-string binding.

use cpe_tools::{parse, parse_as, AttributeValue, Cpe, CpeFormat};
use proptest::prelude::*;

/// Attribute values that the formatted-string binding represents exactly:
/// concrete values are non-empty and already lower-case.
fn attribute_value() -> impl Strategy<Value = AttributeValue> {
    prop_oneof![
        Just(AttributeValue::Any),
        Just(AttributeValue::Na),
        "[a-z0-9_.:*\\\\\\-]{1,12}"
            .prop_filter("literal `*` has dedicated tests", |s: &String| s.as_str() != "*")
            .prop_map(AttributeValue::Value),
    ]
}

fn cpe_model() -> impl Strategy<Value = Cpe> {
    prop::collection::vec(attribute_value(), 11).prop_map(|values| {
        let mut cpe = Cpe::new();
        for (attr, value) in cpe_tools::Attribute::ALL.iter().zip(values) {
            cpe.set(*attr, value);
        }
        cpe
    })
}

proptest! {
    // Parser tests only assert no-panic, since random input is expected to
    // produce Err in almost all cases.
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn parse_doesnt_panic(s in "\\PC{0,500}") {
        let _ = parse(&s);
    }

    #[test]
    fn prefixed_input_doesnt_panic(
        prefix in "(wfn:|cpe:/|cpe:2\\.3:)",
        body in "\\PC{0,300}",
    ) {
        let input = format!("{prefix}{body}");
        let _ = parse(&input);
        for format in CpeFormat::ALL {
            let _ = parse_as(&input, format);
        }
    }

    #[test]
    fn wfn_like_input_doesnt_panic(
        s in prop::string::string_regex(r#"wfn:\[([a-z_]{1,10}=("[^"]{0,10}"|ANY|NA|\\),?){0,12}\]?"#).unwrap()
    ) {
        let _ = parse(&s);
    }

    #[test]
    fn unprefixed_input_is_unrecognized(s in "[^wc]\\PC{0,100}") {
        let err = parse(&s).unwrap_err();
        prop_assert!(err.is_unrecognized(), "{:?} gave {}", s, err);
    }

    #[test]
    fn formatted_string_round_trip(cpe in cpe_model()) {
        let text = cpe.to_formatted_string();
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed, cpe, "via {}", text);
    }

    #[test]
    fn wfn_round_trip(cpe in cpe_model()) {
        let text = cpe.to_wfn();
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed, cpe, "via {}", text);
    }

    #[test]
    fn any_model_matches_itself_and_the_wildcard(cpe in cpe_model()) {
        prop_assert!(cpe.matches(&cpe));
        prop_assert!(cpe.matches(&Cpe::any()));
        prop_assert!(Cpe::any().matches(&cpe));
    }

    #[test]
    fn matching_is_symmetric(a in cpe_model(), b in cpe_model()) {
        prop_assert_eq!(a.matches(&b), b.matches(&a));
    }
}
