//! Unit tests for parsing, evaluating and exporting YAML expressions
//!
//! Covers the documented scenarios end to end: YAML text in, a verdict
//! or canonical YAML out.

use featlogic_core::{Evaluator, Expression, Verb};
use featlogic_parser::*;
use serde::Deserialize;

const EXPRESSION: &str = r#"
---
and:
- item1
- or: [item2, item3]
- not: [~extra]
"#;

const EXPMULTI: &str = r#"
---
all_of:
- item1
- 2_of:
  - item2
  - item3
  - item4
"#;

fn feature_sets() -> Vec<Vec<&'static str>> {
    vec![
        vec![],
        vec!["item1"],
        vec!["item1", "item2"],
        vec!["item1", "item3"],
        vec!["item2", "item3"],
        vec!["item1", "item2", "item4"],
        vec!["item1", "item2", "extra_item"],
        vec!["item1", "item2", "item3", "item4"],
    ]
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_parse_scenario_a() {
    let result = parse(EXPRESSION);
    assert!(result.is_ok(), "Failed to parse expression: {:?}", result.err());
}

#[test]
fn test_scenario_a_true() {
    let expr = parse(EXPRESSION).unwrap();
    assert!(expr.eval(&["item1", "item3"]));
    assert!(expr.eval(&["item1", "item2"]));
}

#[test]
fn test_scenario_a_missing_required() {
    let expr = parse(EXPRESSION).unwrap();
    assert!(!expr.eval(&["item2"]));
}

#[test]
fn test_scenario_a_negated_regex() {
    let expr = parse(EXPRESSION).unwrap();
    assert!(!expr.eval(&["item1", "item2", "extra_item"]));
    assert!(!expr.eval(&["item2", "item3", "extra_item"]));
}

#[test]
fn test_scenario_b_multi_selection() {
    let expr = parse(EXPMULTI).unwrap();
    assert!(expr.eval(&["item1", "item2", "item4"]));
    assert!(!expr.eval(&["item1", "item2"]));
    assert!(!expr.eval(&["item2", "item3", "item4"]));
}

#[test]
fn test_regex_scenarios() {
    let search = parse("any_of: [~ab+c]").unwrap();
    assert!(search.eval(&["xxabbbc yyy"]));

    let anchored = parse("any_of: ['~^ab+c$']").unwrap();
    assert!(!anchored.eval(&["xabc"]));
}

// =============================================================================
// Verb Equivalence Tests
// =============================================================================

fn assert_equivalent(left: &str, right: &str) {
    let left = parse(left).unwrap();
    let right = parse(right).unwrap();
    for features in feature_sets() {
        assert_eq!(
            left.eval(&features),
            right.eval(&features),
            "features: {:?}",
            features
        );
    }
}

#[test]
fn test_all_of_equals_two_of() {
    assert_equivalent("all_of: [item1, item2]", "2_of: [item1, item2]");
    assert_equivalent("and: [item1, item2]", "2_of: [item1, item2]");
}

#[test]
fn test_any_of_equals_one_of() {
    assert_equivalent("any_of: [item1, item2]", "1_of: [item1, item2]");
    assert_equivalent("or: [item1, item2]", "1_of: [item1, item2]");
}

#[test]
fn test_none_of_equals_zero_of() {
    assert_equivalent("none_of: [item1, item2]", "0_of: [item1, item2]");
    assert_equivalent("not: [item1, item2]", "0_of: [item1, item2]");
}

#[test]
fn test_threshold_above_operand_count_never_matches() {
    let expr = parse("3_of: [item1, item2]").unwrap();
    for features in feature_sets() {
        assert!(!expr.eval(&features), "features: {:?}", features);
    }
}

// =============================================================================
// Empty Operand Tests
// =============================================================================

#[test]
fn test_none_of_empty_is_true() {
    let expr = parse("none_of: []").unwrap();
    for features in feature_sets() {
        assert!(expr.eval(&features));
    }
}

#[test]
fn test_all_of_empty_is_true() {
    let expr = parse("all_of: []").unwrap();
    for features in feature_sets() {
        assert!(expr.eval(&features));
    }
}

#[test]
fn test_any_of_empty_is_false() {
    let expr = parse("any_of: []").unwrap();
    for features in feature_sets() {
        assert!(!expr.eval(&features));
    }
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_two_verbs_is_wrong_arity() {
    let err = parse("{and: [item1], or: [item2]}").unwrap_err();
    assert!(matches!(err, ParseError::WrongArity { count: 2, .. }));
}

#[test]
fn test_unknown_verb() {
    let err = parse("{xor: [item1, item2]}").unwrap_err();
    assert!(matches!(err, ParseError::UnknownVerb { .. }));
    assert!(err.to_string().contains("xor"));
}

#[test]
fn test_nested_error_path() {
    let yaml = r#"
all_of:
- item1
- any_of:
  - item2
  - nand: [item3]
"#;
    let err = parse(yaml).unwrap_err();
    assert!(matches!(err, ParseError::UnknownVerb { .. }));
    assert_eq!(err.path(), Some("$.all_of[1].any_of[1]"));
}

#[test]
fn test_malformed_yaml() {
    let err = parse("and: [item1, {or: [item2]").unwrap_err();
    assert!(matches!(err, ParseError::Decode(_)));
}

#[test]
fn test_empty_document_rejected() {
    assert!(parse("").is_err());
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_round_trip_through_text() {
    for yaml in [EXPRESSION, EXPMULTI, "not: []", "1_of: [a, '~b+']"] {
        let original = parse(yaml).unwrap();
        let text = original.to_canonical_text().unwrap();
        let reparsed = parse(&text).unwrap();
        assert_eq!(original, reparsed, "canonical text:\n{}", text);
    }
}

#[test]
fn test_round_trip_through_value() {
    let original = parse(EXPRESSION).unwrap();
    let reparsed = from_value(&ExpressionExporter::export(&original)).unwrap();
    assert_eq!(original, reparsed);
}

#[test]
fn test_canonical_text_is_normalized() {
    let expr = parse(EXPRESSION).unwrap();
    let text = expr.to_canonical_text().unwrap();
    assert!(text.contains("all_of"));
    assert!(text.contains("any_of"));
    assert!(text.contains("none_of"));
    assert!(!text.contains("and:"));
    assert!(!text.contains("not:"));
}

#[test]
fn test_canonical_text_is_idempotent() {
    let first = parse(EXPRESSION).unwrap().to_canonical_text().unwrap();
    let second = parse(&first).unwrap().to_canonical_text().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_serialize_and_exporter_agree() -> anyhow::Result<()> {
    let expr = parse(EXPMULTI)?;
    let from_serde: serde_yaml::Value = serde_yaml::to_value(&expr)?;
    assert_eq!(from_serde, ExpressionExporter::export(&expr));
    Ok(())
}

// =============================================================================
// Builder Option Tests
// =============================================================================

#[test]
fn test_load_from_reader() {
    let expr = load(EXPMULTI.as_bytes()).unwrap();
    assert_eq!(expr.verb(), Verb::AllOf);
}

#[test]
fn test_lenient_regex_never_matches() {
    let builder = ExpressionBuilder::with_options(BuilderOptions::new().validate_regex(false));
    let expr = builder.parse("none_of: ['~[unclosed']").unwrap();
    assert!(expr.eval(&["[unclosed"]));
    assert!(Evaluator::cached().evaluate(&expr, &["[unclosed"]));
}

#[test]
fn test_deeply_nested_document_is_rejected() {
    let mut yaml = String::from("a");
    for _ in 0..10 {
        yaml = format!("{{and: [{}]}}", yaml);
    }
    let builder = ExpressionBuilder::with_options(BuilderOptions::new().with_max_depth(5));
    let err = builder.parse(&yaml).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { max_depth: 5, .. }));
    assert_eq!(parse(&yaml).unwrap().depth(), 10);
}

#[test]
fn test_cached_evaluator_agrees_with_default() {
    let expr: Expression = parse(EXPRESSION).unwrap();
    let evaluator = Evaluator::cached();
    for features in feature_sets() {
        assert_eq!(evaluator.evaluate(&expr, &features), expr.eval(&features));
    }
}

// =============================================================================
// Embedded Expression Tests
// =============================================================================

#[derive(Debug, Deserialize)]
struct Policy {
    name: String,
    rule: Expression,
}

const POLICY: &str = r#"
name: multi-selection
rule:
  and:
  - item1
  - 2_of: [item2, item3, item4]
  - not: [~extra]
"#;

#[test]
fn test_expression_embedded_in_host_document() -> anyhow::Result<()> {
    let policy: Policy = serde_yaml::from_str(POLICY)?;
    assert_eq!(policy.name, "multi-selection");
    assert_eq!(policy.rule.verb(), Verb::AllOf);
    assert!(policy.rule.eval(&["item1", "item2", "item4"]));
    assert!(!policy.rule.eval(&["item1", "item2"]));
    assert!(!policy.rule.eval(&["item1", "item2", "item3", "extra_item"]));
    Ok(())
}

#[test]
fn test_embedded_expression_matches_builder() -> anyhow::Result<()> {
    let embedded: Expression = serde_yaml::from_str(EXPRESSION)?;
    assert_eq!(embedded, parse(EXPRESSION)?);
    Ok(())
}

#[test]
fn test_embedded_expression_rejects_bad_rule() {
    let yaml = "name: broken\nrule: {and: [item1], or: [item2]}\n";
    assert!(serde_yaml::from_str::<Policy>(yaml).is_err());

    let yaml = "name: broken\nrule: {xor: [item1]}\n";
    assert!(serde_yaml::from_str::<Policy>(yaml).is_err());
}

#[test]
fn test_negative_zero_of_is_none_of() {
    let expr = parse("-0_of: [item1]").unwrap();
    assert_eq!(expr.verb(), Verb::NoneOf);
    assert!(expr.eval(&["item2"]));
    assert!(!expr.eval(&["item1"]));
}
