//! Basic expression example
//!
//! This example demonstrates:
//! - Parsing a YAML expression
//! - Evaluating it against several feature sets
//! - Reporting a parse error with its location

use featlogic_parser::parse;
use tracing_subscriber::EnvFilter;

const EXPRESSION: &str = r#"
and:
- item1
- or: [item2, item3]
- not: [~extra]
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Basic Expression Example ===\n");

    let expr = parse(EXPRESSION)?;
    println!("Expression: item1 and (item2 or item3) and not ~extra\n");

    let feature_sets: [&[&str]; 4] = [
        &["item1", "item3"],
        &["item2"],
        &["item1", "item2", "extra_item"],
        &["item1", "item2", "item3"],
    ];

    for features in feature_sets {
        println!("  {:<36} -> {}", format!("{:?}", features), expr.eval(features));
    }

    // Structural errors carry the path of the offending node
    match parse("all_of: [item1, {xor: [item2]}]") {
        Ok(_) => println!("\nUnexpectedly parsed"),
        Err(e) => println!("\nRejected: {}", e),
    }

    Ok(())
}
