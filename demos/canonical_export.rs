//! Canonical export example
//!
//! This example demonstrates:
//! - Normalizing operator spellings (`and`, `or`, `not`) on parse
//! - Writing the canonical YAML form to stdout
//! - Reading the canonical form back

use featlogic_parser::{parse, CanonicalText};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Canonical Export Example ===\n");

    let source = r#"
and:
- item1
- 2_of: [item2, item3, item4]
- not: [~extra]
"#;
    let expr = parse(source)?;

    println!("Canonical form:");
    expr.write_canonical(std::io::stdout())?;

    let reparsed = parse(&expr.to_canonical_text()?)?;
    println!("\nRound trip equal: {}", reparsed == expr);
    println!("Feature tokens: {:?}", expr.features());

    Ok(())
}
