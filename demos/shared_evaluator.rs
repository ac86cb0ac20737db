//! Shared evaluator example
//!
//! This example demonstrates:
//! - Sharing one parsed expression between threads
//! - Reusing compiled regex tokens through a cached evaluator

use featlogic_core::Evaluator;
use featlogic_parser::{BuilderOptions, ExpressionBuilder};
use std::sync::Arc;
use std::thread;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Shared Evaluator Example ===\n");

    let builder = ExpressionBuilder::with_options(BuilderOptions::new().with_max_depth(8));
    let expr = Arc::new(builder.parse(
        r#"
any_of:
- ~^admin_
- all_of: [staff, '~^region_(eu|us)$']
"#,
    )?);
    let evaluator = Arc::new(Evaluator::cached());

    let users: Vec<Vec<String>> = vec![
        vec!["admin_root".into()],
        vec!["staff".into(), "region_eu".into()],
        vec!["staff".into(), "region_apac".into()],
        vec!["guest".into()],
    ];

    let handles: Vec<_> = users
        .into_iter()
        .map(|features| {
            let expr = Arc::clone(&expr);
            let evaluator = Arc::clone(&evaluator);
            thread::spawn(move || {
                let allowed = evaluator.evaluate(&expr, &features);
                log::info!("{:?} -> {}", features, allowed);
                (features, allowed)
            })
        })
        .collect();

    for handle in handles {
        match handle.join() {
            Ok((features, allowed)) => println!("  {:?} -> {}", features, allowed),
            Err(_) => anyhow::bail!("evaluation thread panicked"),
        }
    }

    println!("\nCompiled patterns cached: {}", evaluator.matcher().len());
    Ok(())
}
