use std::path::PathBuf;

use anyhow::Result;

use super::load_rules;

pub fn handle(rules: PathBuf) -> Result<()> {
    let rule_set = load_rules(&rules)?;

    println!("✓ Valid rule configuration: {}", rules.display());
    println!("  Rules: {}", rule_set.len());

    Ok(())
}
