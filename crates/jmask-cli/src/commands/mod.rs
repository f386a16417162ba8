pub mod check;
pub mod mask;

use std::path::Path;

use anyhow::Result;
use jmask_core::RuleSet;

/// Read and parse a rule configuration file.
pub fn load_rules(path: &Path) -> Result<RuleSet> {
    let config = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read rules file {}: {}", path.display(), e))?;

    let rules = RuleSet::from_json(&config)
        .map_err(|e| anyhow::anyhow!("Failed to parse rules file {}: {}", path.display(), e))?;

    Ok(rules)
}
