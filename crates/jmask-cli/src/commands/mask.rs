use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use jmask_core::JsonMasker;
use tracing::debug;

use super::load_rules;

pub fn handle(rules: PathBuf, input: String, output: Option<PathBuf>) -> Result<()> {
    let rules = load_rules(&rules)?;
    let masker = JsonMasker::new(rules);

    let document = read_document(&input)?;
    debug!("Read {} bytes from {}", document.len(), input);

    let masked = masker.mask_document(&document)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &masked)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
            println!("✓ Masked document written to {}", path.display());
        }
        None => println!("{}", masked),
    }

    Ok(())
}

/// Read the input document from a file, or stdin when the path is '-'.
fn read_document(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| anyhow::anyhow!("Failed to read input file {}: {}", input, e))
    }
}
