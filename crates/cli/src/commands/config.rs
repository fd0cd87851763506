use anyhow::{Context, Result};

use crate::args::ConfigArgs;
use crate::utils::default_configuration;

pub fn print_config(args: &ConfigArgs) -> Result<()> {
    let json = default_configuration(args.variant)
        .to_json()
        .context("Failed to serialize configuration")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("✓ Configuration written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
