//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# class-order configuration

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/migrations/**",
    "**/venv/**",
]

# Respect .gitignore files
respect_gitignore = true

[order]
# Require strict segregation of protected/private members:
# public accessors first, then protected, then private.
strict_mode = false

# Suppress ordering errors involving docstrings
ignore_docstring = false

# Explicit category order; overrides the built-in tables.
# Categories absent from the list fall back to their general
# counterpart (e.g. private_property_method -> property_method),
# and stay unchecked when no fallback matches.
# custom_order = ["docstring", "constant", "field", "__init__", "method"]

# Call names recognized as relation constructors for outer_field
# classification. Defaults to the Django ORM relation fields.
# relation_constructors = ["ForeignKey", "ManyToManyField", "OneToOneField", "GenericRelation"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("class-order.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created class-order.toml");
    println!("\nNext steps:");
    println!("  1. Edit class-order.toml to configure the ordering");
    println!("  2. Run: class-order check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use class_order_core::Config;

    #[test]
    fn template_parses_as_valid_config() {
        let config = Config::parse(super::DEFAULT_CONFIG).unwrap();
        assert!(!config.order.strict_mode);
        assert!(config.analyzer.respect_gitignore);
    }
}
