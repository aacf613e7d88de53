//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use sentoken_core::CharClasses;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template(&CharClasses::default());

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the character classes");
        println!("2. Validate your configuration:");
        println!("   sentoken validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!("   sentoken process -i input.txt -c {}", self.output.display());

        Ok(())
    }
}

/// Render `classes` as a commented TOML document
fn generate_template(classes: &CharClasses) -> String {
    let quote = |chars: &[char]| toml::Value::String(chars.iter().collect()).to_string();

    format!(
        r#"# Character classes for sentoken
#
# Every class is a string of single characters. A character may belong to
# one class only, and no class may contain whitespace or ".".

[brackets]
# Split off as their own token; each one raises the nesting depth
opening = {opening}
# Stay attached to the preceding word; each one lowers the nesting depth
closing = {closing}

[punctuation]
# End a sentence when no bracket is open (must not be empty)
strong = {strong}
# Split off as their own token, never end a sentence
weak = {weak}

[cutting]
# Split after ' and ’ and around double quotes
apostrophes = {apostrophes}
"#,
        opening = quote(classes.opening()),
        closing = quote(classes.closing()),
        strong = quote(classes.strong()),
        weak = quote(classes.weak()),
        apostrophes = classes.splits_apostrophes(),
    )
}
