use crate::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "svgmap-etl")]
#[command(about = "Extract county ids and path data from an SVG map into JSON")]
pub struct CliConfig {
    #[arg(long = "input", default_value = DEFAULT_INPUT_PATH)]
    pub input_path: String,

    #[arg(long = "output", default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "outline,background")]
    pub exclude_prefixes: Vec<String>,

    #[arg(long, help = "Extract and report without writing the output file")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::parse_from(["svgmap-etl"])
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn exclude_prefixes(&self) -> &[String] {
        &self.exclude_prefixes
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_distinct_paths("output_path", &self.input_path, &self.output_path)?;
        validation::validate_prefixes("exclude_prefixes", &self.exclude_prefixes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_fixed_filenames() {
        let config = CliConfig::parse_from(["svgmap-etl"]);

        assert_eq!(config.input_path, "Map_of_Minnesota_counties_blank.svg");
        assert_eq!(config.output_path, "minnesota_counties.json");
        assert_eq!(config.exclude_prefixes, ["outline", "background"]);
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::parse_from([
            "svgmap-etl",
            "--input",
            "wisconsin.svg",
            "--output",
            "out/wisconsin.json",
            "--exclude-prefixes",
            "border,water",
            "--dry-run",
            "-v",
        ]);

        assert_eq!(config.input_path(), "wisconsin.svg");
        assert_eq!(config.output_path(), "out/wisconsin.json");
        assert_eq!(config.exclude_prefixes(), ["border", "water"]);
        assert!(config.dry_run);
        assert!(config.verbose);
    }

    #[test]
    fn test_validation_rejects_same_input_and_output() {
        let mut config = CliConfig::default();
        config.output_path = config.input_path.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_prefix() {
        let config = CliConfig::parse_from(["svgmap-etl", "--exclude-prefixes", "outline,"]);
        assert!(config.validate().is_err());
    }
}
