pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_printable, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "greetkit")]
#[command(about = "Print a friendly greeting")]
pub struct CliConfig {
    /// Who to greet [default: World]
    #[arg(long)]
    pub name: Option<String>,

    /// How many times to repeat the greeting; negative values print nothing [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Strip everything except ASCII letters, digits and whitespace from the name
    #[arg(long)]
    pub sanitize: bool,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// 以命令列參數覆蓋設定檔的值
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        if self.name.is_none() {
            self.name = file.name().map(str::to_string);
        }
        if self.count.is_none() {
            self.count = file.count();
        }
        self.sanitize = self.sanitize || file.sanitize();
        if self.format.is_none() {
            self.format = file.output.format;
        }
        self
    }

    /// Loads, validates and merges the `--config` file, if one was given.
    pub fn resolve(self) -> Result<Self> {
        let Some(path) = self.config.clone() else {
            return Ok(self);
        };

        tracing::info!("Loading configuration from: {}", path);
        let file = TomlConfig::from_file(&path)?;
        file.validate()?;
        Ok(self.merge_file(&file))
    }
}

impl ConfigProvider for CliConfig {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn count(&self) -> Option<i64> {
        self.count
    }

    fn sanitize(&self) -> bool {
        self.sanitize
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(name) = &self.name {
            validate_printable("name", name)?;
        }
        Ok(())
    }
}
