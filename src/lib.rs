pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::engine::GreetingEngine;
pub use crate::core::greeting::{greet, greet_once};
pub use crate::domain::model::{Greeting, OutputFormat};
pub use crate::utils::error::{GreetError, Result};
pub use crate::utils::{sanitize_string, validate_input};
