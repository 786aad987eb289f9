use crate::core::greeting::{greet, greeting_len, DEFAULT_COUNT, DEFAULT_NAME};
use crate::core::{ConfigProvider, Greeting, OutputFormat};
use crate::utils::error::{GreetError, Result};
use crate::utils::validation::normalize_repeat_count;
use crate::utils::{sanitize_string, validate_input, validate_input_with};

pub struct GreetingEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> GreetingEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Resolves name and count against the defaults, sanitizes the name if
    /// asked to, and builds the greeting. Fails only when the output would
    /// be too large to allocate.
    pub fn run(&self) -> Result<Greeting> {
        let raw_name = validate_input_with(self.config.name().map(str::to_string), || {
            DEFAULT_NAME.to_string()
        });

        let name = if self.config.sanitize() {
            let clean = sanitize_string(&raw_name);
            if clean != raw_name {
                tracing::debug!("Sanitized name {:?} -> {:?}", raw_name, clean);
            }
            if clean.is_empty() {
                tracing::warn!("Name {:?} is empty after sanitizing", raw_name);
            }
            clean
        } else {
            raw_name
        };

        let count =
            normalize_repeat_count(validate_input(self.config.count(), DEFAULT_COUNT as i64));

        if greeting_len(&name, count).is_none() {
            return Err(GreetError::InvalidConfigValueError {
                field: "count".to_string(),
                value: count.to_string(),
                reason: "Greeting would be too large to build".to_string(),
            });
        }

        tracing::info!("Greeting {:?} x{}", name, count);
        let message = greet(&name, count);

        Ok(Greeting {
            name,
            count,
            message,
        })
    }

    pub fn render(&self, greeting: &Greeting) -> Result<String> {
        match self.config.output_format() {
            OutputFormat::Text => Ok(greeting.message.clone()),
            OutputFormat::Json => Ok(serde_json::to_string(greeting)?),
        }
    }
}
