pub mod defaults;
pub mod error;
pub mod logger;
pub mod sanitize;
pub mod validation;

pub use defaults::{validate_input, validate_input_with};
pub use sanitize::sanitize_string;
