pub mod engine;
pub mod greeting;

pub use crate::domain::model::{Greeting, OutputFormat};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
