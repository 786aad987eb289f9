use crate::domain::model::OutputFormat;

/// Where a greeting run gets its settings from. `None` means "not set here",
/// so the engine can fall back to its defaults.
pub trait ConfigProvider: Send + Sync {
    fn name(&self) -> Option<&str>;
    fn count(&self) -> Option<i64>;
    fn sanitize(&self) -> bool;
    fn output_format(&self) -> OutputFormat;
}
