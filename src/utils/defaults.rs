/// Returns `value` when present, otherwise `default`.
///
/// The present value is moved through untouched.
pub fn validate_input<T>(value: Option<T>, default: T) -> T {
    match value {
        Some(v) => v,
        None => default,
    }
}

/// Same as [`validate_input`] but only builds the default when it is needed.
pub fn validate_input_with<T, F>(value: Option<T>, default: F) -> T
where
    F: FnOnce() -> T,
{
    match value {
        Some(v) => v,
        None => default(),
    }
}
