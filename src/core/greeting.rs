pub const DEFAULT_NAME: &str = "World";
pub const DEFAULT_COUNT: usize = 1;

const PREFIX: &str = "Hello, ";
const SUFFIX: &str = "!";

/// Byte length of `greet(name, count)`, or `None` when it would not fit in
/// a `String`.
pub fn greeting_len(name: &str, count: usize) -> Option<usize> {
    if count == 0 {
        return Some(0);
    }
    let single = PREFIX.len().checked_add(name.len())?.checked_add(SUFFIX.len())?;
    let total = single.checked_mul(count)?.checked_add(count - 1)?;
    (total <= isize::MAX as usize).then_some(total)
}

/// Builds `"Hello, <name>!"` repeated `count` times, separated by single
/// spaces. A count of zero gives an empty string.
///
/// Callers taking the count from user input should check it with
/// [`greeting_len`] first.
pub fn greet(name: &str, count: usize) -> String {
    let mut out = String::with_capacity(greeting_len(name, count).unwrap_or(0));
    for i in 0..count {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(PREFIX);
        out.push_str(name);
        out.push_str(SUFFIX);
    }
    out
}

pub fn greet_once(name: &str) -> String {
    greet(name, DEFAULT_COUNT)
}
