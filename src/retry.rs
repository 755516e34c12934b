//! Bounded retry for flaky external commands

use console::Style;

use crate::error::Result;

/// Run `operation` up to `max_attempts` times, returning the last error if
/// every attempt fails. A warning is printed before each retry.
///
/// The operation receives the zero-based attempt number.
pub fn with_attempts<T, F>(max_attempts: u32, mut operation: F) -> Result<T>
where
    F: FnMut(u32) -> Result<T>,
{
    let mut attempt = 0;
    loop {
        match operation(attempt) {
            Ok(value) => return Ok(value),
            Err(err) if attempt + 1 >= max_attempts => return Err(err),
            Err(err) => {
                println!(
                    "{}",
                    Style::new().yellow().apply_to(format!(
                        "attempt {} failed: {}, retrying...",
                        attempt + 1,
                        err
                    ))
                );
                attempt += 1;
            }
        }
    }
}
