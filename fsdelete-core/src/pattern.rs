//! pattern.rs - Compilation of the delete pattern.
//!
//! The same compilation path is used at configure time (to reject a bad
//! pattern before deployment) and at run time (the pattern is compiled again
//! for every invocation, since validation may have happened elsewhere).
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::ConfigError;

/// Maximum allowed length for a delete pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Upper bound on the compiled program size.
const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiles `pattern` into a [`Regex`] suitable for unanchored name matching.
pub fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(ConfigError::PatternTooLong(pattern.len(), MAX_PATTERN_LENGTH));
    }

    let regex = RegexBuilder::new(pattern)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

    debug!(target: "fsdelete_core::pattern", "Compiled delete pattern '{}'.", pattern);
    Ok(regex)
}

/// Configure-time check of a delete pattern. Has no side effects.
pub fn validate_config(delete_regex: &str) -> Result<(), ConfigError> {
    compile_pattern(delete_regex).map(|_| ())
}
