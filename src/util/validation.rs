use std::collections::HashSet;
use std::fmt::Display;

use crate::util::error::ConfigError;

pub fn verbose_result_ok<T, E: Display>(context: String, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(t) => Some(t),
        Err(e) => {
            warn!("{}\nError: {}", context, e);
            None
        }
    }
}

/// Blank application ids are rejected before anything touches the network.
pub fn require_application_id(application_id: &str) -> Result<&str, ConfigError> {
    let trimmed = application_id.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::missing_application_id());
    }
    Ok(trimmed)
}

/// Returns the first name that appears more than once, in input order.
pub fn first_duplicate<'a, I>(names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    names.into_iter().find(|name| !seen.insert(*name))
}
