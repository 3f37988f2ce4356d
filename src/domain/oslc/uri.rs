//! URI validation and path template expansion

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::domain::DomainError;

/// Values substituted into `{placeholder}` segments of service paths
pub type PathParameters = BTreeMap<String, String>;

static PLACEHOLDER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Characters that may never appear unescaped in a URI reference
fn is_illegal_uri_char(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '\\' | '^' | '`')
}

/// Parse an absolute URI, rejecting input that a strict URI parser would refuse
///
/// `url::Url` silently percent-encodes some illegal characters; those are
/// rejected here so a malformed base URI never yields a descriptor.
pub fn parse_absolute_uri(value: &str) -> Result<Url, DomainError> {
    if value.is_empty() {
        return Err(DomainError::configuration("URI cannot be empty"));
    }

    if let Some(c) = value.chars().find(|c| is_illegal_uri_char(*c)) {
        return Err(DomainError::configuration(format!(
            "Illegal character {:?} in URI '{}'",
            c, value
        )));
    }

    Url::parse(value)
        .map_err(|e| DomainError::configuration(format!("Invalid URI '{}': {}", value, e)))
}

/// Replace every `{name}` in `template` with its value from `params`
pub fn expand_path_template(template: &str, params: &PathParameters) -> Result<String, DomainError> {
    let mut missing = None;

    let expanded = PLACEHOLDER_PATTERN.replace_all(template, |caps: &regex::Captures<'_>| {
        let name = &caps[1];
        match params.get(name) {
            Some(value) => value.clone(),
            None => {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(name) => Err(DomainError::framework(format!(
            "No value supplied for path parameter '{}' in '{}'",
            name, template
        ))),
        None => Ok(expanded.into_owned()),
    }
}

/// Join a relative path onto a base URI string, validating the result
pub fn join_uri(base: &str, path: &str) -> Result<Url, DomainError> {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    parse_absolute_uri(&format!("{}/{}", base, path))
}
