// Author: Dustin Pilgrim
// License: MIT

use std::borrow::Cow;

use log::{trace, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use super::environment::ResolvedEnvironment;
use super::options::TranslatorOptions;
use super::validation::is_valid_identifier;
use crate::ast::Value;

/// `|name|` where `name` looks like a definition name.
static PIPE_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\|(\p{Alphabetic}[\p{Alphabetic}\p{N}_]*)\|").expect("pipe reference pattern")
});

/// Substitutes `|name|` references inside a top-level string value.
///
/// Each pass replaces every `|key|` for every resolved key, walking keys in
/// the order they were defined. Passes repeat while a `|` remains, stopping
/// early once a pass leaves the string unchanged and never running more than
/// `max_pipe_passes` times. A replacement that would grow the string past
/// `max_resolved_len` bytes is not applied and ends resolution. Whatever
/// cannot be resolved stays as literal text.
///
/// Non-string values are returned as they are; strings nested in sequences or
/// mappings are not touched.
pub fn resolve_pipe_references(
    value: &Value,
    env: &ResolvedEnvironment,
    options: &TranslatorOptions,
) -> Value {
    let Value::String(text) = value else {
        return value.clone();
    };

    let mut text = text.clone();
    let mut passes = 0;

    'passes: while text.contains('|') {
        if passes >= options.max_pipe_passes {
            warn!(
                "stopped resolving pipe references after {} passes: {:?}",
                passes, text
            );
            break;
        }
        passes += 1;

        let before = text.clone();
        for (key, resolved) in env.iter() {
            let needle = format!("|{}|", key);
            let count = text.matches(&needle).count();
            if count == 0 {
                continue;
            }

            let replacement = resolved.to_string();
            let grown = text.len() - count * needle.len() + count * replacement.len();
            if grown > options.max_resolved_len {
                warn!(
                    "stopped resolving pipe references: substituting |{}| would produce {} bytes (limit {})",
                    key, grown, options.max_resolved_len
                );
                break 'passes;
            }
            text = text.replace(&needle, &replacement);
        }

        trace!("pipe pass {}: {:?} -> {:?}", passes, before, text);
        if text == before {
            break;
        }
    }

    Value::String(text)
}

/// First `|name|` left in `text`, if any. Used by strict mode after
/// [`resolve_pipe_references`] has run.
pub fn find_unresolved_pipe_reference(text: &str) -> Option<&str> {
    PIPE_REFERENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The key an at-reference names: everything after a leading `@`.
/// The bare string `@` is not a reference.
pub fn at_reference_target(text: &str) -> Option<&str> {
    match text.strip_prefix('@') {
        Some(rest) if !rest.is_empty() => Some(rest),
        _ => None,
    }
}

/// Replaces a whole `@name` string with the textual form of `name` when that
/// key has been resolved. Anything else comes back unchanged.
pub fn resolve_at_reference<'a>(text: &'a str, env: &ResolvedEnvironment) -> Cow<'a, str> {
    match at_reference_target(text).and_then(|name| env.get(name)) {
        Some(value) => Cow::Owned(value.to_string()),
        None => Cow::Borrowed(text),
    }
}

/// The at-reference in `text` that strict mode must reject: one naming a valid
/// identifier that is not resolved. Other `@...` strings are plain text.
pub fn find_unresolved_at_reference<'a>(
    text: &'a str,
    env: &ResolvedEnvironment,
) -> Option<&'a str> {
    at_reference_target(text).filter(|name| is_valid_identifier(name) && !env.contains(name))
}
