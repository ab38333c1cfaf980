// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use log::debug;
use serde_yaml::Value as Yaml;

use crate::ast::{Document, Key, Value};
use crate::TranslateError;

/// Load a YAML document from disk.
///
/// # Errors
/// - `FileNotFound` when `path` does not exist
/// - `Read` when the file cannot be read
/// - anything [`load_str`] reports
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document, TranslateError> {
    let path = path.as_ref();
    let display = path.to_string_lossy().to_string();

    if !path.exists() {
        return Err(TranslateError::FileNotFound {
            path: display,
            hint: None,
            code: Some(101),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| TranslateError::Read {
        path: display.clone(),
        source,
        hint: Some("Check that the file is readable and UTF-8 encoded".into()),
        code: Some(102),
    })?;

    debug!("read {} bytes from {}", content.len(), display);
    load_str(&content)
}

/// Parse YAML text into a [`Document`].
///
/// Merge keys (`<<`) are applied. The root must be a mapping. Top-level keys
/// and values of any YAML type are accepted here and checked later, in
/// document order, by the translator. Duplicate keys are a parse error.
pub fn load_str(input: &str) -> Result<Document, TranslateError> {
    let mut root: Yaml = serde_yaml::from_str(input).map_err(parse_error)?;
    root.apply_merge().map_err(parse_error)?;

    let mapping = match root {
        Yaml::Mapping(mapping) => mapping,
        other => {
            return Err(TranslateError::Schema {
                message: "Root YAML element must be a dictionary.".into(),
                hint: Some(format!("Found {} at the document root", yaml_type_name(&other))),
                code: Some(202),
            });
        }
    };

    let mut items = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        // Non-string keys are kept; the translator rejects them in order.
        let key = match key {
            Yaml::String(s) => Key::String(s),
            other => Key::Other(convert(other)?.to_string()),
        };
        items.push((key, convert(value)?));
    }

    debug!("loaded document with {} top-level keys", items.len());
    Ok(Document { items })
}

fn convert(value: Yaml) -> Result<Value, TranslateError> {
    Ok(match value {
        Yaml::String(s) => Value::String(s),
        Yaml::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Value::Integer(i128::from(i)),
            (None, Some(u)) => Value::Integer(i128::from(u)),
            (None, None) => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Yaml::Sequence(items) => {
            Value::Sequence(items.into_iter().map(convert).collect::<Result<_, _>>()?)
        }
        Yaml::Mapping(mapping) => {
            let mut entries = Vec::with_capacity(mapping.len());
            for (key, value) in mapping {
                entries.push((scalar_key(&key)?, convert(value)?));
            }
            Value::Mapping(entries)
        }
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Null => Value::Null,
        Yaml::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            Value::Tagged(tag, Box::new(convert(tagged.value)?))
        }
    })
}

/// Nested mapping keys may be any scalar; they are written by textual form.
fn scalar_key(key: &Yaml) -> Result<String, TranslateError> {
    match key {
        Yaml::String(_) | Yaml::Number(_) | Yaml::Bool(_) | Yaml::Null => {
            Ok(convert(key.clone())?.to_string())
        }
        other => Err(TranslateError::Schema {
            message: format!("Mapping keys must be scalars, found {}", yaml_type_name(other)),
            hint: None,
            code: Some(204),
        }),
    }
}

fn yaml_type_name(value: &Yaml) -> &'static str {
    match value {
        Yaml::Null => "null",
        Yaml::Bool(_) => "bool",
        Yaml::Number(_) => "number",
        Yaml::String(_) => "string",
        Yaml::Sequence(_) => "sequence",
        Yaml::Mapping(_) => "mapping",
        Yaml::Tagged(_) => "tagged value",
    }
}

fn parse_error(err: serde_yaml::Error) -> TranslateError {
    let (line, column) = err
        .location()
        .map_or((0, 0), |loc| (loc.line(), loc.column()));
    TranslateError::Parse {
        message: err.to_string(),
        line,
        column,
        hint: None,
        code: Some(201),
    }
}
