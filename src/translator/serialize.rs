// Author: Dustin Pilgrim
// License: MIT

use log::debug;

use super::environment::ResolvedEnvironment;
use super::options::TranslatorOptions;
use super::resolve::{find_unresolved_at_reference, resolve_at_reference};
use crate::ast::Value;
use crate::utils::format_float;
use crate::TranslateError;

const INDENT: &str = "    ";

/// Renders values in the target syntax for one top-level definition.
pub struct Serializer<'a> {
    env: &'a ResolvedEnvironment,
    options: &'a TranslatorOptions,
    key: &'a str,
}

impl<'a> Serializer<'a> {
    pub fn new(env: &'a ResolvedEnvironment, options: &'a TranslatorOptions, key: &'a str) -> Self {
        Self { env, options, key }
    }

    /// Serialize `value` at nesting depth `indent`.
    ///
    /// - strings: at-reference resolved, then `@"..."`
    /// - numbers: bare decimal text
    /// - sequences: `{ a. b. }`
    /// - mappings: `dict(` one `name = value` per line `)`
    ///
    /// Booleans, nulls and tagged values are rejected.
    pub fn serialize(&self, value: &Value, indent: usize) -> Result<String, TranslateError> {
        self.serialize_at(value, indent, self.key)
    }

    fn serialize_at(&self, value: &Value, indent: usize, path: &str) -> Result<String, TranslateError> {
        match value {
            Value::String(s) => self.serialize_string(s),
            Value::Integer(n) => Ok(n.to_string()),
            Value::Float(n) => Ok(format_float(*n)),
            Value::Sequence(items) => {
                let rendered = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| self.serialize_at(item, indent + 1, &format!("{}[{}]", path, i)))
                    .collect::<Result<Vec<_>, _>>()?;
                // Trailing ". " before the brace is part of the dialect.
                Ok(format!("{{ {}. }}", rendered.join(". ")))
            }
            Value::Mapping(entries) => {
                let pad = INDENT.repeat(indent);
                let rendered = entries
                    .iter()
                    .map(|(name, item)| {
                        let child = format!("{}.{}", path, name);
                        let text = self.serialize_at(item, indent + 1, &child)?;
                        Ok(format!("{}{} = {}", pad, name, text))
                    })
                    .collect::<Result<Vec<_>, TranslateError>>()?;
                Ok(format!("dict(\n{}\n{})", rendered.join(",\n"), pad))
            }
            other => Err(TranslateError::unsupported_type(other.type_name(), path)),
        }
    }

    fn serialize_string(&self, text: &str) -> Result<String, TranslateError> {
        if self.options.is_strict() {
            if let Some(name) = find_unresolved_at_reference(text, self.env) {
                return Err(TranslateError::unresolved_reference(&format!("@{}", name), self.key));
            }
        }

        let resolved = resolve_at_reference(text, self.env);
        if resolved != text {
            debug!("{}: resolved {} -> {:?}", self.key, text, resolved);
        }
        Ok(format!("@\"{}\"", resolved))
    }
}
