// Author: Dustin Pilgrim
// License: MIT

use log::{debug, info};

use crate::ast::{Document, Value};
use crate::TranslateError;

mod environment;
mod options;
mod resolve;
mod serialize;
mod validation;

pub use environment::ResolvedEnvironment;
pub use options::{
    DEFAULT_MAX_PIPE_PASSES, DEFAULT_MAX_RESOLVED_LEN, ReferenceMode, TranslatorOptions,
};
pub use resolve::{
    at_reference_target, find_unresolved_at_reference, find_unresolved_pipe_reference,
    resolve_at_reference, resolve_pipe_references,
};
pub use serialize::Serializer;
pub use validation::is_valid_identifier;

/// Translates a [`Document`] into `def` statements.
///
/// Keys are processed once, in document order. Each key's value has its
/// `|name|` references resolved against the keys before it, is recorded in
/// the [`ResolvedEnvironment`], and is then serialized.
pub struct Translator {
    document: Document,
    options: TranslatorOptions,
    resolved: ResolvedEnvironment,
}

impl Translator {
    pub fn new(document: Document) -> Self {
        Self::with_options(document, TranslatorOptions::default())
    }

    pub fn with_options(document: Document, options: TranslatorOptions) -> Self {
        Self {
            document,
            options,
            resolved: ResolvedEnvironment::new(),
        }
    }

    /// Run the translation pass.
    ///
    /// Returns one `def <key> = <value>;` line per top-level key, joined by
    /// newlines. The first failing key aborts the whole pass.
    ///
    /// # Example
    /// ```
    /// use yamlcfg::{loader, Translator};
    ///
    /// let doc = loader::load_str("a: \"1\"\nb: \"|a|-2\"\n").unwrap();
    /// let out = Translator::new(doc).translate().unwrap();
    /// assert_eq!(out, "def a = @\"1\";\ndef b = @\"1-2\";");
    /// ```
    pub fn translate(&mut self) -> Result<String, TranslateError> {
        if !self.resolved.is_empty() {
            self.resolved = ResolvedEnvironment::new();
        }
        let mut lines = Vec::with_capacity(self.document.items.len());

        for (key, value) in &self.document.items {
            let key = match key.as_name() {
                Some(name) if is_valid_identifier(name) => name,
                _ => return Err(TranslateError::invalid_identifier(key.as_str())),
            };

            let resolved = resolve_pipe_references(value, &self.resolved, &self.options);
            if self.options.is_strict() {
                if let Some(name) = resolved.as_str().and_then(find_unresolved_pipe_reference) {
                    return Err(TranslateError::unresolved_reference(&format!("|{}|", name), key));
                }
            }

            debug!("def {}: {}", key, resolved.type_name());
            // Recorded before serializing: a value's own at-references can see it.
            self.resolved.record(key, resolved.clone());

            let rendered =
                Serializer::new(&self.resolved, &self.options, key).serialize(&resolved, 1)?;
            lines.push(format!("def {} = {};", key, rendered));
        }

        info!("translated {} definitions", lines.len());
        Ok(lines.join("\n"))
    }

    /// Keys resolved by the last [`translate`](Self::translate) call, in order.
    pub fn resolved(&self) -> &ResolvedEnvironment {
        &self.resolved
    }

    pub fn resolved_value(&self, key: &str) -> Option<&Value> {
        self.resolved.get(key)
    }
}
