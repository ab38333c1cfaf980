// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use log::info;

use crate::ast::Document;
use crate::loader;
use crate::translator::{Translator, TranslatorOptions};
use crate::TranslateError;

/// Translate an already loaded document.
pub fn export_document(doc: Document, options: TranslatorOptions) -> Result<String, TranslateError> {
    Translator::with_options(doc, options).translate()
}

/// Translate YAML text in one call.
///
/// # Examples
/// ```
/// use yamlcfg::export::export_str;
/// use yamlcfg::TranslatorOptions;
///
/// let out = export_str("k: [1, 2]\n", TranslatorOptions::default()).unwrap();
/// assert_eq!(out, "def k = { 1. 2. };");
/// ```
pub fn export_str(input: &str, options: TranslatorOptions) -> Result<String, TranslateError> {
    export_document(loader::load_str(input)?, options)
}

/// Read a YAML file, translate it, and write the result to `output`.
///
/// The output file is only created once translation has succeeded, so a
/// failed run leaves nothing behind.
///
/// # Errors
/// Any loader or translation error, or `Write` when the output cannot be
/// written.
pub fn export_file<I, O>(input: I, output: O, options: TranslatorOptions) -> Result<String, TranslateError>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    let doc = loader::load_file(&input)?;
    let translated = export_document(doc, options)?;

    let output = output.as_ref();
    fs::write(output, &translated).map_err(|source| TranslateError::Write {
        path: output.to_string_lossy().to_string(),
        source,
        hint: Some("Check that the output directory exists and is writable".into()),
        code: Some(501),
    })?;

    info!(
        "wrote {} bytes to {}",
        translated.len(),
        output.display()
    );
    Ok(translated)
}
