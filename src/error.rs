use std::io;

use thiserror::Error;

/// The main error type for loading and translating documents.
///
/// Every variant is terminal for a run. `category()` gives the prefix the CLI
/// prints in front of the message and `code()` a stable numeric code.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Input file '{path}' does not exist.{}", suffix(.hint, .code))]
    FileNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when the input file exists but cannot be read.
    #[error("{path}: {source}{}", suffix(.hint, .code))]
    Read {
        path: String,
        #[source]
        source: io::Error,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("{message}{}", suffix(.hint, .code))]
    Parse {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when the document parses but has the wrong shape.
    #[error("{message}{}", suffix(.hint, .code))]
    Schema {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("Invalid key name: {name}{}", suffix(.hint, .code))]
    InvalidIdentifier {
        name: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("Unsupported value type: {type_name} at `{path}`{}", suffix(.hint, .code))]
    UnsupportedType {
        type_name: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Strict mode only: a reference names a key that is not resolved yet.
    #[error("Unresolved reference '{reference}' in `{key}`{}", suffix(.hint, .code))]
    UnresolvedReference {
        reference: String,
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("{path}: {source}{}", suffix(.hint, .code))]
    Write {
        path: String,
        #[source]
        source: io::Error,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl TranslateError {
    /// Diagnostic prefix printed by the CLI.
    pub fn category(&self) -> &'static str {
        match self {
            TranslateError::FileNotFound { .. } => "Error",
            TranslateError::Read { .. } => "Error reading input file",
            TranslateError::Parse { .. } => "Error parsing YAML",
            TranslateError::Schema { .. } => "Schema error",
            TranslateError::InvalidIdentifier { .. } => "Syntax error",
            TranslateError::UnsupportedType { .. } => "Value error",
            TranslateError::UnresolvedReference { .. } => "Reference error",
            TranslateError::Write { .. } => "Error writing to file",
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            TranslateError::FileNotFound { code, .. }
            | TranslateError::Read { code, .. }
            | TranslateError::Parse { code, .. }
            | TranslateError::Schema { code, .. }
            | TranslateError::InvalidIdentifier { code, .. }
            | TranslateError::UnsupportedType { code, .. }
            | TranslateError::UnresolvedReference { code, .. }
            | TranslateError::Write { code, .. } => *code,
        }
    }

    pub(crate) fn invalid_identifier(name: &str) -> Self {
        TranslateError::InvalidIdentifier {
            name: name.to_string(),
            hint: Some(
                "Keys must start with a letter and contain only letters, digits and '_'".into(),
            ),
            code: Some(301),
        }
    }

    pub(crate) fn unsupported_type(type_name: &str, path: &str) -> Self {
        TranslateError::UnsupportedType {
            type_name: type_name.to_string(),
            path: path.to_string(),
            hint: Some("Use a string, number, list or mapping".into()),
            code: Some(302),
        }
    }

    pub(crate) fn unresolved_reference(reference: &str, key: &str) -> Self {
        TranslateError::UnresolvedReference {
            reference: reference.to_string(),
            key: key.to_string(),
            hint: Some("References may only name keys defined earlier in the document".into()),
            code: Some(303),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_appends_hint_and_code() {
        let err = TranslateError::invalid_identifier("1bad");
        let text = err.to_string();
        assert!(text.starts_with("Invalid key name: 1bad Hint: "));
        assert!(text.ends_with(" Code: 301"));
        assert_eq!(err.category(), "Syntax error");
        assert_eq!(err.code(), Some(301));
    }

    #[test]
    fn test_display_without_hint_or_code() {
        let err = TranslateError::Schema {
            message: "Root YAML element must be a dictionary.".into(),
            hint: None,
            code: None,
        };
        assert_eq!(err.to_string(), "Root YAML element must be a dictionary.");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_io_errors_keep_source() {
        use std::error::Error as _;

        let err = TranslateError::Write {
            path: "out.config".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            hint: None,
            code: Some(501),
        };
        assert_eq!(err.category(), "Error writing to file");
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("out.config: denied"));
    }
}
