use std::fmt;

use crate::utils::format_float;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i128),
    Float(f64),
    Sequence(Vec<Value>),
    Mapping(Vec<(String, Value)>),
    // Loaded but never emitted: serialization rejects these.
    Bool(bool),
    Null,
    Tagged(String, Box<Value>),
}

/// A top-level key as it appeared in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    String(String),
    /// Any other YAML key, kept as its textual form so it can be rejected in
    /// document order.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub items: Vec<(Key, Value)>, // top-level definitions, in source order
}

impl Key {
    pub fn as_str(&self) -> &str {
        match self {
            Key::String(s) | Key::Other(s) => s,
        }
    }

    /// The key as a definition name, if it was written as a YAML string.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            Key::Other(_) => None,
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}

impl Value {
    /// Name used in diagnostics for unsupported values.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Tagged(..) => "tagged value",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_mapping(&self) -> Option<&Vec<(String, Value)>> {
        if let Value::Mapping(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Renders a value nested inside a sequence or mapping: strings get quoted.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write_quoted(f, s),
            other => write!(f, "{}", other),
        }
    }
}

impl Document {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.iter().find(|(k, _)| k.as_str() == key).map(|(_, v)| v)
    }
}

/// Textual form of a value, as substituted by `|name|` and `@name` references.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => f.write_str(&format_float(*n)),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Null => f.write_str("None"),
            Value::Tagged(tag, inner) => write!(f, "{} {}", tag, inner),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            Value::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, key)?;
                    f.write_str(": ")?;
                    value.fmt_nested(f)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    // Prefer single quotes; switch to double quotes when that avoids escaping.
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    write!(f, "{}", quote)?;
    for ch in s.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c if c.is_control() => match c as u32 {
                n if n < 0x100 => write!(f, "\\x{:02x}", n)?,
                n => write!(f, "\\u{:04x}", n)?,
            },
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "{}", quote)
}
