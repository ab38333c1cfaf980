use indexmap::IndexMap;

use crate::ast::Value;

/// Top-level keys resolved so far, in document order.
///
/// Entries are only ever appended: while key `K` is processed, exactly the
/// keys before `K` are visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedEnvironment {
    values: IndexMap<String, Value>,
}

impl ResolvedEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut env = ResolvedEnvironment::new();
        assert!(env.is_empty());
        env.record("second", Value::Integer(2));
        env.record("first", Value::Integer(1));

        let keys: Vec<&str> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["second", "first"]);
        assert!(env.contains("first"));
        assert_eq!(env.get("second"), Some(&Value::Integer(2)));
        assert_eq!(env.len(), 2);
        assert!(!env.is_empty());
    }
}
