// Author: Dustin Pilgrim
// License: MIT

/// How references to keys that are not resolved yet are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceMode {
    /// Unresolved `|name|` and `@name` stay in the output as literal text.
    #[default]
    Lenient,
    /// Unresolved references fail the translation.
    Strict,
}

pub const DEFAULT_MAX_PIPE_PASSES: usize = 8;
pub const DEFAULT_MAX_RESOLVED_LEN: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorOptions {
    pub reference_mode: ReferenceMode,
    /// Upper bound on `|name|` substitution passes per value. Never below 1.
    pub max_pipe_passes: usize,
    /// Upper bound, in bytes, on a string produced by `|name|` substitution.
    pub max_resolved_len: usize,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            reference_mode: ReferenceMode::Lenient,
            max_pipe_passes: DEFAULT_MAX_PIPE_PASSES,
            max_resolved_len: DEFAULT_MAX_RESOLVED_LEN,
        }
    }
}

impl TranslatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.reference_mode = if strict {
            ReferenceMode::Strict
        } else {
            ReferenceMode::Lenient
        };
        self
    }

    pub fn max_pipe_passes(mut self, passes: usize) -> Self {
        self.max_pipe_passes = passes.max(1);
        self
    }

    pub fn max_resolved_len(mut self, len: usize) -> Self {
        self.max_resolved_len = len;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.reference_mode == ReferenceMode::Strict
    }
}
