pub mod ast;
pub mod cli;
pub mod error;
pub mod export;
pub mod loader;
pub mod translator;
pub mod utils;

pub use ast::{Document, Key, Value};
pub use error::TranslateError;
pub use translator::{ReferenceMode, ResolvedEnvironment, Translator, TranslatorOptions};
