//! Command-line arguments for `yamlcfg`.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::translator::{DEFAULT_MAX_PIPE_PASSES, DEFAULT_MAX_RESOLVED_LEN, TranslatorOptions};

#[derive(Debug, Parser)]
#[command(name = "yamlcfg", version, about = "YAML to Config Translator", long_about = None)]
pub struct Arguments {
    /// Path to the input YAML file.
    pub input_file: PathBuf,

    /// Path to the output file where the result will be saved.
    pub output_file: PathBuf,

    /// Fail on references to keys that are not defined earlier
    #[arg(long)]
    pub strict: bool,

    /// Maximum substitution passes for |name| references
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_PIPE_PASSES as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub max_passes: u64,

    /// Maximum length in bytes of a string built by |name| substitution
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_RESOLVED_LEN as u64)]
    pub max_resolved_len: u64,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Arguments {
    pub fn translator_options(&self) -> TranslatorOptions {
        TranslatorOptions::new()
            .strict(self.strict)
            .max_pipe_passes(usize::try_from(self.max_passes).unwrap_or(usize::MAX))
            .max_resolved_len(usize::try_from(self.max_resolved_len).unwrap_or(usize::MAX))
    }

    /// Log level implied by `-v`; `RUST_LOG` still takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::ReferenceMode;

    #[test]
    fn test_positional_arguments() {
        let args = Arguments::try_parse_from(["yamlcfg", "in.yaml", "out.config"]).unwrap();
        assert_eq!(args.input_file, PathBuf::from("in.yaml"));
        assert_eq!(args.output_file, PathBuf::from("out.config"));
        assert!(!args.strict);
        assert_eq!(args.log_level(), LevelFilter::Warn);

        let options = args.translator_options();
        assert_eq!(options.reference_mode, ReferenceMode::Lenient);
        assert_eq!(options.max_pipe_passes, DEFAULT_MAX_PIPE_PASSES);
        assert_eq!(options.max_resolved_len, DEFAULT_MAX_RESOLVED_LEN);
    }

    #[test]
    fn test_flags() {
        let args = Arguments::try_parse_from([
            "yamlcfg",
            "--strict",
            "--max-passes",
            "3",
            "--max-resolved-len",
            "4096",
            "-vv",
            "in.yaml",
            "out.config",
        ])
        .unwrap();
        assert_eq!(args.log_level(), LevelFilter::Debug);

        let options = args.translator_options();
        assert!(options.is_strict());
        assert_eq!(options.max_pipe_passes, 3);
        assert_eq!(options.max_resolved_len, 4096);
    }

    #[test]
    fn test_missing_output_is_rejected() {
        assert!(Arguments::try_parse_from(["yamlcfg", "in.yaml"]).is_err());
        assert!(Arguments::try_parse_from(["yamlcfg", "--max-passes", "0", "a", "b"]).is_err());
    }
}
