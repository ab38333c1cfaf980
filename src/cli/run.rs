use log::debug;

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::export::export_file;
use crate::TranslateError;

/// Translate `input_file` into `output_file`.
///
/// Returns the success message printed on stdout.
pub fn run(args: &Arguments) -> Result<String, TranslateError> {
    let options = args.translator_options();
    debug!(
        "translating {} -> {} ({:?}, max {} passes)",
        args.input_file.display(),
        args.output_file.display(),
        options.reference_mode,
        options.max_pipe_passes
    );

    export_file(&args.input_file, &args.output_file, options)?;
    Ok(format!(
        "Translation completed successfully. Output written to {}",
        args.output_file.display()
    ))
}

/// Run and report: success message to stdout, categorised diagnostic to
/// stderr.
pub fn run_cli(args: &Arguments) -> ExitStatus {
    match run(args) {
        Ok(message) => {
            println!("{}", message);
            ExitStatus::Success
        }
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            ExitStatus::Error
        }
    }
}

/// `<category>: <message>`, the line the CLI prints for a failed run.
pub fn diagnostic(err: &TranslateError) -> String {
    format!("{}: {}", err.category(), err)
}
