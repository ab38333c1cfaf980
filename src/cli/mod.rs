mod args;
mod exit_status;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{diagnostic, run, run_cli};
