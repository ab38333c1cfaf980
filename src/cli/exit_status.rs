use std::process::ExitCode;

/// Exit status of a `yamlcfg` run.
///
/// - `Success` (0): output written
/// - `Error` (1): any load, translation or write failure
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
