use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, whatever the extracted content
/// - `Error` (2): Command failed (missing source root, config error, unwritable output)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
