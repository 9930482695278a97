use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Error from the importer.
    Spc(raman_spc::SpcError),
    /// Configuration issues.
    Config(String),
    /// Unreadable input or unwritable output.
    Input(String),
    /// The decoder could not produce an attribute tree.
    Decode(raman_spc::DecodeError),
    /// Argument / usage errors.
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Spc(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Config(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Decode(e) => write!(
                f,
                "{} {e}\n  {} check that Rscript and the hyperSpec package are installed, or pass --rscript",
                "error:".red().bold(),
                "help:".cyan().bold(),
            ),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<raman_spc::SpcError> for CliError {
    fn from(e: raman_spc::SpcError) -> Self {
        match e {
            raman_spc::SpcError::InvalidInput(msg) => CliError::Usage(msg),
            raman_spc::SpcError::ConfigIo { .. } | raman_spc::SpcError::Config { .. } => {
                CliError::Config(e.to_string())
            }
            raman_spc::SpcError::Decode(e) => CliError::Decode(e),
            other => CliError::Spc(other),
        }
    }
}

impl From<raman_spc::DecodeError> for CliError {
    fn from(e: raman_spc::DecodeError) -> Self {
        CliError::Decode(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Input(format!("JSON error: {e}"))
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    process::exit(exit_code(&err))
}

pub fn exit_code(err: &CliError) -> i32 {
    match err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_a_usage_error() {
        let err = CliError::from(raman_spc::SpcError::invalid_input("base identifier is empty"));
        assert_eq!(exit_code(&err), EXIT_USAGE);
    }

    #[test]
    fn test_decode_error_carries_help() {
        colored::control::set_override(false);
        let err = CliError::from(raman_spc::DecodeError::EngineClosed);
        assert_eq!(exit_code(&err), EXIT_ERROR);
        let shown = err.to_string();
        assert!(shown.starts_with("error: Decoder engine has been shut down"));
        assert!(shown.contains("help:"));
    }
}
