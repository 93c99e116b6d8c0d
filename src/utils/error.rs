use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for conversion runs
pub type OmdResult<T> = Result<T, OmdError>;

/// Error types for a conversion run
#[derive(Debug)]
pub enum OmdError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// The converter executable could not be located
    MissingConverter { program: PathBuf },
    /// The converter was found but could not be started
    Launch { program: PathBuf, source: io::Error },
    /// The converter exited unsuccessfully
    ConversionFailed {
        program: PathBuf,
        input: PathBuf,
        code: Option<i32>,
    },
    /// The converter exited cleanly but left no output behind
    OutputMissing { input: PathBuf, expected: PathBuf },
    /// A generated file could not be moved into the destination tree
    Relocate {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },
    /// Directory traversal error
    Walk(String),
    /// Invalid file matching pattern
    Pattern(String),
}

impl fmt::Display for OmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OmdError::Io(err) => write!(f, "IO error: {}", err),
            OmdError::Config(msg) => write!(f, "Configuration error: {}", msg),
            OmdError::MissingConverter { program } => {
                write!(f, "Converter executable not found: {}", program.display())
            }
            OmdError::Launch { program, source } => {
                write!(f, "Failed to launch converter {}: {}", program.display(), source)
            }
            OmdError::ConversionFailed { program, input, code } => match code {
                Some(code) => write!(
                    f,
                    "Converter {} exited with status {} for {}",
                    program.display(),
                    code,
                    input.display()
                ),
                None => write!(
                    f,
                    "Converter {} was terminated by a signal while converting {}",
                    program.display(),
                    input.display()
                ),
            },
            OmdError::OutputMissing { input, expected } => write!(
                f,
                "Converter produced no output for {} (expected {})",
                input.display(),
                expected.display()
            ),
            OmdError::Relocate { from, to, message } => write!(
                f,
                "Failed to move {} to {}: {}",
                from.display(),
                to.display(),
                message
            ),
            OmdError::Walk(msg) => write!(f, "Directory walk error: {}", msg),
            OmdError::Pattern(msg) => write!(f, "Pattern error: {}", msg),
        }
    }
}

impl Error for OmdError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OmdError::Io(err) => Some(err),
            OmdError::Launch { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for OmdError {
    fn from(err: io::Error) -> Self {
        OmdError::Io(err)
    }
}

impl From<walkdir::Error> for OmdError {
    fn from(err: walkdir::Error) -> Self {
        OmdError::Walk(err.to_string())
    }
}

impl From<glob::PatternError> for OmdError {
    fn from(err: glob::PatternError) -> Self {
        OmdError::Pattern(err.to_string())
    }
}
