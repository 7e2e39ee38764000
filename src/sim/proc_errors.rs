/// Simulation process error type.
#[derive(Debug)]
pub enum SimError {
    /// IO error.
    IoError(crate::io::IoError),
    /// Report parsing error.
    ReportError(crate::report::ReportError),
    /// An external program could not be started or exited with a failure.
    ExternalProcessError {
        program: String,
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::IoError(error) => write!(f, "- IO Error:\n{}", error),
            SimError::ReportError(error) => write!(f, "- Report Error:\n{}", error),
            SimError::ExternalProcessError{program, status, stdout, stderr} => {
                match status {
                    Some(code) => write!(f, "- External program `{}` exited with status {}", program, code)?,
                    None => write!(f, "- External program `{}` did not exit normally", program)?,
                }
                write!(f, "\nstdout:\n{}\nstderr:\n{}", stdout, stderr)
            },
            SimError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<crate::io::IoError> for SimError {
    fn from(error: crate::io::IoError) -> Self {
        SimError::IoError(error)
    }
}
impl From<crate::report::ReportError> for SimError {
    fn from(error: crate::report::ReportError) -> Self {
        SimError::ReportError(error)
    }
}

/// Result type for the `sim` module.
pub type ProcResult<T> = std::result::Result<T, SimError>;

/// Create a `SimError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(SimError::StringOnly(error_str.to_string()))
}
