/// Output process error type.
#[derive(Debug)]
pub enum OutputError {
    /// IO error while writing the output document.
    IoError(crate::io::IoError),
}
impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::IoError(error) => write!(f, "- IO Error:\n{}", error),
        }
    }
}
impl From<crate::io::IoError> for OutputError {
    fn from(error: crate::io::IoError) -> Self {
        OutputError::IoError(error)
    }
}

/// Result type for the `output` module.
pub type ProcResult<T> = std::result::Result<T, OutputError>;
