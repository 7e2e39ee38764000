use crate::{
    io,
    output,
    report,
    sim,
};

/// Error-type enum for the `grain_evolver` crate.
/// Wraps the error of each stage.
#[derive(Debug)]
pub enum GrainError {
    IoError(io::IoError),
    ReportError(report::ReportError),
    SimError(sim::SimError),
    OutputError(output::OutputError),
}
impl std::fmt::Display for GrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrainError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            GrainError::ReportError(error) => write!(f, "! REPORT ERROR:\n{}", error),
            GrainError::SimError(error) => write!(f, "! SIMULATION ERROR:\n{}", error),
            GrainError::OutputError(error) => write!(f, "! OUTPUT ERROR:\n{}", error),
        }
    }
}
impl From<io::IoError> for GrainError {
    fn from(error: io::IoError) -> Self {
        GrainError::IoError(error)
    }
}
impl From<report::ReportError> for GrainError {
    fn from(error: report::ReportError) -> Self {
        GrainError::ReportError(error)
    }
}
impl From<sim::SimError> for GrainError {
    fn from(error: sim::SimError) -> Self {
        GrainError::SimError(error)
    }
}
impl From<output::OutputError> for GrainError {
    fn from(error: output::OutputError) -> Self {
        GrainError::OutputError(error)
    }
}

/// Result type for the `grain_evolver` crate.
pub type GrainResult<T> = std::result::Result<T, GrainError>;
