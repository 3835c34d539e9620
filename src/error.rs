//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::integration::error::IntegrationErr;
pub use crate::normal::error::NormalDistErr;
pub use crate::probability::error::ProbabilityErr;
use thiserror::Error;

/// Broad classification of a [`GaussprobErr`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument was outside the domain the computation is defined on
    InvalidParameter,
}

#[derive(Error, Debug)]
pub enum GaussprobErr {
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while integrating: {0}")]
    Integration(IntegrationErr),
    #[error("while computing probability: {0}")]
    Probability(ProbabilityErr),
}

impl GaussprobErr {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GaussprobErr::NormalDist(_)
            | GaussprobErr::Integration(_)
            | GaussprobErr::Probability(_) => ErrorKind::InvalidParameter,
        }
    }
}
