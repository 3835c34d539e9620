//----------------------------------------
// probability errors
//----------------------------------------
use crate::error::GaussprobErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbabilityErr {
    #[error("threshold should be finite; got {0}")]
    NonFiniteThreshold(f64),
    #[error(
        "number of standard deviations below the mean for the lower limit \
        should be positive and finite; got {0}"
    )]
    BadLowerLimit(f64),
}

impl Into<GaussprobErr> for ProbabilityErr {
    fn into(self) -> GaussprobErr {
        GaussprobErr::Probability(self)
    }
}
