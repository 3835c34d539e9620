//----------------------------------------
// normal distribution errors
//----------------------------------------
use crate::error::GaussprobErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalDistErr {
    #[error("standard deviation should be positive; got {0}")]
    NonPositiveSd(f64),
    #[error("standard deviation should be finite; got {0}")]
    NonFiniteSd(f64),
    #[error("mean should be finite; got {0}")]
    NonFiniteMean(f64),
}

impl Into<GaussprobErr> for NormalDistErr {
    fn into(self) -> GaussprobErr {
        GaussprobErr::NormalDist(self)
    }
}
