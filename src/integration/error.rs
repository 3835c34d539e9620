//----------------------------------------
// integration errors
//----------------------------------------
use crate::error::GaussprobErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntegrationErr {
    #[error("number of Simpson panel pairs should be at least 1; got 0")]
    ZeroPanels,
    #[error("integration bounds should be finite; got {0}")]
    NonFiniteBound(f64),
}

impl Into<GaussprobErr> for IntegrationErr {
    fn into(self) -> GaussprobErr {
        GaussprobErr::Integration(self)
    }
}
