//----------------------------------------
// normal mod types
//----------------------------------------
use crate::error::GaussprobErr;
use crate::normal::error::NormalDistErr;
use crate::normal::pdf::gaussian_pdf;

/// Mean and standard deviation of a normal distribution. The standard
/// deviation is guaranteed to be positive and both fields finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalParams {
    mean: f64,
    sd: f64,
}

impl NormalParams {
    pub fn new(mean: f64, sd: f64) -> Result<NormalParams, GaussprobErr> {
        if !mean.is_finite() {
            return Err(NormalDistErr::NonFiniteMean(mean).into());
        }
        if !sd.is_finite() {
            return Err(NormalDistErr::NonFiniteSd(sd).into());
        }
        if sd <= 0.0 {
            return Err(NormalDistErr::NonPositiveSd(sd).into());
        }
        Ok(NormalParams { mean, sd })
    }

    /// N(0, 1)
    pub fn standard() -> NormalParams {
        NormalParams { mean: 0.0, sd: 1.0 }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sd(&self) -> f64 {
        self.sd
    }

    pub fn pdf(&self, x: f64) -> f64 {
        gaussian_pdf(PdfArgs { x, params: *self })
    }
}

/// Argument handed to a density callback: the evaluation point together
/// with the distribution it is evaluated under
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfArgs {
    pub x: f64,
    pub params: NormalParams,
}
