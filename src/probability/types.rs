//----------------------------------------
// probability mod types
//----------------------------------------
use crate::error::GaussprobErr;
use crate::integration::error::IntegrationErr;
use crate::probability::error::ProbabilityErr;

/// Panel pairs used when integrating a density for a tail probability
pub const PROBABILITY_NPOINTS: usize = 100;

/// Distance of the truncated left integration limit below the mean, in
/// standard deviations
pub const LOWER_LIMIT_SDS: f64 = 5.0;

/// Which side of the threshold the probability is computed for
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Tail {
    /// P(x < c)
    Lower,
    /// P(x > c)
    #[default]
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityOptions {
    pub npoints: usize,
    pub lower_limit_sds: f64,
}

impl Default for ProbabilityOptions {
    fn default() -> Self {
        ProbabilityOptions {
            npoints: PROBABILITY_NPOINTS,
            lower_limit_sds: LOWER_LIMIT_SDS,
        }
    }
}

impl ProbabilityOptions {
    pub fn validate(&self) -> Result<(), GaussprobErr> {
        if self.npoints == 0 {
            return Err(IntegrationErr::ZeroPanels.into());
        }
        if !self.lower_limit_sds.is_finite() || self.lower_limit_sds <= 0.0 {
            return Err(ProbabilityErr::BadLowerLimit(self.lower_limit_sds).into());
        }
        Ok(())
    }
}
