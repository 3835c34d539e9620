//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::integration::simpson::{DEFAULT_SIMPSON_NPOINTS, composite_simpson, simpson};
pub use crate::normal::pdf::{gaussian_pdf, std_normal_pdf};
pub use crate::normal::types::{NormalParams, PdfArgs};
pub use crate::probability::compute_probability::{probability, probability_with_options};
pub use crate::probability::types::{
    LOWER_LIMIT_SDS, PROBABILITY_NPOINTS, ProbabilityOptions, Tail,
};
pub use crate::report::standard_report;
