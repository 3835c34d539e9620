use crate::normal::types::PdfArgs;

pub fn std_normal_pdf(z: f64) -> f64 {
    (-z * z / 2.0).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// Density of N(mean, sd) at `args.x`
pub fn gaussian_pdf(args: PdfArgs) -> f64 {
    let PdfArgs { x, params } = args;
    std_normal_pdf((x - params.mean()) / params.sd()) / params.sd()
}
