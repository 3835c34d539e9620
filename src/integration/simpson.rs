use crate::error::GaussprobErr;
use crate::integration::error::IntegrationErr;
use crate::normal::types::{NormalParams, PdfArgs};

/// Number of panel pairs used when the caller has no preference
pub const DEFAULT_SIMPSON_NPOINTS: usize = 21;

/// Composite Simpson 1/3 rule for `f` over the interval between `a` and
/// `b`, using `2 * npoints` panels. The bounds may be given in either
/// order; equal bounds integrate to exactly 0.
pub fn composite_simpson<F>(f: F, a: f64, b: f64, npoints: usize) -> Result<f64, GaussprobErr>
where
    F: Fn(f64) -> f64,
{
    //----------------------------------------
    // Check arguments
    if npoints == 0 {
        return Err(IntegrationErr::ZeroPanels.into());
    }
    for bound in [a, b] {
        if !bound.is_finite() {
            return Err(IntegrationErr::NonFiniteBound(bound).into());
        }
    }

    let x_l = a.min(b);
    let x_r = a.max(b);
    if x_l == x_r {
        return Ok(0.0);
    }

    //----------------------------------------
    // Weighted sum
    let n = 2 * npoints;
    let h = (x_r - x_l) / n as f64;

    // Endpoints get weight 1, odd interior points 4, even interior points 2
    let interior: f64 = (1..n)
        .map(|j| {
            let weight = if j % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(x_l + j as f64 * h)
        })
        .sum();
    let area = f(x_l) + f(x_r) + interior;

    log::debug!("simpson over [{x_l}, {x_r}] with {n} panels (h = {h:e}): {area}");

    Ok(h / 3.0 * area)
}

/// Integrates a density callback over the interval between `a` and `b`.
/// Every evaluation of `f` receives the evaluation point along with
/// `params`.
pub fn simpson<F>(
    f: F,
    params: &NormalParams,
    a: f64,
    b: f64,
    npoints: usize,
) -> Result<f64, GaussprobErr>
where
    F: Fn(PdfArgs) -> f64,
{
    let params = *params;
    composite_simpson(|x| f(PdfArgs { x, params }), a, b, npoints)
}
